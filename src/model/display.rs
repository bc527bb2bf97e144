// File: ./src/model/display.rs
use crate::model::item::TodoItem;

pub const CHECKED: &str = "[X]";
pub const UNCHECKED: &str = "[ ]";

pub trait TodoDisplay {
    fn checkbox_symbol(&self) -> &'static str;
    fn to_line(&self) -> String;
}

impl<T: TodoItem> TodoDisplay for T {
    fn checkbox_symbol(&self) -> &'static str {
        if self.is_done() { CHECKED } else { UNCHECKED }
    }

    fn to_line(&self) -> String {
        format!("{} {}", self.checkbox_symbol(), self.title())
    }
}

/// Header line printed above the items of a list.
pub fn header(title: &str) -> String {
    format!("---- {} ----", title)
}
