// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

fn default_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Capability contract every entry of a `TodoList` must satisfy.
///
/// Identity is carried by `uid()`: two items are the same todo when their uids
/// match, regardless of title or status.
pub trait TodoItem: fmt::Display {
    fn uid(&self) -> &str;
    fn title(&self) -> &str;
    fn is_done(&self) -> bool;
    fn mark_done(&mut self);
    fn mark_undone(&mut self);

    fn same_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.uid() == other.uid()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default = "default_uid")]
    uid: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            uid: default_uid(),
            title: title.into(),
            done: false,
        }
    }

    /// Rebuilds a todo with a known identity (e.g. one read back from JSON).
    pub fn with_uid(uid: impl Into<String>, title: impl Into<String>, done: bool) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            done,
        }
    }
}

impl TodoItem for Todo {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn mark_done(&mut self) {
        self.done = true;
    }

    fn mark_undone(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
