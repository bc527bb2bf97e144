// File: ./src/model/mod.rs
pub mod display;
pub mod import;
pub mod item;

pub use display::TodoDisplay;
pub use item::{Todo, TodoItem};
