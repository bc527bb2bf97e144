// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod shell;

pub use error::ListError;
pub use list::TodoList;
pub use model::{Todo, TodoItem};
