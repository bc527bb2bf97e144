// File: ./src/error.rs
use std::fmt;

/// Errors raised by the strict `TodoList` operations.
///
/// Lookups by title and removals from an empty list never produce one of
/// these; they answer with `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An untyped value did not describe a todo. Carries the kind received.
    TypeMismatch(String),
    /// Index-based access outside `0..size()`. Carries the offending index.
    IndexOutOfRange(usize),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::TypeMismatch(kind) => {
                write!(f, "can only add Todo objects (got {})", kind)
            }
            ListError::IndexOutOfRange(index) => write!(f, "invalid index: {}", index),
        }
    }
}

impl std::error::Error for ListError {}
