// File: ./src/model/import.rs
//! Conversion of untyped JSON values into `Todo`s.
//!
//! This is the only place where a value can fail the todo capability check at
//! runtime; typed callers go through `TodoList::add` and the compiler.
use crate::error::ListError;
use crate::model::item::Todo;
use serde_json::Value;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(map) if map.contains_key("todos") => "todo list",
        Value::Object(_) => "object",
    }
}

pub fn todo_from_value(value: &Value) -> Result<Todo, ListError> {
    let mismatch = || ListError::TypeMismatch(kind_of(value).to_string());

    let Value::Object(map) = value else {
        return Err(mismatch());
    };
    if map.contains_key("todos") {
        return Err(mismatch());
    }

    let title = map.get("title").and_then(Value::as_str).ok_or_else(mismatch)?;

    let done = match map.get("done") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(mismatch()),
    };

    match map.get("uid") {
        None | Some(Value::Null) => {
            let mut todo = Todo::new(title);
            todo.done = done;
            Ok(todo)
        }
        Some(Value::String(uid)) => Ok(Todo::with_uid(uid.as_str(), title, done)),
        Some(_) => Err(mismatch()),
    }
}
