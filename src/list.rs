// File: src/list.rs
use crate::error::ListError;
use crate::model::display::{self, TodoDisplay};
use crate::model::import::todo_from_value;
use crate::model::{Todo, TodoItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered collection of todos with a fixed title.
///
/// A todo appears at most once (by uid). Index-based accessors are strict and
/// return `ListError::IndexOutOfRange`; title-based lookups and removals from
/// an empty list are lenient and answer with `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "RawTodoList<T>",
    bound(deserialize = "T: TodoItem + Deserialize<'de>")
)]
pub struct TodoList<T = Todo> {
    title: String,
    todos: Vec<T>,
}

#[derive(Deserialize)]
struct RawTodoList<T> {
    title: String,
    #[serde(default = "Vec::new")]
    todos: Vec<T>,
}

impl<T: TodoItem> From<RawTodoList<T>> for TodoList<T> {
    fn from(raw: RawTodoList<T>) -> Self {
        let mut list = TodoList::new(raw.title);
        for todo in raw.todos {
            list.add(todo);
        }
        list
    }
}

impl<T: TodoItem> TodoList<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contains(&self, todo: &T) -> bool {
        self.todos.iter().any(|t| t.same_as(todo))
    }

    /// Appends `todo` unless the same todo is already listed.
    pub fn add(&mut self, todo: T) {
        if self.contains(&todo) {
            log::debug!("Ignoring duplicate todo {} in '{}'", todo.uid(), self.title);
            return;
        }
        log::debug!("Adding '{}' to '{}'", todo.title(), self.title);
        self.todos.push(todo);
    }

    /// Inserts `todo` at the front unless the same todo is already listed.
    pub fn unshift(&mut self, todo: T) {
        if self.contains(&todo) {
            log::debug!("Ignoring duplicate todo {} in '{}'", todo.uid(), self.title);
            return;
        }
        log::debug!("Adding '{}' to the front of '{}'", todo.title(), self.title);
        self.todos.insert(0, todo);
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.todos.last()
    }

    pub fn item_at(&self, index: usize) -> Result<&T, ListError> {
        self.todos.get(index).ok_or(ListError::IndexOutOfRange(index))
    }

    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.todos
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange(index))
    }

    pub fn mark_done_at(&mut self, index: usize) -> Result<(), ListError> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&mut self, index: usize) -> Result<(), ListError> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(TodoItem::mark_done);
    }

    pub fn mark_all_undone(&mut self) {
        self.todos.iter_mut().for_each(TodoItem::mark_undone);
    }

    /// True when every todo is done, including when there are none.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(TodoItem::is_done)
    }

    pub fn shift(&mut self) -> Option<T> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.todos.pop()
    }

    /// Removes the todo at `index`, returned as a one-element vector.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<T>, ListError> {
        if index >= self.todos.len() {
            return Err(ListError::IndexOutOfRange(index));
        }
        let removed = self.todos.remove(index);
        log::debug!("Removed '{}' from '{}'", removed.title(), self.title);
        Ok(vec![removed])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.todos.iter()
    }

    pub fn for_each<F: FnMut(&T)>(&self, visitor: F) {
        self.todos.iter().for_each(visitor);
    }

    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, visitor: F) {
        self.todos.iter_mut().for_each(visitor);
    }

    pub fn find_by_title(&self, title: &str) -> Option<&T> {
        self.todos.iter().find(|t| t.title() == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut T> {
        self.todos.iter_mut().find(|t| t.title() == title)
    }

    /// Marks the first todo titled `title` done. Unknown titles are ignored.
    pub fn mark_done(&mut self, title: &str) {
        if let Some(todo) = self.find_by_title_mut(title) {
            todo.mark_done();
        }
    }

    /// Marks the first todo titled `title` undone. Unknown titles are ignored.
    pub fn mark_undone(&mut self, title: &str) {
        if let Some(todo) = self.find_by_title_mut(title) {
            todo.mark_undone();
        }
    }
}

impl<T: TodoItem + Clone> TodoList<T> {
    /// Copy of the current todos; changing it leaves the list untouched.
    pub fn to_vec(&self) -> Vec<T> {
        self.todos.clone()
    }

    /// New list with the same title holding the todos accepted by `predicate`.
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> TodoList<T> {
        TodoList {
            title: self.title.clone(),
            todos: self.todos.iter().filter(|t| predicate(t)).cloned().collect(),
        }
    }

    pub fn all_done(&self) -> TodoList<T> {
        self.filter(|t| t.is_done())
    }

    pub fn all_not_done(&self) -> TodoList<T> {
        self.filter(|t| !t.is_done())
    }
}

impl TodoList<Todo> {
    /// Adds a todo described by an untyped JSON value.
    ///
    /// Fails with `ListError::TypeMismatch` when the value is not a todo.
    pub fn add_value(&mut self, value: &serde_json::Value) -> Result<(), ListError> {
        let todo = todo_from_value(value)?;
        self.add(todo);
        Ok(())
    }
}

impl<T: TodoItem> fmt::Display for TodoList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display::header(&self.title))?;
        for todo in &self.todos {
            write!(f, "\n{}", todo.to_line())?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a TodoList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
