// File: ./src/shell.rs
//! Line-oriented command interpreter around a single `TodoList`.
//!
//! Each input line is one command word followed by an optional argument.
//! Command errors are reported back as text and never end the session.
use crate::error::ListError;
use crate::list::TodoList;
use crate::model::{Todo, TodoDisplay, TodoItem};
use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::{EnumIter, EnumMessage, EnumString, IntoEnumIterator};

pub const NONE: &str = "(none)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, EnumMessage, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Command {
    #[strum(message = "add a new todo", detailed_message = "<title>")]
    Add,
    #[strum(message = "add a todo from a JSON object", detailed_message = "<json>")]
    Import,
    #[strum(message = "print the list")]
    Show,
    #[strum(message = "number of todos")]
    Size,
    #[strum(message = "first todo")]
    First,
    #[strum(message = "last todo")]
    Last,
    #[strum(message = "todo at index", detailed_message = "<index>")]
    Item,
    #[strum(message = "mark todo at index done", detailed_message = "<index>")]
    Done,
    #[strum(message = "mark todo at index undone", detailed_message = "<index>")]
    Undone,
    #[strum(message = "mark every todo done")]
    DoneAll,
    #[strum(message = "mark every todo undone")]
    UndoneAll,
    #[strum(message = "mark first todo with title done", detailed_message = "<title>")]
    Check,
    #[strum(message = "mark first todo with title undone", detailed_message = "<title>")]
    Uncheck,
    #[strum(message = "find first todo with title", detailed_message = "<title>")]
    Find,
    #[strum(message = "remove and print the first todo")]
    Shift,
    #[strum(message = "remove and print the last todo")]
    Pop,
    #[strum(message = "remove todo at index", detailed_message = "<index>")]
    Remove,
    #[strum(message = "list of done todos")]
    Completed,
    #[strum(message = "list of pending todos")]
    Pending,
    #[strum(message = "whether every todo is done")]
    IsDone,
    #[strum(message = "list as JSON")]
    Json,
    #[strum(message = "this help")]
    Help,
    #[strum(to_string = "quit", serialize = "exit", message = "leave")]
    Quit,
}

#[derive(Debug)]
pub enum ShellError {
    UnknownCommand(String),
    MissingArgument(Command),
    InvalidIndex(String),
    List(ListError),
    Json(serde_json::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::UnknownCommand(word) => {
                write!(f, "unknown command '{}' (try 'help')", word)
            }
            ShellError::MissingArgument(cmd) => write!(f, "'{}' needs an argument", cmd),
            ShellError::InvalidIndex(raw) => write!(f, "invalid index: {}", raw),
            ShellError::List(e) => write!(f, "{}", e),
            ShellError::Json(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::List(e) => Some(e),
            ShellError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ListError> for ShellError {
    fn from(e: ListError) -> Self {
        Self::List(e)
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

fn parse_index(raw: &str) -> Result<usize, ShellError> {
    raw.parse::<usize>()
        .map_err(|_| ShellError::InvalidIndex(raw.to_string()))
}

fn line_or_none(todo: Option<&Todo>) -> String {
    todo.map(|t| t.to_line()).unwrap_or_else(|| NONE.to_string())
}

pub fn help_text() -> String {
    Command::iter()
        .map(|cmd| {
            let usage = match cmd.get_detailed_message() {
                Some(arg) => format!("{} {}", cmd, arg),
                None => cmd.to_string(),
            };
            format!("  {:<20} {}", usage, cmd.get_message().unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone)]
pub struct Shell {
    list: TodoList<Todo>,
}

impl Shell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            list: TodoList::new(title),
        }
    }

    pub fn list(&self) -> &TodoList<Todo> {
        &self.list
    }

    /// Runs one command line against the list and returns the text to print.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Continue(String::new()));
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let cmd = Command::from_str(word)
            .map_err(|_| ShellError::UnknownCommand(word.to_string()))?;
        let require_arg = || {
            if arg.is_empty() {
                Err(ShellError::MissingArgument(cmd))
            } else {
                Ok(arg)
            }
        };

        log::debug!("Executing {} with argument '{}'", cmd, arg);

        let out = match cmd {
            Command::Add => {
                let todo = Todo::new(require_arg()?);
                let out = format!("Added {}", todo.to_line());
                self.list.add(todo);
                out
            }
            Command::Import => {
                let value: serde_json::Value = serde_json::from_str(require_arg()?)?;
                let before = self.list.size();
                self.list.add_value(&value)?;
                if self.list.size() > before {
                    format!("Imported {}", line_or_none(self.list.last()))
                } else {
                    "Already listed".to_string()
                }
            }
            Command::Show => self.list.to_string(),
            Command::Size => self.list.size().to_string(),
            Command::First => line_or_none(self.list.first()),
            Command::Last => line_or_none(self.list.last()),
            Command::Item => {
                let index = parse_index(require_arg()?)?;
                self.list.item_at(index)?.to_line()
            }
            Command::Done => {
                let index = parse_index(require_arg()?)?;
                self.list.mark_done_at(index)?;
                self.list.item_at(index)?.to_line()
            }
            Command::Undone => {
                let index = parse_index(require_arg()?)?;
                self.list.mark_undone_at(index)?;
                self.list.item_at(index)?.to_line()
            }
            Command::DoneAll => {
                self.list.mark_all_done();
                self.list.to_string()
            }
            Command::UndoneAll => {
                self.list.mark_all_undone();
                self.list.to_string()
            }
            Command::Check => {
                let title = require_arg()?;
                self.list.mark_done(title);
                line_or_none(self.list.find_by_title(title))
            }
            Command::Uncheck => {
                let title = require_arg()?;
                self.list.mark_undone(title);
                line_or_none(self.list.find_by_title(title))
            }
            Command::Find => line_or_none(self.list.find_by_title(require_arg()?)),
            Command::Shift => line_or_none(self.list.shift().as_ref()),
            Command::Pop => line_or_none(self.list.pop().as_ref()),
            Command::Remove => {
                let index = parse_index(require_arg()?)?;
                self.list
                    .remove_at(index)?
                    .iter()
                    .map(|t| format!("Removed {}", t.title()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Command::Completed => self.list.all_done().to_string(),
            Command::Pending => self.list.all_not_done().to_string(),
            Command::IsDone => self.list.is_done().to_string(),
            Command::Json => serde_json::to_string_pretty(&self.list)?,
            Command::Help => help_text(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(out))
    }

    /// Reads commands from `input` until EOF or `quit`, writing results to `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        prompt: &str,
    ) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}", prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.execute(&line) {
                Ok(Outcome::Continue(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                }
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    log::debug!("Command '{}' failed: {}", line.trim(), e);
                    writeln!(output, "error: {}", e)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(Command::from_str("done-all").unwrap(), Command::DoneAll);
        assert_eq!(Command::from_str("ADD").unwrap(), Command::Add);
        assert_eq!(Command::from_str("exit").unwrap(), Command::Quit);
        assert!(Command::from_str("frobnicate").is_err());
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        for cmd in Command::iter() {
            assert!(help.contains(&cmd.to_string()), "missing {}", cmd);
        }
    }

    #[test]
    fn non_numeric_index_is_reported_verbatim() {
        let err = parse_index("hi").unwrap_err();
        assert_eq!(err.to_string(), "invalid index: hi");
    }
}
