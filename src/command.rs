// File: ./src/command.rs
//! Executable commands produced by the parser.
use crate::error::InputResult;
use crate::model::{SortCategory, Task, TaskList};
use crate::ui;

/// One parsed user instruction. Indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Mark(usize),
    Unmark(usize),
    Add(Task),
    Delete(usize),
    Find(String),
    Sort(SortCategory),
}

/// Text for the user, plus whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub exit: bool,
}

impl Response {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

impl Command {
    /// Whether a successful run changes the list and should be persisted.
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Exit | Command::List | Command::Find(_) => false,
            Command::Mark(_)
            | Command::Unmark(_)
            | Command::Add(_)
            | Command::Delete(_)
            | Command::Sort(_) => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::List => "list",
            Command::Mark(_) => "mark",
            Command::Unmark(_) => "unmark",
            Command::Add(_) => "add",
            Command::Delete(_) => "delete",
            Command::Find(_) => "find",
            Command::Sort(_) => "sort",
        }
    }

    /// Applies the command. On error the list is untouched.
    pub fn execute(self, tasks: &mut TaskList) -> InputResult<Response> {
        let response = match self {
            Command::Exit => Response::exit(ui::farewell()),
            Command::List => Response::message(ui::list(tasks)),
            Command::Add(task) => {
                let text = ui::added(&task, tasks.len() + 1);
                tasks.push(task);
                Response::message(text)
            }
            Command::Delete(index) => {
                let removed = tasks.remove(index)?;
                Response::message(ui::deleted(&removed, tasks.len()))
            }
            Command::Mark(index) => Response::message(ui::marked(tasks.set_done(index, true)?)),
            Command::Unmark(index) => {
                Response::message(ui::unmarked(tasks.set_done(index, false)?))
            }
            Command::Find(query) => Response::message(ui::found(&tasks.find(&query))),
            Command::Sort(category) => {
                tasks.sort_by(category);
                Response::message(ui::sorted(tasks))
            }
        };
        Ok(response)
    }
}
