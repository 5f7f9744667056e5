// File: ./src/error.rs
//! The one error the command pipeline produces.
use thiserror::Error;

pub const UNRECOGNIZED_INPUT: &str = "I'm sorry mate, that is not a valid input.";
pub const INCOMPLETE_COMMAND: &str =
    "Mate, you may have misspelt or forgotten to type the rest of your command.";
pub const BAD_DATE: &str = "Mate, the date must be in the format dd-MM-yyyy.";
pub const MISSING_TODO_DESCRIPTION: &str = "Mate, you have got to give us a description of the task.";
pub const MISSING_DEADLINE_PARTS: &str =
    "Mate, you need to give me a task description and deadline date.";
pub const MISSING_EVENT_PARTS: &str =
    "Mate, an event should have the description, the start, and the end.";
pub const BAD_SORT_CATEGORY: &str = "You have to sort by description or deadline.";
pub const MISSING_SEARCH_TERM: &str = "Mate, please specify a keyword/string to search for.";

/// Rejected user input. Always recoverable: the message goes back to the user
/// and the task list is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InputError {
    message: String,
}

impl InputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn unrecognized() -> Self {
        Self::new(UNRECOGNIZED_INPUT)
    }

    pub fn incomplete() -> Self {
        Self::new(INCOMPLETE_COMMAND)
    }

    pub fn bad_date() -> Self {
        Self::new(BAD_DATE)
    }

    pub fn not_a_number(verb: &str) -> Self {
        Self::new(format!(
            "Mate, please give a task number (not text) to {}.",
            verb
        ))
    }

    pub fn missing_index(verb: &str) -> Self {
        Self::new(format!("Mate, please specify which task to {}.", verb))
    }

    /// `index` is zero-based; the message shows the user's numbering.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        let shown = index.saturating_add(1);
        match len {
            0 => Self::new(format!("There's no task {} mate, your list is empty.", shown)),
            1 => Self::new(format!("There's no task {} mate, you've only got 1 task.", shown)),
            n => Self::new(format!(
                "There's no task {} mate, pick a number from 1 to {}.",
                shown, n
            )),
        }
    }
}

pub type InputResult<T> = std::result::Result<T, InputError>;
