// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual form of every date the user types or sees.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single entry of the task list.
///
/// The description is fixed at creation; only the done flag changes afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Task {
    Todo {
        description: String,
        #[serde(default)]
        done: bool,
    },
    Deadline {
        description: String,
        by: NaiveDate,
        #[serde(default)]
        done: bool,
    },
    Event {
        description: String,
        from: NaiveDate,
        to: NaiveDate,
        #[serde(default)]
        done: bool,
    },
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Task::Todo {
            description: description.into(),
            done: false,
        }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Task::Deadline {
            description: description.into(),
            by,
            done: false,
        }
    }

    pub fn event(description: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Task::Event {
            description: description.into(),
            from,
            to,
            done: false,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Task::Todo { description, .. }
            | Task::Deadline { description, .. }
            | Task::Event { description, .. } => description,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done
            }
        }
    }

    pub fn set_done(&mut self, value: bool) {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done = value
            }
        }
    }

    /// The date used when ordering by deadline. Events sort by their start.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Task::Todo { .. } => None,
            Task::Deadline { by, .. } => Some(*by),
            Task::Event { from, .. } => Some(*from),
        }
    }

    /// Case-sensitive substring match on the description.
    pub fn matches(&self, query: &str) -> bool {
        self.description().contains(query)
    }

    pub fn type_symbol(&self) -> &'static str {
        match self {
            Task::Todo { .. } => "[T]",
            Task::Deadline { .. } => "[D]",
            Task::Event { .. } => "[E]",
        }
    }

    pub fn checkbox_symbol(&self) -> &'static str {
        if self.is_done() { "[X]" } else { "[ ]" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.type_symbol(),
            self.checkbox_symbol(),
            self.description()
        )?;
        match self {
            Task::Todo { .. } => Ok(()),
            Task::Deadline { by, .. } => write!(f, " (by: {})", format_date(by)),
            Task::Event { from, to, .. } => write!(
                f,
                " (from: {} to: {})",
                format_date(from),
                format_date(to)
            ),
        }
    }
}
