// File: ./src/ui.rs
//! Renders task-list state and command results as display text.
//! Nothing here prints; callers decide where the text goes.
use crate::model::{Task, TaskList};

pub const HORIZONTAL_LINE: &str = "___________________________";
const INDENT: &str = "   ";

pub fn welcome(user_name: &str) -> String {
    format!(
        "G'day {}, I'm Taskmate.\nWhat can I do ya for?",
        user_name
    )
}

pub fn farewell() -> String {
    "Bye mate, see you around.".to_string()
}

fn numbered<'a>(header: &str, rows: impl IntoIterator<Item = (usize, &'a Task)>) -> String {
    let mut out = String::from(header);
    for (index, task) in rows {
        out.push('\n');
        out.push_str(&format!("{}. {}", index + 1, task));
    }
    out
}

pub fn list(tasks: &TaskList) -> String {
    numbered("Here are the tasks in your list:", tasks.iter().enumerate())
}

pub fn sorted(tasks: &TaskList) -> String {
    numbered("Here is your sorted task list:", tasks.iter().enumerate())
}

/// `matches` carry zero-based positions. No matches renders as the bare header.
pub fn found(matches: &[(usize, &Task)]) -> String {
    numbered(
        "Here are the matching tasks found:",
        matches.iter().copied(),
    )
}

pub fn added(task: &Task, len: usize) -> String {
    format!(
        "Got it. I've added this task for ya:\n{}{}\nNow you've got {} in the list mate.",
        INDENT,
        task,
        count(len)
    )
}

pub fn deleted(task: &Task, len: usize) -> String {
    format!(
        "Gotcha mate, I've deleted the following task:\n{}{}\nNow you've got {} left.",
        INDENT,
        task,
        count(len)
    )
}

pub fn marked(task: &Task) -> String {
    format!("Good on ya! I've marked it done:\n{}{}", INDENT, task)
}

pub fn unmarked(task: &Task) -> String {
    format!(
        "What's happened here mate? I've unmarked it for ya:\n{}{}",
        INDENT, task
    )
}

fn count(len: usize) -> String {
    if len == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", len)
    }
}

/// Sandwiches a response between horizontal rules, indenting every line.
pub fn frame(text: &str) -> String {
    let mut out = String::from(HORIZONTAL_LINE);
    out.push('\n');
    for line in text.lines() {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(HORIZONTAL_LINE);
    out
}
