// File: src/model/parser.rs
//! Turns one line of user input into a [`Command`].
//!
//! Validation and interpretation share the tokenizing helpers below, so any
//! line that [`validate`] accepts is guaranteed to [`parse`].
use crate::command::Command;
use crate::error::{self, InputError, InputResult};
use crate::model::item::{DATE_FORMAT, Task};
use crate::model::list::SortCategory;
use chrono::NaiveDate;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub const DEADLINE_SEPARATOR: &str = "/by ";
pub const EVENT_FROM_SEPARATOR: &str = " /from ";
pub const EVENT_TO_SEPARATOR: &str = " /to ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Todo,
    Deadline,
    Event,
    Delete,
    Sort,
    Mark,
    Unmark,
    Find,
    Bye,
    List,
}

impl Keyword {
    /// Keywords that stand alone and take no argument.
    pub fn is_bare(&self) -> bool {
        matches!(self, Keyword::Bye | Keyword::List)
    }
}

// --- TOKENIZING ---

/// Splits a line into its keyword and the text after "keyword ".
/// Bare keywords return an empty remainder.
fn split_command(input: &str) -> InputResult<(Keyword, &str)> {
    let line = input.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();

    if let Ok(keyword) = Keyword::from_str(trimmed)
        && keyword.is_bare()
    {
        return Ok((keyword, ""));
    }

    let head = line.trim_start();
    let keyword = Keyword::iter()
        .filter(|k| !k.is_bare())
        .find(|k| head.starts_with(k.to_string().as_str()))
        .ok_or_else(InputError::unrecognized)?;

    let after = &head[keyword.to_string().len()..];
    match after.strip_prefix(' ') {
        Some(rest) if !rest.is_empty() => Ok((keyword, rest)),
        _ => Err(InputError::incomplete()),
    }
}

/// Strict `dd-MM-yyyy`: two-digit day and month, four-digit year.
pub fn parse_date(text: &str) -> InputResult<NaiveDate> {
    let text = text.trim();
    let shape_ok = text.len() == 10
        && text.char_indices().all(|(i, c)| match i {
            2 | 5 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(InputError::bad_date());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| InputError::bad_date())
}

fn split_todo(rest: &str) -> InputResult<&str> {
    if rest.trim().is_empty() {
        return Err(InputError::new(error::MISSING_TODO_DESCRIPTION));
    }
    Ok(rest)
}

fn split_deadline(rest: &str) -> InputResult<(&str, NaiveDate)> {
    let parts: Vec<&str> = rest.split(DEADLINE_SEPARATOR).collect();
    let [description, by] = parts[..] else {
        return Err(InputError::new(error::MISSING_DEADLINE_PARTS));
    };
    let description = description.trim();
    if description.is_empty() || by.trim().is_empty() {
        return Err(InputError::new(error::MISSING_DEADLINE_PARTS));
    }
    Ok((description, parse_date(by)?))
}

fn split_event(rest: &str) -> InputResult<(&str, NaiveDate, NaiveDate)> {
    let missing = || InputError::new(error::MISSING_EVENT_PARTS);

    if rest.matches(EVENT_TO_SEPARATOR).count() != 1 {
        return Err(missing());
    }

    let head: Vec<&str> = rest.split(EVENT_FROM_SEPARATOR).collect();
    let [description, range] = head[..] else {
        return Err(missing());
    };
    let tail: Vec<&str> = range.split(EVENT_TO_SEPARATOR).collect();
    let [from, to] = tail[..] else {
        return Err(missing());
    };

    let description = description.trim();
    if description.is_empty() || from.trim().is_empty() || to.trim().is_empty() {
        return Err(missing());
    }
    Ok((description, parse_date(from)?, parse_date(to)?))
}

/// Returns the zero-based index named by the first token of `rest`.
fn split_index(rest: &str, verb: &str) -> InputResult<usize> {
    let token = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| InputError::missing_index(verb))?;
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::not_a_number(verb));
    }
    // All digits; only overflow can fail, and such a task cannot exist anyway.
    let shown = token.parse::<usize>().unwrap_or(usize::MAX);
    shown
        .checked_sub(1)
        .ok_or_else(|| InputError::new("Mate, task numbers start at 1."))
}

fn split_sort(rest: &str) -> InputResult<SortCategory> {
    rest.split_whitespace()
        .next()
        .and_then(|token| SortCategory::from_str(token).ok())
        .ok_or_else(|| InputError::new(error::BAD_SORT_CATEGORY))
}

fn split_find(rest: &str) -> InputResult<&str> {
    if rest.trim().is_empty() {
        return Err(InputError::new(error::MISSING_SEARCH_TERM));
    }
    Ok(rest)
}

// --- VALIDATION ---

/// Checks that `input` names a well-formed command without building it.
pub fn validate(input: &str) -> InputResult<()> {
    let (keyword, rest) = split_command(input)?;
    match keyword {
        Keyword::Bye | Keyword::List => {}
        Keyword::Todo => {
            split_todo(rest)?;
        }
        Keyword::Deadline => {
            split_deadline(rest)?;
        }
        Keyword::Event => {
            split_event(rest)?;
        }
        Keyword::Delete => {
            split_index(rest, "delete")?;
        }
        Keyword::Mark => {
            split_index(rest, "mark")?;
        }
        Keyword::Unmark => {
            split_index(rest, "unmark")?;
        }
        Keyword::Sort => {
            split_sort(rest)?;
        }
        Keyword::Find => {
            split_find(rest)?;
        }
    }
    Ok(())
}

// --- INTERPRETATION ---

pub fn parse(input: &str) -> InputResult<Command> {
    validate(input)?;

    let (keyword, rest) = split_command(input)?;
    let command = match keyword {
        Keyword::Bye => Command::Exit,
        Keyword::List => Command::List,
        Keyword::Todo => Command::Add(Task::todo(split_todo(rest)?)),
        Keyword::Deadline => {
            let (description, by) = split_deadline(rest)?;
            Command::Add(Task::deadline(description, by))
        }
        Keyword::Event => {
            let (description, from, to) = split_event(rest)?;
            Command::Add(Task::event(description, from, to))
        }
        Keyword::Delete => Command::Delete(split_index(rest, "delete")?),
        Keyword::Mark => Command::Mark(split_index(rest, "mark")?),
        Keyword::Unmark => Command::Unmark(split_index(rest, "unmark")?),
        Keyword::Sort => Command::Sort(split_sort(rest)?),
        Keyword::Find => Command::Find(split_find(rest)?.to_string()),
    };
    log::debug!("Parsed '{}' command", keyword);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(input: &str) -> String {
        validate(input).unwrap_err().message().to_string()
    }

    #[test]
    fn test_keyword_precedence() {
        assert_eq!(message("hello there"), error::UNRECOGNIZED_INPUT);
        assert_eq!(message("byebye"), error::UNRECOGNIZED_INPUT);
        assert_eq!(message("todo"), error::INCOMPLETE_COMMAND);
        assert_eq!(message("todoist"), error::INCOMPLETE_COMMAND);
        assert_eq!(message("todo "), error::INCOMPLETE_COMMAND);
        assert_eq!(message("todo    "), error::MISSING_TODO_DESCRIPTION);
        assert_eq!(message("find    "), error::MISSING_SEARCH_TERM);
        assert_eq!(
            message("mark    "),
            InputError::missing_index("mark").message()
        );
        assert_eq!(message("sort   "), error::BAD_SORT_CATEGORY);
        assert!(validate("  list  ").is_ok());
        assert!(validate("bye\n").is_ok());
    }

    #[test]
    fn test_unmark_is_not_mistaken_for_mark() {
        assert_eq!(parse("unmark 2").unwrap(), Command::Unmark(1));
        assert_eq!(parse("mark 2").unwrap(), Command::Mark(1));
    }

    #[test]
    fn test_date_shape_is_strict() {
        assert!(parse_date("05-01-2024").is_ok());
        assert!(parse_date("5-1-2024").is_err());
        assert!(parse_date("2024-01-05").is_err());
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("29-02-2024").is_ok());
    }

    #[test]
    fn test_missing_separators_fail_cleanly() {
        assert_eq!(
            message("deadline finish report"),
            error::MISSING_DEADLINE_PARTS
        );
        assert_eq!(message("deadline /by 01-01-2024"), error::MISSING_DEADLINE_PARTS);
        assert_eq!(
            message("deadline a /by 01-01-2024 /by 02-01-2024"),
            error::MISSING_DEADLINE_PARTS
        );
        assert_eq!(message("event party /from 01-01-2024"), error::MISSING_EVENT_PARTS);
        assert_eq!(message("event /from 01-01-2024 /to 02-01-2024"), error::MISSING_EVENT_PARTS);
        assert_eq!(message("event party /to 01-01-2024 /from 02-01-2024"), error::MISSING_EVENT_PARTS);
        assert_eq!(
            message("event a /to b /from 01-01-2024 /to 02-01-2024"),
            error::MISSING_EVENT_PARTS
        );
        assert_eq!(
            message("event a /from 01-01-2024 /to 02-01-2024 /to 03-01-2024"),
            error::MISSING_EVENT_PARTS
        );
        assert_eq!(
            message("event a /from b /from 01-01-2024 /to 02-01-2024"),
            error::MISSING_EVENT_PARTS
        );
    }

    #[test]
    fn test_event_dates_are_checked() {
        assert_eq!(message("event party /from tomorrow /to 02-01-2024"), error::BAD_DATE);
        assert_eq!(message("event party /from 01-01-2024 /to 32-01-2024"), error::BAD_DATE);
    }

    #[test]
    fn test_index_zero_is_rejected() {
        assert!(validate("delete 0").is_err());
        assert!(validate("delete 1").is_ok());
    }

    #[test]
    fn test_huge_index_parses() {
        let cmd = parse("mark 99999999999999999999999999").unwrap();
        assert_eq!(cmd, Command::Mark(usize::MAX - 1));
    }
}
