// File: ./src/cli.rs
//! Command-line argument handling and help text for the `taskmate` binary.
use crate::model::parser::{DEADLINE_SEPARATOR, EVENT_FROM_SEPARATOR, EVENT_TO_SEPARATOR};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    /// Print the stored list once and exit.
    List,
    /// Run each line in order, then exit.
    Run(Vec<String>),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub root: Option<PathBuf>,
    pub no_save: bool,
}

/// Parses everything after the binary name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut root = None;
    let mut no_save = false;
    let mut positional = Vec::new();

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" if positional.is_empty() => {
                return Ok(CliArgs {
                    mode: Mode::Help,
                    root,
                    no_save,
                });
            }
            "-r" | "--root" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("{} expects a path", arg))?;
                root = Some(PathBuf::from(path));
            }
            "--no-save" => no_save = true,
            _ => positional.push(arg),
        }
    }

    let mode = match positional.first().map(String::as_str) {
        None => Mode::Interactive,
        Some("list") if positional.len() == 1 => Mode::List,
        Some("list") => return Err("'list' takes no arguments".to_string()),
        Some("run") if positional.len() > 1 => Mode::Run(positional[1..].to_vec()),
        Some("run") => return Err("'run' expects at least one command".to_string()),
        Some(other) => return Err(format!("Unknown argument: {}", other)),
    };

    Ok(CliArgs {
        mode,
        root,
        no_save,
    })
}

pub fn print_help(binary_name: &str) {
    println!(
        "Taskmate v{} - a line-oriented task assistant",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {}                       Start an interactive session", binary_name);
    println!("    {} list                  Print the saved task list", binary_name);
    println!("    {} run \"<command>\"...    Run commands in order and exit", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    --no-save             Work on a copy; nothing is written back.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    todo <description>");
    println!(
        "    deadline <description> {}<dd-MM-yyyy>",
        DEADLINE_SEPARATOR
    );
    println!(
        "    event <description>{}<dd-MM-yyyy>{}<dd-MM-yyyy>",
        EVENT_FROM_SEPARATOR, EVENT_TO_SEPARATOR
    );
    println!("    list                  Show all tasks");
    println!("    mark <n> / unmark <n> Set or clear the done flag of task n");
    println!("    delete <n>            Remove task n");
    println!("    find <text>           Tasks whose description contains text");
    println!("    sort description      Order by description");
    println!("    sort deadline         Order by date, undated tasks last");
    println!("    bye                   Leave");
    println!();
    println!("EXAMPLES:");
    println!("    todo buy milk");
    println!("    deadline submit report /by 20-10-2024");
    println!("    event team camp /from 01-11-2024 /to 03-11-2024");
}
