// File: ./src/model/mod.rs
pub mod item;
pub mod list;
pub mod parser;

pub use item::{DATE_FORMAT, Task, format_date};
pub use list::{SortCategory, TaskList};
pub use parser::{Keyword, parse, parse_date, validate};
