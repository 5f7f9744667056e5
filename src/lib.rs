// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod session;
pub mod storage;
pub mod ui;

pub use command::{Command, Response};
pub use error::InputError;
