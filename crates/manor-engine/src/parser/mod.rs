//! Command parsing and item name suggestions.

mod command;
mod resolver;

pub use command::{Command, HELP_TEXT, parse_command};
pub use resolver::{FUZZY_THRESHOLD, suggest};
