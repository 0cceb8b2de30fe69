//! Text front end: a line-oriented session for playing games from a terminal.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::{Flow, Session};
