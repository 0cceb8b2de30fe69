//! Front-end errors.

use rookery_game::GameError;

/// Errors that can occur while handling a session command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A `play` command without a move.
    #[error("play needs a move such as e2e4 or e7e8q")]
    MissingMove,

    /// A move that is not `<from><to>` with an optional promotion letter.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The rejected move text.
        text: String,
    },

    /// A `draw` command without `offer` or `accept`.
    #[error("draw needs offer or accept")]
    MalformedDraw,

    /// The `setoption` command is missing its `name` or `value` keyword.
    #[error("malformed setoption command: expected setoption name <name> value <value>")]
    MalformedSetOption,

    /// An option name this front end does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An option value that could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An unrecognized command word.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The first word of the line.
        command: String,
    },

    /// An input line that is not UTF-8.
    #[error("input is not valid UTF-8")]
    NotUtf8,

    /// A game command before any `new`.
    #[error("no game; start one with new")]
    NoGame,

    /// The game refused the command.
    #[error(transparent)]
    Game(#[from] GameError),

    /// An I/O error on the session streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    /// Return `true` for errors that end the session rather than the command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io { .. })
    }
}
