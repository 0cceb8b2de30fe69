//! Session command parsing.

use rookery_core::{NotationStyle, PieceKind, STARTING_FEN, Square, decode};

use crate::error::CliError;

/// A move as typed: origin, destination, and an optional promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// What to do about a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawAction {
    Offer,
    Accept,
}

/// An option set by `setoption`, applied to the next `new` game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOption {
    /// `setoption name Notation value figurine|letter`
    Notation(NotationStyle),
    /// `setoption name StartPosition value startpos|<placement>`
    StartPosition(String),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a game with the current options.
    New,
    /// `position` or `fen` -- print the current placement.
    Position,
    /// `moves` -- list the legal moves of the side to move.
    Moves,
    /// `play e2e4` -- play a move for the side to move.
    Play(MoveText),
    /// `check` -- report whether the side to move is in check.
    Check,
    /// `history` -- print the numbered move list.
    History,
    /// `draw offer` or `draw accept` for the side to move.
    Draw(DrawAction),
    /// `resign` -- the side to move resigns.
    Resign,
    /// `setoption name <name> value <value>`
    SetOption(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// A blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match first {
        "new" => Ok(Command::New),
        "position" | "fen" => Ok(Command::Position),
        "moves" => Ok(Command::Moves),
        "check" => Ok(Command::Check),
        "history" => Ok(Command::History),
        "resign" => Ok(Command::Resign),
        "quit" => Ok(Command::Quit),
        "play" => {
            let text = rest.first().ok_or(CliError::MissingMove)?;
            Ok(Command::Play(parse_move(text)?))
        }
        "draw" => match rest.first() {
            Some(&"offer") => Ok(Command::Draw(DrawAction::Offer)),
            Some(&"accept") => Ok(Command::Draw(DrawAction::Accept)),
            _ => Err(CliError::MalformedDraw),
        },
        "setoption" => parse_setoption(rest),
        _ => Err(CliError::UnknownCommand {
            command: first.to_string(),
        }),
    }
}

/// Parse `e2e4` or `e7e8q` into its squares and promotion letter.
pub fn parse_move(text: &str) -> Result<MoveText, CliError> {
    let invalid = || CliError::InvalidMove {
        text: text.to_string(),
    };
    let from: Square = text.get(0..2).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let to: Square = text.get(2..4).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

    let mut rest = text.get(4..).ok_or_else(invalid)?.chars();
    let promotion = match (rest.next(), rest.next()) {
        (None, _) => None,
        (Some(c), None) => Some(PieceKind::from_fen_char(c).ok_or_else(invalid)?),
        (Some(_), Some(_)) => return Err(invalid()),
    };

    Ok(MoveText {
        from,
        to,
        promotion,
    })
}

/// Parse the `setoption` arguments.
///
/// Supports:
/// - `setoption name Notation value figurine|letter`
/// - `setoption name StartPosition value startpos|<placement>`
fn parse_setoption(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.first() != Some(&"name") {
        return Err(CliError::MalformedSetOption);
    }
    let value_pos = tokens
        .iter()
        .position(|&t| t == "value")
        .ok_or(CliError::MalformedSetOption)?;
    let name = tokens[1..value_pos].join(" ");
    let value = tokens[value_pos + 1..].join(" ");
    if name.is_empty() || value.is_empty() {
        return Err(CliError::MalformedSetOption);
    }

    let invalid = || CliError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "notation" => SessionOption::Notation(value.parse().map_err(|_| invalid())?),
        "startposition" => {
            if value.eq_ignore_ascii_case("startpos") {
                SessionOption::StartPosition(STARTING_FEN.to_string())
            } else {
                decode(&value).map_err(|_| invalid())?;
                SessionOption::StartPosition(value.clone())
            }
        }
        _ => return Err(CliError::UnknownOption { name: name.clone() }),
    };
    Ok(Command::SetOption(option))
}
