//! Game lifecycle states and outcomes.

use std::fmt;

use rookery_core::Color;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move was in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move was not in check but had no legal move.
    Stalemate,
    /// A draw offer was accepted.
    DrawAgreed,
    Resignation { winner: Color },
}

impl Outcome {
    /// The winning side, or `None` for a draw.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resignation { winner } => Some(winner),
            Outcome::Stalemate | Outcome::DrawAgreed => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Resignation { winner } => write!(f, "{winner} wins by resignation"),
            Outcome::Stalemate => f.write_str("draw by stalemate"),
            Outcome::DrawAgreed => f.write_str("draw by agreement"),
        }
    }
}

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Waiting for one or both players.
    #[default]
    Created,
    InProgress,
    Finished(Outcome),
}

impl GameStatus {
    /// Return `true` once the game has an outcome.
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Created => f.write_str("waiting for players"),
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Finished(outcome) => write!(f, "finished, {outcome}"),
        }
    }
}
