//! Errors raised by the game orchestrator.

use rookery_core::{BoardError, Color, FenError, MoveError};

use crate::status::GameStatus;

/// Why a game operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid starting position: {0}")]
    Fen(#[from] FenError),

    #[error("unplayable starting position: {0}")]
    Board(#[from] BoardError),

    #[error(transparent)]
    Move(#[from] MoveError),

    /// Both seats are already taken.
    #[error("game already has two players")]
    GameFull,

    /// The operation needs a game in progress.
    #[error("game is not in progress ({status})")]
    NotInProgress { status: GameStatus },

    #[error("it is not {color}'s turn")]
    NotYourTurn { color: Color },

    /// `accept_draw` without an offer from the opponent.
    #[error("no draw offer from {by} to accept")]
    NoDrawOffer { by: Color },
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use crate::status::GameStatus;
    use rookery_core::{Color, FenError, MoveError, Square};

    #[test]
    fn display() {
        assert_eq!(GameError::GameFull.to_string(), "game already has two players");
        assert_eq!(
            GameError::NotYourTurn {
                color: Color::Black
            }
            .to_string(),
            "it is not black's turn"
        );
        assert_eq!(
            GameError::NotInProgress {
                status: GameStatus::Created
            }
            .to_string(),
            "game is not in progress (waiting for players)"
        );
    }

    #[test]
    fn wraps_core_errors() {
        let err: GameError = MoveError::PieceNotFound { square: Square::E4 }.into();
        assert_eq!(err.to_string(), "no piece on e4");

        let err: GameError = FenError::WrongRankCount { found: 3 }.into();
        assert_eq!(
            err.to_string(),
            "invalid starting position: expected 8 ranks in piece placement, found 3"
        );
    }
}
