//! Error types for coordinates, FEN decoding, position validation, and moves.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A coordinate or square name that does not denote one of the 64 squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// An `(x, y)` pair with a component outside `1..=8`.
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfRange {
        /// File component (1 = a).
        x: i8,
        /// Rank component (1 = rank 1).
        y: i8,
    },
    /// A square name that is not a file letter followed by a rank digit.
    #[error("invalid square name: \"{name}\"")]
    BadName {
        /// The rejected name.
        name: String,
    },
}

/// Errors that occur when decoding a FEN piece placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The placement does not have exactly 8 slash-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 files.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the offending pawn stands.
        square: Square,
    },
    /// Two pieces were supplied for the same square.
    #[error("more than one piece on {square}")]
    OccupiedTwice {
        /// The contested square.
        square: Square,
    },
}

/// Errors raised when a chosen move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The origin square is empty.
    #[error("no piece on {square}")]
    PieceNotFound {
        /// The empty origin square.
        square: Square,
    },
    /// The candidate is not among the legal moves of the piece.
    #[error("illegal move {from}{to}")]
    Illegal {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// A pawn reaches the last rank but no replacement piece was given.
    #[error("promotion requires a replacement piece")]
    MissingPromotion,
    /// The replacement piece is a king or a pawn.
    #[error("cannot promote to {kind:?}")]
    InvalidPromotion {
        /// The rejected replacement.
        kind: PieceKind,
    },
}

/// An unrecognized notation style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notation style: \"{name}\"")]
pub struct NotationStyleError {
    /// The rejected name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError, SquareError};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRankCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 4");
    }

    #[test]
    fn square_error_display() {
        let err = SquareError::OutOfRange { x: 9, y: 1 };
        assert_eq!(format!("{err}"), "coordinate (9, 1) is off the board");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for black, found 0");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Illegal {
            from: Square::E2,
            to: Square::E5,
        };
        assert_eq!(format!("{err}"), "illegal move e2e5");
        let err = MoveError::InvalidPromotion {
            kind: PieceKind::King,
        };
        assert_eq!(format!("{err}"), "cannot promote to King");
    }
}
