//! Move candidates produced by the generator.

use std::fmt;

use crate::square::Square;

/// The category of a move candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or a capture by any piece other than a pawn's diagonal.
    Normal,
    /// A pawn capturing diagonally.
    PawnCapture,
    /// A pawn advancing two squares from its starting rank.
    MoveTwo,
    /// A pawn capturing a pawn that just advanced two squares past it.
    EnPassant,
    /// Castling toward the h-file rook.
    SmallCastle,
    /// Castling toward the a-file rook.
    BigCastle,
    /// A pawn move onto the last rank; the replacement kind is chosen when applied.
    Promotion,
}

impl MoveKind {
    /// Return `true` for either castling kind.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::SmallCastle | MoveKind::BigCastle)
    }
}

/// A move candidate: origin, destination, and what kind of move it is.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a move candidate.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// The origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// The destination square. For castling this is the king's destination.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// The same candidate on the color-swapped mirror board.
    pub const fn mirror(self) -> Move {
        Move::new(self.from.mirror(), self.to.mirror(), self.kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
