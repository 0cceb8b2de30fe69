//! The set of pieces on the board at one instant.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::record::MoveRecord;
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A board position: at most one [`Piece`] per square.
///
/// `Position` is a `Copy` value. Applying a move builds a new position from a
/// copy of the old one, so earlier snapshots are never disturbed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// A board with no pieces.
    pub const fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard starting position, every piece unmoved.
    pub fn starting() -> Position {
        let mut position = Position::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            for color in Color::ALL {
                let back = Square::new(file, color.back_rank());
                let pawn = Square::new(file, color.pawn_rank());
                position.put(Piece::new(kind, color, back));
                position.put(Piece::new(PieceKind::Pawn, color, pawn));
            }
        }
        position
    }

    /// Build a position from a list of pieces, each placed on its own square.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Position, BoardError> {
        let mut position = Position::empty();
        for piece in pieces {
            if position.piece_at(piece.square).is_some() {
                return Err(BoardError::OccupiedTwice {
                    square: piece.square,
                });
            }
            position.put(piece);
        }
        Ok(position)
    }

    /// Return the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Iterate over all pieces in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Iterate over the pieces of one color in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// Return the square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    /// Return `true` if the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// Place `piece` on its square, replacing whatever stood there.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.square.index()] = Some(piece);
    }

    /// Remove and return the piece on `square`.
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Check that the position can be played: one king per side and no pawns
    /// on either back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|piece| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        if let Some(pawn) = self.pieces().find(|piece| {
            piece.kind == PieceKind::Pawn
                && matches!(piece.square.rank(), Rank::Rank1 | Rank::Rank8)
        }) {
            return Err(BoardError::PawnOnBackRank {
                square: pawn.square,
            });
        }
        Ok(())
    }

    /// The color-swapped mirror: every piece changes color and moves to the
    /// same file on the opposite rank.
    pub fn mirror(&self) -> Position {
        let mut mirrored = Position::empty();
        for piece in self.pieces() {
            mirrored.put(Piece {
                color: !piece.color,
                square: piece.square.mirror(),
                ..piece
            });
        }
        mirrored
    }

    /// Re-derive `has_moved` from a game history.
    ///
    /// FEN carries no move flags, so a decoded position starts with every piece
    /// unmoved. A piece standing on a square that some recorded move delivered
    /// a piece to cannot be the piece that started there, so it has moved.
    pub fn restore_moved_flags(&mut self, history: &[MoveRecord]) {
        for record in history {
            for square in record.landing_squares() {
                if let Some(piece) = self.squares[square.index()].as_mut() {
                    piece.has_moved = true;
                }
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces()).finish()
    }
}
