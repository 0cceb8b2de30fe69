//! The record of an applied move.

use std::fmt;

use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::movegen::castling::rook_squares;
use crate::notation::{self, CheckMarker, NotationParts, NotationStyle};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// An applied move: what moved where, what it captured, and the position it produced.
///
/// The previous record of a game is the only history the rules need; it is
/// what makes en passant available.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveRecord {
    position: Position,
    mv: Move,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<PieceKind>,
    check: CheckMarker,
}

impl MoveRecord {
    pub(crate) fn new(
        position: Position,
        mv: Move,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<PieceKind>,
    ) -> MoveRecord {
        MoveRecord {
            position,
            mv,
            piece,
            captured,
            promotion,
            check: CheckMarker::None,
        }
    }

    pub(crate) fn set_check(&mut self, check: CheckMarker) {
        self.check = check;
    }

    /// The move in figurine notation, e.g. `♘f3`, `xd5`, `O-O`, `e8=♕+`.
    pub fn notation(&self) -> String {
        self.render(NotationStyle::default())
    }

    /// Render the move in any notation style.
    pub fn render(&self, style: NotationStyle) -> String {
        notation::render(
            NotationParts {
                kind: self.mv.kind(),
                mover: self.piece.kind,
                color: self.piece.color,
                to: self.mv.to(),
                capture: self.captured.is_some(),
                promotion: self.promotion,
                check: self.check,
            },
            style,
        )
    }

    /// The position after the move.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The move as chosen.
    #[inline]
    pub fn chess_move(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.mv.kind()
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.mv.from()
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.mv.to()
    }

    /// The side that moved.
    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    /// The kind of the moving piece before the move (a pawn for promotions).
    #[inline]
    pub fn piece_kind(&self) -> PieceKind {
        self.piece.kind
    }

    /// The replacement kind of a promotion.
    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// The captured piece, including an en passant victim.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether the move checked or mated the opponent.
    #[inline]
    pub fn check(&self) -> CheckMarker {
        self.check
    }

    /// Squares a piece arrived on: the destination, plus the rook's square for castles.
    pub fn landing_squares(&self) -> impl Iterator<Item = Square> + use<> {
        let rook = rook_squares(self.mv.kind(), self.mv.to()).map(|(_, rook_to)| rook_to);
        std::iter::once(self.mv.to()).chain(rook)
    }
}

impl fmt::Debug for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveRecord({} {:?})", self.notation(), self.mv)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
