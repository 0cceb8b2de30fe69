//! A piece standing on the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored piece, the square it stands on, and whether it has ever moved.
///
/// Pieces are plain values owned by the [`Position`](crate::position::Position)
/// holding them. Moving a piece produces a new `Piece` in a new position; a
/// piece in an earlier snapshot is never touched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// What kind of piece this is.
    pub kind: PieceKind,
    /// Which side owns it.
    pub color: Color,
    /// Where it stands.
    pub square: Square,
    /// Set the first time the piece is relocated. Gates castling.
    pub has_moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Parse a FEN letter into an unmoved piece on `square`.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    pub fn from_fen_char(c: char, square: Square) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, square))
    }

    /// Return the FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(&self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// This piece after being relocated to `square`.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Piece {
        Piece {
            square,
            has_moved: true,
            ..self
        }
    }

    /// Return `true` if this piece is of the given kind and color.
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.fen_char(), self.square)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.fen_char().to_ascii_uppercase();
        let moved = if self.has_moved { "*" } else { "" };
        write!(f, "{color_prefix}{kind_char}@{}{moved}", self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn fen_char_case_sets_color() {
        let white = Piece::from_fen_char('Q', Square::D1).unwrap();
        assert!(white.is(PieceKind::Queen, Color::White));
        let black = Piece::from_fen_char('n', Square::B8).unwrap();
        assert!(black.is(PieceKind::Knight, Color::Black));
        assert!(!black.has_moved);
        assert_eq!(Piece::from_fen_char('x', Square::A1), None);
    }

    #[test]
    fn fen_char_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color, Square::E4);
                assert_eq!(Piece::from_fen_char(piece.fen_char(), Square::E4), Some(piece));
            }
        }
    }

    #[test]
    fn moved_to_sets_flag_and_square() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::H1);
        let moved = rook.moved_to(Square::F1);
        assert_eq!(moved.square, Square::F1);
        assert!(moved.has_moved);
        assert!(!rook.has_moved, "original value is untouched");
    }

    #[test]
    fn formatting() {
        let king = Piece::new(PieceKind::King, Color::Black, Square::E8);
        assert_eq!(format!("{king}"), "ke8");
        assert_eq!(format!("{king:?}"), "BK@e8");
        assert_eq!(format!("{:?}", king.moved_to(Square::F8)), "BK@f8*");
    }
}
