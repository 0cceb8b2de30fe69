//! The movement catalog: which directions each piece kind projects along.
//!
//! Every direction vector used by move generation lives here. Pawn vectors are
//! written from White's point of view and mirrored for Black.

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A unit step on the board as `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// File delta.
    pub dx: i8,
    /// Rank delta.
    pub dy: i8,
}

impl Direction {
    /// Create a direction.
    pub const fn new(dx: i8, dy: i8) -> Direction {
        Direction { dx, dy }
    }

    /// The direction as seen by `color`: Black runs the y axis backwards.
    #[inline]
    pub const fn oriented(self, color: Color) -> Direction {
        Direction::new(self.dx, self.dy * color.forward())
    }
}

/// Orthogonal directions; rooks and queens slide along them.
pub const LINE: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
];

/// Diagonal directions; bishops and queens slide along them.
pub const DIAGONAL: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

/// The eight knight leaps.
pub const KNIGHT_LEAPS: [Direction; 8] = [
    Direction::new(1, 2),
    Direction::new(1, -2),
    Direction::new(-1, 2),
    Direction::new(-1, -2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(-2, 1),
    Direction::new(-2, -1),
];

/// Line and diagonal directions together, used by the queen and the king.
pub const ROYAL: [Direction; 8] = concat(LINE, DIAGONAL);

/// A pawn's straight push, from White's side.
pub const PAWN_PUSH: [Direction; 1] = [Direction::new(0, 1)];

/// A pawn's two capturing diagonals, from White's side.
pub const PAWN_CAPTURES: [Direction; 2] = [Direction::new(-1, 1), Direction::new(1, 1)];

const fn concat(a: [Direction; 4], b: [Direction; 4]) -> [Direction; 8] {
    let mut out = [Direction::new(0, 0); 8];
    let mut i = 0;
    while i < 4 {
        out[i] = a[i];
        out[i + 4] = b[i];
        i += 1;
    }
    out
}

/// How a piece kind moves: its direction set and whether it slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Directions in catalog order.
    pub directions: &'static [Direction],
    /// `true` if the piece may travel any number of empty squares along a direction.
    pub slides: bool,
}

/// Look up the movement of a piece kind.
///
/// Pawn directions are White's; use [`directions`] for a color-adjusted set.
pub const fn movement(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Rook => Movement {
            directions: &LINE,
            slides: true,
        },
        PieceKind::Bishop => Movement {
            directions: &DIAGONAL,
            slides: true,
        },
        PieceKind::Queen => Movement {
            directions: &ROYAL,
            slides: true,
        },
        PieceKind::Knight => Movement {
            directions: &KNIGHT_LEAPS,
            slides: false,
        },
        PieceKind::King => Movement {
            directions: &ROYAL,
            slides: false,
        },
        PieceKind::Pawn => Movement {
            directions: &PAWN_PUSH,
            slides: false,
        },
    }
}

/// The catalog directions of `kind`, oriented for `color`.
pub fn directions(kind: PieceKind, color: Color) -> impl Iterator<Item = Direction> {
    let oriented = kind == PieceKind::Pawn;
    movement(kind)
        .directions
        .iter()
        .map(move |&dir| if oriented { dir.oriented(color) } else { dir })
}

/// The capturing diagonals of a pawn of `color`.
pub fn pawn_captures(color: Color) -> impl Iterator<Item = Direction> {
    PAWN_CAPTURES.iter().map(move |dir| dir.oriented(color))
}
