//! Attack and check detection.

use crate::color::Color;
use crate::movegen::{Attacks, gen_piece};
use crate::position::Position;
use crate::square::Square;

/// Return `true` if any piece of `by` threatens `target`.
///
/// Threats are the raw moves of each attacker, ignoring whether they would
/// expose the attacker's own king. Pawns threaten their two diagonals only;
/// castling and en passant never capture on `target` and are not considered.
pub fn is_attacked(position: &Position, target: Square, by: Color) -> bool {
    let mut buffer = Vec::with_capacity(32);
    position.pieces_of(by).any(|piece| {
        buffer.clear();
        gen_piece::<Attacks>(position, piece, None, &mut buffer);
        buffer.iter().any(|mv| mv.to() == target)
    })
}

/// Return `true` if `color`'s king is attacked by the other side.
///
/// A side without a king is never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .king_square(color)
        .is_some_and(|king| is_attacked(position, king, !color))
}
