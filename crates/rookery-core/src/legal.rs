//! The legality filter: candidates that do not leave the mover in check.

use tracing::trace;

use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::make_move::execute;
use crate::movegen::{MoveMap, candidate_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::record::MoveRecord;

/// Legal moves of a single piece.
///
/// Every candidate is played on a private copy of `position`; the candidate
/// survives only if the mover's king is safe afterwards.
pub fn legal_moves_of(position: &Position, piece: Piece, last: Option<&MoveRecord>) -> Vec<Move> {
    candidate_moves(position, piece, last)
        .into_iter()
        .filter(|&mv| {
            // The replacement kind never changes whether our own king is exposed.
            let after = execute(position, piece, mv, PieceKind::Queen);
            let safe = !is_in_check(&after, piece.color);
            if !safe {
                trace!(%mv, "candidate leaves king in check");
            }
            safe
        })
        .collect()
}

/// Legal moves of every piece of `side`.
///
/// `last` is the previous move of the game, needed for en passant.
pub fn legal_moves(position: &Position, side: Color, last: Option<&MoveRecord>) -> MoveMap {
    let mut map = MoveMap::new();
    for piece in position.pieces_of(side) {
        map.insert(piece, legal_moves_of(position, piece, last));
    }
    map
}

/// Return `true` if `side` has at least one legal move.
pub fn has_legal_moves(position: &Position, side: Color, last: Option<&MoveRecord>) -> bool {
    position
        .pieces_of(side)
        .any(|piece| !legal_moves_of(position, piece, last).is_empty())
}
