//! Perft: leaf counts of the legal move tree, for generator verification.

use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::legal::legal_moves;
use crate::make_move::execute;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::record::MoveRecord;

/// Count the leaf nodes `depth` plies below `position`, with `side` to move.
///
/// Depth 0 returns 1. Each promotion counts once per replacement kind. `last`
/// is the move that produced `position`, if any.
pub fn perft(position: &Position, side: Color, last: Option<&MoveRecord>, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for (piece, moves) in legal_moves(position, side, last).iter() {
        for &mv in moves {
            for_each_outcome(position, *piece, mv, |_, record| {
                nodes += if depth == 1 {
                    1
                } else {
                    perft(record.position(), !side, Some(record), depth - 1)
                };
            });
        }
    }
    nodes
}

/// Perft split by root move.
///
/// Returns `(move, node_count)` pairs sorted by move text. Promotions carry
/// the replacement's FEN letter, e.g. `e7e8q`.
pub fn divide(
    position: &Position,
    side: Color,
    last: Option<&MoveRecord>,
    depth: usize,
) -> Vec<(String, u64)> {
    let mut results = Vec::new();
    for (piece, moves) in legal_moves(position, side, last).iter() {
        for &mv in moves {
            for_each_outcome(position, *piece, mv, |promotion, record| {
                let name = match promotion {
                    Some(kind) => format!("{mv}{}", kind.fen_char()),
                    None => mv.to_string(),
                };
                let count = if depth <= 1 {
                    1
                } else {
                    perft(record.position(), !side, Some(record), depth - 1)
                };
                results.push((name, count));
            });
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// Play `mv`, once per promotion kind if it promotes, and hand each result to `visit`.
fn for_each_outcome(
    position: &Position,
    piece: Piece,
    mv: Move,
    mut visit: impl FnMut(Option<PieceKind>, &MoveRecord),
) {
    // En passant victims are not recorded; nothing below reads them.
    let captured = position.piece_at(mv.to());
    if mv.kind() == MoveKind::Promotion {
        for kind in PieceKind::PROMOTIONS {
            let next = execute(position, piece, mv, kind);
            visit(Some(kind), &MoveRecord::new(next, mv, piece, captured, Some(kind)));
        }
    } else {
        let next = execute(position, piece, mv, PieceKind::Queen);
        visit(None, &MoveRecord::new(next, mv, piece, captured, None));
    }
}
