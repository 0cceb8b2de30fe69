//! Catalog-driven moves for knights, bishops, rooks, queens, and kings.

use crate::catalog;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::position::Position;

/// Project `piece` along each catalog direction.
///
/// An empty square is reachable and, for sliding pieces, the scan goes on.
/// An enemy piece is reachable and ends the scan. A friendly piece or the
/// board edge ends the scan without adding a square.
pub(super) fn gen_rays(position: &Position, piece: Piece, out: &mut Vec<Move>) {
    let movement = catalog::movement(piece.kind);

    for dir in movement.directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(dir.dx, dir.dy) {
            match position.piece_at(next) {
                Some(other) if other.color == piece.color => break,
                Some(_) => {
                    out.push(Move::new(piece.square, next, MoveKind::Normal));
                    break;
                }
                None => out.push(Move::new(piece.square, next, MoveKind::Normal)),
            }
            if !movement.slides {
                break;
            }
            current = next;
        }
    }
}
