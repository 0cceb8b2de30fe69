//! Castling candidates.

use crate::check::is_in_check;
use crate::chess_move::{Move, MoveKind};
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The rook's origin and destination for a castle by the king landing on `king_to`.
///
/// The rook ends next to the king, on the side the king came from.
pub(crate) fn rook_squares(kind: MoveKind, king_to: Square) -> Option<(Square, Square)> {
    let (rook_file, step) = match kind {
        MoveKind::SmallCastle => (File::FileH, 1),
        MoveKind::BigCastle => (File::FileA, -1),
        _ => return None,
    };
    let rook_from = Square::new(rook_file, king_to.rank());
    let rook_to = king_to.offset(-step, 0)?;
    Some((rook_from, rook_to))
}

/// Generate castling moves for an unmoved king on its home square.
///
/// Each side requires an unmoved friendly rook on its corner, empty squares
/// between king and rook, and a king that is not in check on its origin, on
/// the square it crosses, or on the square it lands on.
pub(super) fn gen_castles(position: &Position, king: Piece, out: &mut Vec<Move>) {
    let us = king.color;
    let home = Square::new(File::FileE, us.back_rank());
    if king.has_moved || king.square != home {
        return;
    }
    if is_in_check(position, us) {
        return;
    }

    for (kind, rook_file, step) in [
        (MoveKind::SmallCastle, File::FileH, 1),
        (MoveKind::BigCastle, File::FileA, -1),
    ] {
        let rook_square = Square::new(rook_file, us.back_rank());
        let rook_ready = position
            .piece_at(rook_square)
            .is_some_and(|rook| rook.is(PieceKind::Rook, us) && !rook.has_moved);
        if !rook_ready {
            continue;
        }

        let (king_x, _) = home.coords();
        let (rook_x, _) = rook_square.coords();
        let path_clear = (1..(rook_x - king_x).abs())
            .filter_map(|distance| home.offset(step * distance, 0))
            .all(|square| position.piece_at(square).is_none());
        if !path_clear {
            continue;
        }

        let (Some(transit), Some(landing)) = (home.offset(step, 0), home.offset(2 * step, 0)) else {
            continue;
        };
        if passes_through_check(position, king, transit)
            || passes_through_check(position, king, landing)
        {
            continue;
        }

        out.push(Move::new(home, landing, kind));
    }
}

/// Return `true` if `king` would be in check standing on `square`.
fn passes_through_check(position: &Position, king: Piece, square: Square) -> bool {
    let mut hypothetical = *position;
    hypothetical.take(king.square);
    hypothetical.put(Piece { square, ..king });
    is_in_check(&hypothetical, king.color)
}
