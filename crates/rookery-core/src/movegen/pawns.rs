//! Pawn move generation.

use crate::catalog;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::record::MoveRecord;
use crate::square::Square;

use super::scope::Scope;

/// Generate pawn pushes, captures, and en passant.
pub(super) fn gen_pawn<S: Scope>(
    position: &Position,
    pawn: Piece,
    last: Option<&MoveRecord>,
    out: &mut Vec<Move>,
) {
    let us = pawn.color;
    let from = pawn.square;
    // Anything landing on the far rank becomes a promotion.
    let promote_or = |to: Square, kind: MoveKind| {
        if to.rank() == us.promotion_rank() {
            Move::new(from, to, MoveKind::Promotion)
        } else {
            Move::new(from, to, kind)
        }
    };

    // --- Pushes ---
    if !S::ATTACKS_ONLY {
        for dir in catalog::directions(PieceKind::Pawn, us) {
            let Some(one) = from.offset(dir.dx, dir.dy) else {
                continue;
            };
            if position.piece_at(one).is_some() {
                continue;
            }
            out.push(promote_or(one, MoveKind::Normal));

            if from.rank() == us.pawn_rank()
                && let Some(two) = one.offset(dir.dx, dir.dy)
                && position.piece_at(two).is_none()
            {
                out.push(Move::new(from, two, MoveKind::MoveTwo));
            }
        }
    }

    // --- Captures ---
    for dir in catalog::pawn_captures(us) {
        let Some(to) = from.offset(dir.dx, dir.dy) else {
            continue;
        };
        match position.piece_at(to) {
            Some(target) if target.color != us => out.push(promote_or(to, MoveKind::PawnCapture)),
            None if S::ATTACKS_ONLY => out.push(Move::new(from, to, MoveKind::PawnCapture)),
            _ => {}
        }
    }

    // --- En passant ---
    if !S::ATTACKS_ONLY
        && let Some(to) = en_passant_target(position, pawn, last)
    {
        out.push(Move::new(from, to, MoveKind::EnPassant));
    }
}

/// The square `pawn` may capture en passant onto, if the previous move allows it.
///
/// Only available on the ply right after an enemy pawn advanced two squares
/// to a square beside this pawn. The destination is the square that pawn
/// skipped over.
fn en_passant_target(
    position: &Position,
    pawn: Piece,
    last: Option<&MoveRecord>,
) -> Option<Square> {
    let last = last?;
    if last.kind() != MoveKind::MoveTwo {
        return None;
    }

    let victim = position.piece_at(last.to())?;
    if !victim.is(PieceKind::Pawn, !pawn.color) {
        return None;
    }

    let (pawn_x, pawn_y) = pawn.square.coords();
    let (victim_x, victim_y) = victim.square.coords();
    if pawn_y != victim_y || (pawn_x - victim_x).abs() != 1 {
        return None;
    }

    let passed = victim.square.offset(0, pawn.color.forward())?;
    position.piece_at(passed).is_none().then_some(passed)
}
