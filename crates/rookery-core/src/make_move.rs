//! Move execution via copy-make.

use tracing::debug;

use crate::check::is_in_check;
use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::legal::{has_legal_moves, legal_moves_of};
use crate::movegen::castling::rook_squares;
use crate::notation::CheckMarker;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::record::MoveRecord;

/// Play `mv` by `mover` on a copy of `position` and return the copy.
///
/// No legality checks: `mv` must be a candidate of `mover`. `promotion` is
/// only read for [`MoveKind::Promotion`].
pub(crate) fn execute(
    position: &Position,
    mover: Piece,
    mv: Move,
    promotion: PieceKind,
) -> Position {
    let mut next = *position;
    let to = mv.to();
    next.take(mv.from());

    match mv.kind() {
        MoveKind::Normal | MoveKind::PawnCapture | MoveKind::MoveTwo => {
            next.take(to);
            next.put(mover.moved_to(to));
        }

        MoveKind::EnPassant => {
            next.put(mover.moved_to(to));
            // The captured pawn stands one rank behind the destination.
            if let Some(victim) = to.offset(0, -mover.color.forward()) {
                next.take(victim);
            }
        }

        MoveKind::SmallCastle | MoveKind::BigCastle => {
            next.put(mover.moved_to(to));
            if let Some((rook_from, rook_to)) = rook_squares(mv.kind(), to)
                && let Some(rook) = next.take(rook_from)
            {
                next.put(rook.moved_to(rook_to));
            }
        }

        MoveKind::Promotion => {
            next.take(to);
            next.put(Piece::new(promotion, mover.color, to).moved_to(to));
        }
    }

    next
}

/// Apply a chosen move, returning the new position and the move record.
///
/// The move must be one of the legal moves of the piece on its origin square,
/// where `last` is the previous move of the game (for en passant). A promotion
/// needs a `promotion` kind; it is ignored for every other move.
///
/// # Errors
///
/// [`MoveError::PieceNotFound`] if the origin is empty, [`MoveError::Illegal`]
/// if the move is not legal there, and [`MoveError::MissingPromotion`] or
/// [`MoveError::InvalidPromotion`] for a bad replacement piece.
pub fn apply_move(
    position: &Position,
    mv: Move,
    promotion: Option<PieceKind>,
    last: Option<&MoveRecord>,
) -> Result<(Position, MoveRecord), MoveError> {
    let mover = position
        .piece_at(mv.from())
        .ok_or(MoveError::PieceNotFound { square: mv.from() })?;

    if !legal_moves_of(position, mover, last).contains(&mv) {
        return Err(MoveError::Illegal {
            from: mv.from(),
            to: mv.to(),
        });
    }

    let promotion = match (mv.kind(), promotion) {
        (MoveKind::Promotion, None) => return Err(MoveError::MissingPromotion),
        (MoveKind::Promotion, Some(kind)) if !kind.is_promotion_target() => {
            return Err(MoveError::InvalidPromotion { kind });
        }
        (MoveKind::Promotion, Some(kind)) => Some(kind),
        _ => None,
    };

    let captured = match mv.kind() {
        MoveKind::EnPassant => mv
            .to()
            .offset(0, -mover.color.forward())
            .and_then(|square| position.piece_at(square)),
        MoveKind::SmallCastle | MoveKind::BigCastle => None,
        _ => position.piece_at(mv.to()),
    };

    let next = execute(position, mover, mv, promotion.unwrap_or(PieceKind::Queen));
    let mut record = MoveRecord::new(next, mv, mover, captured, promotion);

    let them = !mover.color;
    if is_in_check(&next, them) {
        let marker = if has_legal_moves(&next, them, Some(&record)) {
            CheckMarker::Check
        } else {
            CheckMarker::Mate
        };
        record.set_check(marker);
    }

    debug!(mv = %mv, notation = %record.notation(), fen = %next, "move applied");
    Ok((next, record))
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::check::is_in_check;
    use crate::chess_move::{Move, MoveKind};
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::fen::decode;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn pawn_double_step() {
        let mv = Move::new(Square::E2, Square::E4, MoveKind::MoveTwo);
        let (after, record) = apply_move(&Position::starting(), mv, None, None).unwrap();
        let pawn = after.piece_at(Square::E4).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));
        assert!(pawn.has_moved);
        assert_eq!(after.piece_at(Square::E2), None);
        assert_eq!(record.kind(), MoveKind::MoveTwo);
        assert_eq!(record.to(), Square::E4);
        assert_eq!(record.notation(), "e4");
    }

    #[test]
    fn capture_replaces_piece() {
        // 1.e4 d5 2.exd5
        let position = decode("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR").unwrap();
        let mv = Move::new(Square::E4, Square::D5, MoveKind::PawnCapture);
        let (after, record) = apply_move(&position, mv, None, None).unwrap();
        assert!(after.piece_at(Square::D5).unwrap().is(PieceKind::Pawn, Color::White));
        assert_eq!(after.len(), 31);
        assert!(record.is_capture());
        assert_eq!(record.notation(), "xd5");
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let before = decode("4k3/3p4/8/4P3/8/8/8/4K3").unwrap();
        let double = Move::new(Square::D7, Square::D5, MoveKind::MoveTwo);
        let (position, last) = apply_move(&before, double, None, None).unwrap();

        let mv = Move::new(Square::E5, Square::D6, MoveKind::EnPassant);
        let (after, record) = apply_move(&position, mv, None, Some(&last)).unwrap();
        assert!(after.piece_at(Square::D6).unwrap().is(PieceKind::Pawn, Color::White));
        assert_eq!(after.piece_at(Square::D5), None);
        assert_eq!(after.piece_at(Square::E5), None);
        assert!(record.is_capture());
        assert_eq!(record.notation(), "xd6");

        // One ply later the chance is gone.
        let err = apply_move(&position, mv, None, None).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                from: Square::E5,
                to: Square::D6
            }
        );
    }

    #[test]
    fn small_castle() {
        let position = decode("4k3/8/8/8/8/8/8/4K2R").unwrap();
        let mv = Move::new(Square::E1, Square::G1, MoveKind::SmallCastle);
        let (after, record) = apply_move(&position, mv, None, None).unwrap();
        let king = after.piece_at(Square::G1).unwrap();
        let rook = after.piece_at(Square::F1).unwrap();
        assert!(king.is(PieceKind::King, Color::White) && king.has_moved);
        assert!(rook.is(PieceKind::Rook, Color::White) && rook.has_moved);
        assert_eq!(after.piece_at(Square::E1), None);
        assert_eq!(after.piece_at(Square::H1), None);
        assert_eq!(record.notation(), "O-O");
    }

    #[test]
    fn big_castle_black() {
        let position = decode("r3k3/8/8/8/8/8/8/4K3").unwrap();
        let mv = Move::new(Square::E8, Square::C8, MoveKind::BigCastle);
        let (after, record) = apply_move(&position, mv, None, None).unwrap();
        assert!(after.piece_at(Square::C8).unwrap().is(PieceKind::King, Color::Black));
        assert!(after.piece_at(Square::D8).unwrap().is(PieceKind::Rook, Color::Black));
        assert_eq!(after.piece_at(Square::A8), None);
        assert_eq!(record.notation(), "O-O-O");
    }

    #[test]
    fn promotion_to_queen() {
        let position = decode("k7/4P3/8/8/8/8/8/4K3").unwrap();
        let mv = Move::new(Square::E7, Square::E8, MoveKind::Promotion);
        let (after, record) = apply_move(&position, mv, Some(PieceKind::Queen), None).unwrap();
        let queen = after.piece_at(Square::E8).unwrap();
        assert!(queen.is(PieceKind::Queen, Color::White));
        assert!(queen.has_moved);
        assert_eq!(after.piece_at(Square::E7), None);
        assert_eq!(record.promotion(), Some(PieceKind::Queen));
        assert!(record.notation().starts_with("e8=♕"));
        // The new queen checks a8 along the eighth rank.
        assert_eq!(record.notation(), "e8=♕+");
    }

    #[test]
    fn capture_promotion_to_knight() {
        let position = decode("3rk3/4P3/8/8/8/8/8/4K3").unwrap();
        let mv = Move::new(Square::E7, Square::D8, MoveKind::Promotion);
        let (after, record) = apply_move(&position, mv, Some(PieceKind::Knight), None).unwrap();
        assert!(after.piece_at(Square::D8).unwrap().is(PieceKind::Knight, Color::White));
        assert_eq!(record.captured().map(|piece| piece.kind), Some(PieceKind::Rook));
        assert_eq!(record.notation(), "xd8=♘");
    }

    #[test]
    fn promotion_errors() {
        let position = decode("k7/4P3/8/8/8/8/8/4K3").unwrap();
        let mv = Move::new(Square::E7, Square::E8, MoveKind::Promotion);
        assert_eq!(
            apply_move(&position, mv, None, None).unwrap_err(),
            MoveError::MissingPromotion
        );
        assert_eq!(
            apply_move(&position, mv, Some(PieceKind::King), None).unwrap_err(),
            MoveError::InvalidPromotion {
                kind: PieceKind::King
            }
        );
        assert_eq!(
            apply_move(&position, mv, Some(PieceKind::Pawn), None).unwrap_err(),
            MoveError::InvalidPromotion {
                kind: PieceKind::Pawn
            }
        );
    }

    #[test]
    fn empty_origin() {
        let mv = Move::new(Square::E4, Square::E5, MoveKind::Normal);
        assert_eq!(
            apply_move(&Position::starting(), mv, None, None).unwrap_err(),
            MoveError::PieceNotFound { square: Square::E4 }
        );
    }

    #[test]
    fn wrong_kind_is_illegal() {
        let mv = Move::new(Square::E2, Square::E4, MoveKind::Normal);
        assert!(matches!(
            apply_move(&Position::starting(), mv, None, None),
            Err(MoveError::Illegal { .. })
        ));
    }

    #[test]
    fn mover_never_left_in_check() {
        let position = decode("4r2k/8/8/8/8/8/4N3/4K3").unwrap();
        let mv = Move::new(Square::E2, Square::C3, MoveKind::Normal);
        assert!(apply_move(&position, mv, None, None).is_err());

        let mv = Move::new(Square::E1, Square::D1, MoveKind::Normal);
        let (after, _) = apply_move(&position, mv, None, None).unwrap();
        assert!(!is_in_check(&after, Color::White));
    }

    #[test]
    fn input_position_is_not_mutated() {
        let position = Position::starting();
        let copy = position;
        let mv = Move::new(Square::G1, Square::F3, MoveKind::Normal);
        let (after, record) = apply_move(&position, mv, None, None).unwrap();
        assert_eq!(position, copy);
        assert_ne!(after, position);
        assert_eq!(*record.position(), after);
        assert_eq!(record.notation(), "♘f3");
    }

    #[test]
    fn checkmate_marker() {
        // 1.f3 e5 2.g4, black to play Qh4#.
        let position = decode("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR").unwrap();
        let mv = Move::new(Square::D8, Square::H4, MoveKind::Normal);
        let (_, record) = apply_move(&position, mv, None, None).unwrap();
        assert_eq!(record.notation(), "♛h4#");
    }
}
