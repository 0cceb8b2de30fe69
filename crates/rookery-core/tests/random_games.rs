//! Property-based tests over random legal games.

use proptest::prelude::*;
use rookery_core::{
    Color, MoveKind, MoveRecord, PieceKind, Position, apply_move, decode, encode, is_in_check,
    legal_moves,
};

/// A game is driven by a list of choices; each picks among the legal moves by index.
fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 1..60)
}

/// Play the choices from the starting position, stopping early at a terminal position.
///
/// Calls `check` after every applied move.
fn play(
    choices: &[usize],
    mut check: impl FnMut(&Position, Color, &MoveRecord) -> Result<(), TestCaseError>,
) -> Result<(Position, Vec<MoveRecord>), TestCaseError> {
    let mut position = Position::starting();
    let mut history: Vec<MoveRecord> = Vec::new();
    let mut side = Color::White;

    for &choice in choices {
        let moves: Vec<_> = legal_moves(&position, side, history.last()).moves().collect();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        let promotion = (mv.kind() == MoveKind::Promotion)
            .then(|| PieceKind::PROMOTIONS[choice % PieceKind::PROMOTIONS.len()]);

        let (next, record) = apply_move(&position, mv, promotion, history.last())
            .map_err(|err| TestCaseError::fail(format!("legal move rejected: {err}")))?;
        check(&next, side, &record)?;
        position = next;
        history.push(record);
        side = !side;
    }

    Ok((position, history))
}

proptest! {
    /// Property: no applied move leaves the mover's own king in check.
    #[test]
    fn prop_mover_never_in_check(choices in choices_strategy()) {
        play(&choices, |position, mover, _| {
            prop_assert!(
                !is_in_check(position, mover),
                "{} left {mover} in check",
                encode(position)
            );
            Ok(())
        })?;
    }

    /// Property: both kings survive every game.
    #[test]
    fn prop_one_king_each(choices in choices_strategy()) {
        play(&choices, |position, _, _| {
            prop_assert!(position.validate().is_ok(), "invalid position {}", encode(position));
            Ok(())
        })?;
    }

    /// Property: FEN round-trip preserves the placement, and the history restores move flags.
    #[test]
    fn prop_fen_roundtrip(choices in choices_strategy()) {
        let (position, history) = play(&choices, |_, _, _| Ok(()))?;
        let fen = encode(&position);
        let mut decoded = decode(&fen).unwrap();
        prop_assert_eq!(encode(&decoded), fen);

        decoded.restore_moved_flags(&history);
        prop_assert_eq!(decoded, position);
    }

    /// Property: each record holds the position it produced.
    #[test]
    fn prop_record_matches_position(choices in choices_strategy()) {
        play(&choices, |position, mover, record| {
            prop_assert_eq!(record.position(), position);
            prop_assert_eq!(record.color(), mover);
            prop_assert!(!record.notation().is_empty());
            Ok(())
        })?;
    }
}
