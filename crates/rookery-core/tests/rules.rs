//! Integration tests for the public rules API.
//!
//! Covers the FEN codec, check detection, castling, promotion, and the
//! colour symmetry of move generation.

use rookery_core::{
    Color, FenError, Move, MoveError, MoveKind, NotationStyle, Piece, PieceKind, Position,
    STARTING_FEN, Square, apply_move, decode, encode, has_legal_moves, is_in_check, legal_moves,
};

// ── FEN ──────────────────────────────────────────────────────────────────────

#[test]
fn decode_starting_position() {
    let position = decode(STARTING_FEN).unwrap();
    assert_eq!(position.len(), 32);
    assert_eq!(position.pieces_of(Color::White).count(), 16);
    assert_eq!(position.pieces_of(Color::Black).count(), 16);
    assert_eq!(position.king_square(Color::White), Some(Square::E1));
    assert_eq!(position.king_square(Color::Black), Some(Square::E8));
    assert_eq!(position, Position::starting());
}

#[test]
fn full_fen_string_reads_placement_only() {
    let full = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(decode(full).unwrap(), Position::starting());
}

#[test]
fn encode_round_trips() {
    for fen in [
        STARTING_FEN,
        "4r3/8/k7/8/8/8/8/3QK3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/8/8/8/8/8/8/8",
    ] {
        let position = decode(fen).unwrap();
        assert_eq!(encode(&position), fen);
        assert_eq!(decode(&encode(&position)).unwrap(), position);
    }
}

#[test]
fn malformed_fen_is_rejected() {
    assert_eq!(
        decode("8/8/8/8").unwrap_err(),
        FenError::WrongRankCount { found: 4 }
    );
    assert!(matches!(
        decode("9/8/8/8/8/8/8/8"),
        Err(FenError::InvalidPieceChar { .. })
    ));
    assert!(matches!(
        decode("ppppppppp/8/8/8/8/8/8/8"),
        Err(FenError::BadRankLength { .. })
    ));
    assert_eq!(
        decode("x7/8/8/8/8/8/8/8").unwrap_err(),
        FenError::InvalidPieceChar { character: 'x' }
    );
}

// ── Check ────────────────────────────────────────────────────────────────────

#[test]
fn rook_checks_along_the_file() {
    let position = decode("4r3/8/k7/8/8/8/8/3QK3").unwrap();
    assert!(is_in_check(&position, Color::White));
    assert!(!is_in_check(&position, Color::Black));
}

#[test]
fn scholars_mate_is_terminal() {
    let position = decode("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR").unwrap();
    assert!(is_in_check(&position, Color::Black));
    assert!(!has_legal_moves(&position, Color::Black, None));
}

// ── Castling and promotion ───────────────────────────────────────────────────

#[test]
fn lone_rook_castles_short() {
    let position = Position::from_pieces([
        Piece::new(PieceKind::King, Color::White, Square::E1),
        Piece::new(PieceKind::Rook, Color::White, Square::H1),
        Piece::new(PieceKind::King, Color::Black, Square::E8),
    ])
    .unwrap();

    let moves = legal_moves(&position, Color::White, None);
    let castle = moves.find(Square::E1, Square::G1).unwrap();
    assert_eq!(castle.kind(), MoveKind::SmallCastle);

    let (after, record) = apply_move(&position, castle, None, None).unwrap();
    assert!(after.piece_at(Square::G1).unwrap().is(PieceKind::King, Color::White));
    assert!(after.piece_at(Square::F1).unwrap().is(PieceKind::Rook, Color::White));
    assert_eq!(record.notation(), "O-O");
}

#[test]
fn pawn_promotes_to_queen() {
    let position = decode("8/4P3/8/8/8/8/k7/4K3").unwrap();
    let mv = Move::new(Square::E7, Square::E8, MoveKind::Promotion);
    let (after, record) = apply_move(&position, mv, Some(PieceKind::Queen), None).unwrap();
    assert_eq!(after.piece_at(Square::E7), None);
    assert!(after.piece_at(Square::E8).unwrap().is(PieceKind::Queen, Color::White));
    assert!(record.notation().ends_with("e8=♕"));
    assert_eq!(record.render(NotationStyle::Letter), "e8=Q");
}

#[test]
fn moving_from_an_empty_square() {
    let mv = Move::new(Square::D4, Square::D5, MoveKind::Normal);
    assert_eq!(
        apply_move(&Position::starting(), mv, None, None).unwrap_err(),
        MoveError::PieceNotFound { square: Square::D4 }
    );
}

// ── Symmetry ─────────────────────────────────────────────────────────────────

fn sorted_moves(position: &Position, side: Color) -> Vec<(Square, Square)> {
    let mut moves: Vec<_> = legal_moves(position, side, None)
        .moves()
        .map(|mv| (mv.from(), mv.to()))
        .collect();
    moves.sort();
    moves
}

#[test]
fn mirrored_position_mirrors_the_moves() {
    for fen in [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    ] {
        let position = decode(fen).unwrap();
        let mirrored = position.mirror();

        let mut expected: Vec<_> = sorted_moves(&position, Color::White)
            .into_iter()
            .map(|(from, to)| (from.mirror(), to.mirror()))
            .collect();
        expected.sort();
        assert_eq!(sorted_moves(&mirrored, Color::Black), expected, "{fen}");
    }
}
