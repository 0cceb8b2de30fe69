//! Candidate move generation, before the legality filter.
//!
//! Each piece projects along its catalog directions under blocking and
//! capture rules; pawns and kings add their special moves on top.

pub(crate) mod castling;
mod pawns;
mod rays;
mod scope;

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::record::MoveRecord;
use crate::square::Square;

pub(crate) use self::scope::{Attacks, Candidates, Scope};

/// Moves grouped by the piece that makes them, in square order of the pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMap {
    entries: Vec<(Piece, Vec<Move>)>,
}

impl MoveMap {
    /// Create an empty map.
    pub fn new() -> MoveMap {
        MoveMap::default()
    }

    pub(crate) fn insert(&mut self, piece: Piece, moves: Vec<Move>) {
        self.entries.push((piece, moves));
    }

    /// The moves of the piece standing on `square`.
    pub fn get(&self, square: Square) -> Option<&[Move]> {
        self.entries
            .iter()
            .find(|(piece, _)| piece.square == square)
            .map(|(_, moves)| moves.as_slice())
    }

    /// Iterate over `(piece, moves)` pairs. Pieces without moves are included.
    pub fn iter(&self) -> impl Iterator<Item = (&Piece, &[Move])> {
        self.entries
            .iter()
            .map(|(piece, moves)| (piece, moves.as_slice()))
    }

    /// Iterate over every move of every piece.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().flat_map(|(_, moves)| moves.iter().copied())
    }

    /// Total number of moves across all pieces.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, moves)| moves.len()).sum()
    }

    /// Return `true` if no piece has a move.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, moves)| moves.is_empty())
    }

    /// Return `true` if `mv` is among the moves.
    pub fn contains(&self, mv: Move) -> bool {
        self.get(mv.from()).is_some_and(|moves| moves.contains(&mv))
    }

    /// Resolve an origin/destination pair to its move.
    ///
    /// At most one candidate links two squares, so this is unambiguous.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.get(from)?.iter().copied().find(|mv| mv.to() == to)
    }
}

/// Raw candidate moves of one piece, ignoring whether they leave its own king
/// in check.
///
/// `last` is the previous move of the game; it is consulted for en passant.
pub fn candidate_moves(position: &Position, piece: Piece, last: Option<&MoveRecord>) -> Vec<Move> {
    let mut moves = Vec::new();
    gen_piece::<Candidates>(position, piece, last, &mut moves);
    moves
}

/// Raw candidate moves of every piece of `color`.
pub fn candidate_moves_for(
    position: &Position,
    color: Color,
    last: Option<&MoveRecord>,
) -> MoveMap {
    let mut map = MoveMap::new();
    for piece in position.pieces_of(color) {
        map.insert(piece, candidate_moves(position, piece, last));
    }
    map
}

/// Generate the moves of `piece` into `out`, restricted by the scope `S`.
pub(crate) fn gen_piece<S: Scope>(
    position: &Position,
    piece: Piece,
    last: Option<&MoveRecord>,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => pawns::gen_pawn::<S>(position, piece, last, out),
        PieceKind::King => {
            rays::gen_rays(position, piece, out);
            if !S::ATTACKS_ONLY {
                castling::gen_castles(position, piece, out);
            }
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            rays::gen_rays(position, piece, out)
        }
    }
}
