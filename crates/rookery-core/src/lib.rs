//! Chess rules: coordinates, FEN, move generation, legality, and move execution.

pub mod catalog;
mod check;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod legal;
mod make_move;
mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod record;
mod square;

pub use check::{is_attacked, is_in_check};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, NotationStyleError, SquareError};
pub use fen::{STARTING_FEN, decode, encode};
pub use file::File;
pub use legal::{has_legal_moves, legal_moves, legal_moves_of};
pub use make_move::apply_move;
pub use movegen::{MoveMap, candidate_moves, candidate_moves_for};
pub use notation::{CheckMarker, NotationStyle};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use rank::Rank;
pub use record::MoveRecord;
pub use square::Square;
