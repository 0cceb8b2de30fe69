//! FEN piece-placement encoding and decoding for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

/// The piece placement of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Decode a FEN piece placement into a position.
///
/// Only the first whitespace-separated field is read, so a full six-field FEN
/// string decodes to its placement. Every decoded piece is unmoved.
pub fn decode(fen: &str) -> Result<Position, FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut position = Position::empty();
    for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate()
    {
        let mut file_index: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            let Some(file) = u8::try_from(file_index).ok().and_then(File::from_index) else {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                });
            };
            let piece = Piece::from_fen_char(c, Square::new(file, rank))
                .ok_or(FenError::InvalidPieceChar { character: c })?;
            position.put(piece);
            file_index += 1;
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    Ok(position)
}

/// Encode a position as a FEN piece placement.
pub fn encode(position: &Position) -> String {
    position.to_string()
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        decode(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
        }
        Ok(())
    }
}
