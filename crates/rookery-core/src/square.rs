//! Square identifiers and the coordinate system behind them.
//!
//! A square is addressed either by its name ("E4", case-insensitive) or by a
//! 1-based `(x, y)` pair where x = 1 is the a-file and y is the rank digit.
//! The two forms are a bijection over the 64 squares; anything outside it is a
//! [`SquareError`], never clamped.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the chess board, stored as `rank * 8 + file` (A1 = 0, H8 = 63).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(pub const $name: Square = Square($index);)*
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and a rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Map a 1-based `(x, y)` coordinate to its square.
    pub fn from_coords(x: i8, y: i8) -> Result<Square, SquareError> {
        if !(1..=8).contains(&x) || !(1..=8).contains(&y) {
            return Err(SquareError::OutOfRange { x, y });
        }
        Ok(Square(((y - 1) * 8 + (x - 1)) as u8))
    }

    /// The 1-based `(x, y)` coordinate of this square.
    #[inline]
    pub const fn coords(self) -> (i8, i8) {
        ((self.0 % 8) as i8 + 1, (self.0 / 8) as i8 + 1)
    }

    /// Step by `(dx, dy)`, returning `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let (x, y) = self.coords();
        Square::from_coords(x.checked_add(dx)?, y.checked_add(dy)?).ok()
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / 8) {
            Some(rank) => rank,
            None => Rank::Rank8,
        }
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % 8) {
            Some(file) => file,
            None => File::FileH,
        }
    }

    /// The square on the same file with the rank seen from the other side.
    #[inline]
    pub const fn mirror(self) -> Square {
        Square::new(self.file(), self.rank().mirror())
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    named_squares! {
        A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
        A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
        A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
        A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
        A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
        A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
        A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
        A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse a square name such as "E4" or "e4".
    fn from_str(name: &str) -> Result<Square, SquareError> {
        let bad_name = || SquareError::BadName {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(bad_name());
        };
        let file = File::from_letter(file).ok_or_else(bad_name)?;
        let rank = Rank::from_digit(rank).ok_or_else(bad_name)?;
        Ok(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
