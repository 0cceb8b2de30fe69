//! Board ranks (rows 1–8), the y component of a coordinate.

use std::fmt;

/// A rank on the chess board, from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the zero-based index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Parse a rank digit.
    pub fn from_digit(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// The 1-based y coordinate.
    #[inline]
    pub const fn y(self) -> i8 {
        self as i8 + 1
    }

    /// The same rank seen from the other side of the board.
    #[inline]
    pub const fn mirror(self) -> Rank {
        match Rank::from_index(7 - self as u8) {
            Some(rank) => rank,
            None => self,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_index_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_index(rank.index() as u8), Some(rank));
        }
        assert_eq!(Rank::from_index(8), None);
    }

    #[test]
    fn digits() {
        assert_eq!(Rank::from_digit('1'), Some(Rank::Rank1));
        assert_eq!(Rank::from_digit('8'), Some(Rank::Rank8));
        assert_eq!(Rank::from_digit('0'), None);
        assert_eq!(Rank::from_digit('9'), None);
        assert_eq!(format!("{}", Rank::Rank4), "4");
    }

    #[test]
    fn mirror() {
        assert_eq!(Rank::Rank1.mirror(), Rank::Rank8);
        assert_eq!(Rank::Rank4.mirror(), Rank::Rank5);
        for rank in Rank::ALL {
            assert_eq!(rank.mirror().mirror(), rank);
        }
    }
}
