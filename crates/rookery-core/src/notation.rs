//! Human-readable move notation.

use std::fmt;
use std::str::FromStr;

use crate::chess_move::MoveKind;
use crate::color::Color;
use crate::error::NotationStyleError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// How piece symbols are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotationStyle {
    /// Chess glyphs in the mover's color: `♘f3`, `♞f6`.
    #[default]
    Figurine,
    /// English letters: `Nf3`.
    Letter,
}

impl NotationStyle {
    /// The symbol of `kind` for a piece of `color`; empty for pawns.
    pub const fn symbol(self, kind: PieceKind, color: Color) -> &'static str {
        match self {
            NotationStyle::Figurine => kind.figurine(color),
            NotationStyle::Letter => kind.letter(),
        }
    }
}

impl FromStr for NotationStyle {
    type Err = NotationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "figurine" => Ok(NotationStyle::Figurine),
            "letter" => Ok(NotationStyle::Letter),
            _ => Err(NotationStyleError { name: s.to_string() }),
        }
    }
}

impl fmt::Display for NotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationStyle::Figurine => f.write_str("figurine"),
            NotationStyle::Letter => f.write_str("letter"),
        }
    }
}

/// Whether a move leaves the opponent in check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckMarker {
    #[default]
    None,
    /// The opponent is in check and can still move.
    Check,
    /// The opponent is in check with no legal move.
    Mate,
}

impl CheckMarker {
    /// The suffix appended to the notation.
    pub const fn suffix(self) -> &'static str {
        match self {
            CheckMarker::None => "",
            CheckMarker::Check => "+",
            CheckMarker::Mate => "#",
        }
    }
}

/// Everything the notation of one move depends on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotationParts {
    pub kind: MoveKind,
    pub mover: PieceKind,
    pub color: Color,
    pub to: Square,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
    pub check: CheckMarker,
}

/// Render a move in the given style.
///
/// The piece symbol (nothing for pawns), an `x` for captures, and the
/// destination square; castles are `O-O` and `O-O-O`. Promotions append `=`
/// and the new piece's symbol. A check or mate suffix closes the string.
pub(crate) fn render(parts: NotationParts, style: NotationStyle) -> String {
    let mut out = String::with_capacity(8);
    match parts.kind {
        MoveKind::SmallCastle => out.push_str("O-O"),
        MoveKind::BigCastle => out.push_str("O-O-O"),
        _ => {
            out.push_str(style.symbol(parts.mover, parts.color));
            if parts.capture {
                out.push('x');
            }
            out.push_str(&parts.to.to_string());
            if let Some(kind) = parts.promotion {
                out.push('=');
                out.push_str(style.symbol(kind, parts.color));
            }
        }
    }
    out.push_str(parts.check.suffix());
    out
}
