//! Compile-time generation scope.

/// Marker trait selecting which moves a generation pass produces.
pub(crate) trait Scope {
    /// When set, only squares a piece threatens are produced: no pawn pushes,
    /// no castling, no en passant, and pawn diagonals count even when empty.
    const ATTACKS_ONLY: bool;
}

/// Zero-sized type for full candidate generation.
pub(crate) struct Candidates;
impl Scope for Candidates {
    const ATTACKS_ONLY: bool = false;
}

/// Zero-sized type for threat generation, as used by the check analyzer.
pub(crate) struct Attacks;
impl Scope for Attacks {
    const ATTACKS_ONLY: bool = true;
}
