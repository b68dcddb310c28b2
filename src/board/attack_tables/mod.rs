//! Attack tables for move generation.
//!
//! Leaper attacks (pawn, knight, king) are plain per-square tables built
//! from the directional shifts. Sliding attacks (bishop, rook, queen) go
//! through magic-bitboard lookups. Everything is built once, on first use or
//! via [`init_move_tables`], and is read-only afterwards.

mod leapers;
mod magics;

pub(crate) use leapers::{king_attacks, knight_attacks, pawn_attacks};
pub(crate) use magics::{bishop_attacks, queen_attacks, rook_attacks};

/// Build every attack table. Must run before the first search; later calls
/// are no-ops.
pub fn init_move_tables() {
    leapers::init();
    magics::init();
}
