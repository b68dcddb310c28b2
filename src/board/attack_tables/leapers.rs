//! Precomputed attack tables for the leaper pieces (pawns, knights, kings).

use once_cell::sync::Lazy;

use crate::board::types::{Bitboard, Color, Square};

static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    for sq in 0..64 {
        let b = Bitboard(1u64 << sq);
        table[Color::White.index()][sq] = b.northeast() | b.northwest();
        table[Color::Black.index()][sq] = b.southeast() | b.southwest();
    }
    table
});

static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        let b = Bitboard(1u64 << sq);
        *slot = b.north().north().east()
            | b.north().east().east()
            | b.south().east().east()
            | b.south().south().east()
            | b.south().south().west()
            | b.south().west().west()
            | b.north().west().west()
            | b.north().north().west();
    }
    table
});

static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut table = [Bitboard::EMPTY; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        let b = Bitboard(1u64 << sq);
        *slot = b.north()
            | b.northeast()
            | b.east()
            | b.southeast()
            | b.south()
            | b.southwest()
            | b.west()
            | b.northwest();
    }
    table
});

/// Squares a pawn of `color` on `sq` attacks.
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Squares a knight on `sq` attacks.
#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Squares a king on `sq` attacks.
#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

pub(super) fn init() {
    Lazy::force(&PAWN_ATTACKS);
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
}
