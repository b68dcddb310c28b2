//! Magic-bitboard lookups for the sliding pieces.
//!
//! Each square carries a relevant-occupancy mask (the attack rays minus the
//! board edge) and a magic multiplier. Multiplying the masked occupancy by
//! the magic and shifting down by `64 - relevant_bits` perfectly indexes a
//! per-square table of true attack sets. The multipliers are found once at
//! startup by a trial search over sparse random candidates, each verified
//! collision-free over every occupancy subset of its mask.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::types::{Bitboard, Square};

#[rustfmt::skip]
const BISHOP_RELEVANT_BITS: [u32; 64] = [
    6, 5, 5, 5, 5, 5, 5, 6,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 5, 5, 5, 5, 5, 5, 6,
];

#[rustfmt::skip]
const ROOK_RELEVANT_BITS: [u32; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    12, 11, 11, 11, 11, 11, 11, 12,
];

const BISHOP_MAGIC_SEED: u64 = 0x41c6_4e6d;
const ROOK_MAGIC_SEED: u64 = 0x2b6e_98f1;

/// Per-square magic lookup data for one slider type.
struct SliderTable {
    masks: [u64; 64],
    magics: [u64; 64],
    shifts: [u32; 64],
    attacks: Vec<Vec<u64>>,
}

static BISHOP_TABLE: Lazy<SliderTable> = Lazy::new(|| {
    build_table(&BISHOP_RELEVANT_BITS, bishop_mask, bishop_rays, BISHOP_MAGIC_SEED)
});

static ROOK_TABLE: Lazy<SliderTable> = Lazy::new(|| {
    build_table(&ROOK_RELEVANT_BITS, rook_mask, rook_rays, ROOK_MAGIC_SEED)
});

impl SliderTable {
    #[inline]
    fn lookup(&self, sq: usize, occupancy: u64) -> u64 {
        let occ = occupancy & self.masks[sq];
        let index = (occ.wrapping_mul(self.magics[sq]) >> self.shifts[sq]) as usize;
        self.attacks[sq][index]
    }
}

/// Attack set of a bishop on `sq` under the given occupancy.
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(BISHOP_TABLE.lookup(sq.index(), occupancy.0))
}

/// Attack set of a rook on `sq` under the given occupancy.
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(ROOK_TABLE.lookup(sq.index(), occupancy.0))
}

/// Attack set of a queen on `sq` under the given occupancy.
#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

pub(super) fn init() {
    Lazy::force(&BISHOP_TABLE);
    Lazy::force(&ROOK_TABLE);
}

fn build_table(
    relevant_bits: &[u32; 64],
    mask_fn: fn(usize) -> u64,
    rays_fn: fn(usize, u64) -> u64,
    seed: u64,
) -> SliderTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = SliderTable {
        masks: [0; 64],
        magics: [0; 64],
        shifts: [0; 64],
        attacks: Vec::with_capacity(64),
    };

    for sq in 0..64 {
        let mask = mask_fn(sq);
        let bits = relevant_bits[sq];
        debug_assert_eq!(mask.count_ones(), bits);

        let magic = find_magic(&mut rng, mask, bits, |occ| rays_fn(sq, occ));
        let shift = 64 - bits;

        let mut attacks = vec![0u64; 1 << bits];
        for index in 0..(1usize << bits) {
            let occupancy = occupancy_subset(index, mask);
            let key = (occupancy.wrapping_mul(magic) >> shift) as usize;
            attacks[key] = rays_fn(sq, occupancy);
        }

        table.masks[sq] = mask;
        table.magics[sq] = magic;
        table.shifts[sq] = shift;
        table.attacks.push(attacks);
    }

    table
}

/// Trial-search a magic multiplier that maps every occupancy subset of
/// `mask` to a distinct (or attack-identical) table slot.
fn find_magic(rng: &mut StdRng, mask: u64, bits: u32, rays: impl Fn(u64) -> u64) -> u64 {
    let count = 1usize << bits;
    let mut occupancies = vec![0u64; count];
    let mut reference = vec![0u64; count];
    for index in 0..count {
        occupancies[index] = occupancy_subset(index, mask);
        reference[index] = rays(occupancies[index]);
    }

    loop {
        // sparse candidates work far better than uniform ones
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(magic) & 0xff00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        // a slider always attacks at least one square, so 0 marks empty slots
        let mut used = vec![0u64; count];
        let mut failed = false;
        for index in 0..count {
            let key = (occupancies[index].wrapping_mul(magic) >> (64 - bits)) as usize;
            if used[key] == 0 {
                used[key] = reference[index];
            } else if used[key] != reference[index] {
                failed = true;
                break;
            }
        }

        if !failed {
            return magic;
        }
    }
}

/// Expand `index` into an occupancy: bit `i` of the index selects the i-th
/// lowest set square of `mask`.
fn occupancy_subset(index: usize, mask: u64) -> u64 {
    let mut mask = mask;
    let mut occupancy = 0u64;
    let mut i = 0;
    while mask != 0 {
        let sq = mask.trailing_zeros();
        mask &= mask - 1;
        if index & (1 << i) != 0 {
            occupancy |= 1u64 << sq;
        }
        i += 1;
    }
    occupancy
}

/// Bishop attack rays excluding the board edge.
fn bishop_mask(sq: usize) -> u64 {
    let (tr, tf) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let (mut r, mut f) = (tr + dr, tf + df);
        while (1..=6).contains(&r) && (1..=6).contains(&f) {
            attacks |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Rook attack rays excluding the board edge.
fn rook_mask(sq: usize) -> u64 {
    let (tr, tf) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0u64;
    for r in (tr + 1)..=6 {
        attacks |= 1u64 << (r * 8 + tf);
    }
    for r in 1..tr {
        attacks |= 1u64 << (r * 8 + tf);
    }
    for f in (tf + 1)..=6 {
        attacks |= 1u64 << (tr * 8 + f);
    }
    for f in 1..tf {
        attacks |= 1u64 << (tr * 8 + f);
    }
    attacks
}

/// True bishop attacks from `sq` given blockers, computed by ray walking.
fn bishop_rays(sq: usize, block: u64) -> u64 {
    let (tr, tf) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let (mut r, mut f) = (tr + dr, tf + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let b = 1u64 << (r * 8 + f);
            attacks |= b;
            if block & b != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// True rook attacks from `sq` given blockers, computed by ray walking.
fn rook_rays(sq: usize, block: u64) -> u64 {
    let (tr, tf) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0u64;
    for (dr, df) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        let (mut r, mut f) = (tr + dr, tf + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let b = 1u64 << (r * 8 + f);
            attacks |= b;
            if block & b != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}
