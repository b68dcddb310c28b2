//! Zobrist hashing.
//!
//! Key tables are filled from a seeded [`StdRng`], so a fixed seed yields the
//! same keys on every run and platform. The position hash XORs a key per
//! piece-on-square plus keys for the check counters, the castling bits and
//! the en-passant square (index 64 when there is none). The side to move is
//! not hashed.

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Piece, Square};

/// Seed used when the tables are touched before [`init_zobrist_table`].
pub const DEFAULT_ZOBRIST_SEED: u64 = 0;

pub(crate) struct ZobristKeys {
    /// `piece_keys[color][piece][square]`
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    /// Indexed by the four check-count bits.
    pub(crate) check_keys: [u64; 16],
    /// Indexed by the four castling-lost bits.
    pub(crate) castle_keys: [u64; 16],
    /// Indexed by the en-passant square, 64 meaning none.
    pub(crate) enpassant_keys: [u64; 65],
}

impl ZobristKeys {
    pub(crate) fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece_keys = [[[0u64; 64]; 6]; 2];
        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let mut check_keys = [0u64; 16];
        let mut castle_keys = [0u64; 16];
        for key in &mut check_keys {
            *key = rng.gen();
        }
        for key in &mut castle_keys {
            *key = rng.gen();
        }

        let mut enpassant_keys = [0u64; 65];
        for key in &mut enpassant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            check_keys,
            castle_keys,
            enpassant_keys,
        }
    }
}

static ZOBRIST: OnceCell<ZobristKeys> = OnceCell::new();

/// Seed and build the key tables. Only the first call (or first hash use)
/// picks the seed; later calls are no-ops.
pub fn init_zobrist_table(seed: u64) {
    ZOBRIST.get_or_init(|| ZobristKeys::new(seed));
}

#[inline]
pub(crate) fn keys() -> &'static ZobristKeys {
    ZOBRIST.get_or_init(|| ZobristKeys::new(DEFAULT_ZOBRIST_SEED))
}

/// Key index for an en-passant target; the missing target uses slot 64.
#[inline]
pub(crate) fn enpassant_index(target: Option<Square>) -> usize {
    target.map_or(64, Square::index)
}

/// Hash the position from scratch. The board's rolling hash must equal this
/// after every successful move.
#[must_use]
pub fn hash_state(board: &Board) -> u64 {
    let keys = keys();
    let mut hash = 0u64;

    for color in [Color::White, Color::Black] {
        for piece in [
            Piece::Pawn,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            for sq in board.pieces_of(color, piece).iter() {
                hash ^= keys.piece_keys[color.index()][piece.index()][sq.index()];
            }
        }
    }

    hash ^= keys.check_keys[board.check_bits()];
    hash ^= keys.castle_keys[board.castle_bits()];
    hash ^= keys.enpassant_keys[enpassant_index(board.en_passant_target())];
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = ZobristKeys::new(0xdead_beef);
        let b = ZobristKeys::new(0xdead_beef);
        assert_eq!(a.piece_keys, b.piece_keys);
        assert_eq!(a.check_keys, b.check_keys);
        assert_eq!(a.castle_keys, b.castle_keys);
        assert_eq!(a.enpassant_keys, b.enpassant_keys);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ZobristKeys::new(1);
        let b = ZobristKeys::new(2);
        assert_ne!(a.piece_keys[0][0][0], b.piece_keys[0][0][0]);
    }

    #[test]
    fn test_start_position_hash_is_stable() {
        let board = Board::new();
        assert_eq!(hash_state(&board), hash_state(&board));
        assert_eq!(board.hash(), hash_state(&board));
    }

    #[test]
    fn test_hash_depends_on_en_passant() {
        let keys = keys();
        assert_ne!(
            keys.enpassant_keys[Square::E3.index()],
            keys.enpassant_keys[64]
        );
    }
}
