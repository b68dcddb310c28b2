//! Board representation and game logic for the three-check variant.
//!
//! Bitboard-based with incremental evaluation and hashing: every mutation
//! goes through `make_move`, which keeps the occupancies, the rolling
//! midgame/endgame sums, the game stage and the Zobrist hash in lockstep
//! with the piece placement. The search copies the board instead of undoing
//! moves.

pub mod attack_tables;
mod builder;
mod eval;
mod make_move;
mod movegen;
mod pst;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use eval::init_eval_tables;
pub use state::Board;
pub use types::{Bitboard, Color, GeneratedMoves, Move, MoveList, Piece, Square};
pub use types::{CAPTURE, CASTLE, ENPASSANT, NO_FLAGS, UNCASTLE};

pub use attack_tables::init_move_tables;

pub(crate) use types::QUIESCENCE_CAPACITY;
