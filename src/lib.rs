//! A bitboard engine for the three-check chess variant, where delivering
//! the third check wins alongside the usual mating conditions.
//!
//! The crate is the engine core only: board representation with incremental
//! evaluation and hashing, magic-bitboard move generation, and an
//! alpha-beta search with quiescence and iterative deepening. A
//! line-protocol front-end is expected to drive it through
//! [`Engine::apply_player_move`] and [`Engine::choose_engine_move`] after
//! the one-time [`init`].
//!
//! # Example
//! ```
//! use tricheck::{Engine, Move, Piece, Square, ENPASSANT};
//!
//! tricheck::init(0);
//! let mut engine = Engine::new();
//!
//! // 1. e4, encoded as a pawn double push
//! let e2e4 = Move::encode(Square::E2, Square::E4, Piece::Pawn, Piece::Pawn, ENPASSANT);
//! assert!(engine.apply_player_move(e2e4, false));
//!
//! let reply = engine.choose_engine_move(60_000, 2);
//! assert!(reply.starts_with("move "));
//! ```

pub mod board;
pub mod engine;
pub mod search;
pub mod transposition_table;
pub mod zobrist;

pub use board::{Board, BoardBuilder, Color, GeneratedMoves, Move, MoveList, Piece, Square};
pub use board::{init_eval_tables, init_move_tables};
pub use board::{CAPTURE, CASTLE, ENPASSANT, NO_FLAGS, UNCASTLE};
pub use engine::Engine;
pub use search::Searcher;
pub use zobrist::{hash_state, init_zobrist_table};

/// Build every table the engine needs: the attack tables, the evaluation
/// value maps and the Zobrist keys (seeded with `zobrist_seed`). Must run
/// before the first search; later calls are no-ops.
pub fn init(zobrist_seed: u64) {
    init_move_tables();
    init_eval_tables();
    init_zobrist_table(zobrist_seed);
}
