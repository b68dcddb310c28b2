//! Fluent builder for constructing positions piece by piece.
//!
//! Rebuilds every derived field (occupancies, rolling evaluation, game
//! stage, hash) from scratch, so a built board satisfies the same
//! invariants as one reached through `make_move`.

use crate::zobrist;

use super::pst::GAMESTAGE_WEIGHTS;
use super::state::StateFlags;
use super::types::{Color, Piece, Square};
use super::Board;

/// Piece counts of the initial position per type, both sides combined.
const STARTING_COUNTS: [i32; 6] = [16, 4, 4, 4, 2, 2];

/// A fluent builder for `Board` positions.
///
/// Castling rights start out fully lost; grant them per side with
/// [`BoardBuilder::allow_castling`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Color, Piece, Square)>,
    to_move: Color,
    castle_lost: u8,
    checks: [u8; 2],
    enpassant: Option<Square>,
    no_capture_count: i32,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            to_move: Color::White,
            castle_lost: 0x0f,
            checks: [0, 0],
            enpassant: None,
            no_capture_count: 0,
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, color: Color, piece: Piece, sq: Square) -> Self {
        self.pieces.retain(|(_, _, existing)| *existing != sq);
        self.pieces.push((color, piece, sq));
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Grant both castling rights to `color`.
    #[must_use]
    pub fn allow_castling(mut self, color: Color) -> Self {
        self.castle_lost &= !(1 << StateFlags::queen_side_bit(color));
        self.castle_lost &= !(1 << StateFlags::king_side_bit(color));
        self
    }

    /// Set the number of checks `color` has already delivered.
    #[must_use]
    pub fn checks_delivered(mut self, color: Color, count: u8) -> Self {
        self.checks[color.index()] = count.min(3);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.enpassant = Some(target);
        self
    }

    #[must_use]
    pub const fn no_capture_count(mut self, count: i32) -> Self {
        self.no_capture_count = count;
        self
    }

    /// Assemble the board and recompute all derived state.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (color, piece, sq) in &self.pieces {
            board.set_piece(*piece, *color, *sq);
        }

        board.to_move = self.to_move;
        board.enpassant = self.enpassant;
        board.no_capture_count = self.no_capture_count;

        let mut flags = StateFlags(self.castle_lost & 0x0f);
        flags.set_checks(Color::White, self.checks[Color::White.index()]);
        flags.set_checks(Color::Black, self.checks[Color::Black.index()]);
        board.flags = flags;

        let (midgame, endgame) = board.recompute_eval();
        board.midgame = midgame;
        board.endgame = endgame;

        // stage counts what has left the board relative to the full set
        let mut gamestage: i32 = STARTING_COUNTS
            .iter()
            .zip(GAMESTAGE_WEIGHTS.iter())
            .map(|(count, weight)| count * weight)
            .sum();
        for (_, piece, _) in &self.pieces {
            gamestage -= GAMESTAGE_WEIGHTS[piece.index()];
        }
        board.gamestage = gamestage.max(0);

        board.hash = zobrist::hash_state(&board);
        board
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}
