//! The engine facade a protocol front-end drives.
//!
//! Owns the game board and the searcher. The front-end feeds player moves
//! through [`Engine::apply_player_move`] and requests replies with
//! [`Engine::choose_engine_move`], which answers in the wire format the
//! protocol expects ("move e7e5", a draw line, or a mate line).

use std::time::Instant;

use log::debug;

use crate::board::{Board, Color, Move, Square};
use crate::search::Searcher;

const STALEMATE: &str = "1/2-1/2 {Stalemate}\n";

pub struct Engine {
    board: Board,
    searcher: Searcher,
}

impl Engine {
    /// An engine at the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Engine {
            board: Board::new(),
            searcher: Searcher::new(),
        }
    }

    /// Take over play from an existing position.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Engine {
            board,
            searcher: Searcher::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start a fresh game and drop cached search results.
    pub fn reset(&mut self) {
        self.board.reset();
        self.searcher.tt.clear();
    }

    /// Apply a move supplied by the player.
    ///
    /// With `forcing` the move is applied unconditionally (the front-end's
    /// force mode trusts its input). Otherwise castling across an attacked
    /// square and moves that leave the own king attacked are rejected and
    /// the position stays untouched.
    pub fn apply_player_move(&mut self, m: Move, forcing: bool) -> bool {
        if forcing {
            self.board.make_move(m);
            return true;
        }

        if m.is_castle() {
            let crossed = Square::from_index((m.src().index() + m.dest().index()) / 2);
            if self.board.is_attacked(crossed) {
                return false;
            }
        }

        let mut next = self.board;
        if next.make_move(m) {
            self.board = next;
            true
        } else {
            false
        }
    }

    /// Pick the engine's reply, play it, and report it in wire format.
    ///
    /// For `max_depth` up to 6 a single fixed-depth search runs; above that
    /// the search deepens iteratively from 6, stopping once
    /// `elapsed >= time_ms / 20 * 5`.
    pub fn choose_engine_move(&mut self, time_ms: u64, max_depth: i32) -> String {
        self.searcher.tt.update();

        let m = if max_depth <= 6 {
            self.searcher.set_search_depth(max_depth);
            self.searcher.search(&self.board)
        } else {
            let allocated = time_ms / 20;
            let start = Instant::now();
            let mut m = Move::NULL;
            for depth in 6..=max_depth {
                self.searcher.set_search_depth(depth);
                m = self.searcher.search(&self.board);

                let elapsed = start.elapsed().as_millis() as u64;
                debug!("searched to depth {depth} in {elapsed}ms");
                if elapsed >= allocated * 5 {
                    break;
                }
            }
            m
        };

        if m.is_null() {
            return STALEMATE.to_string();
        }

        let mut next = self.board;
        if !next.make_move(m) {
            // even the best candidate is illegal: the engine is mated
            return match self.board.side_to_move() {
                Color::White => "0-1 {Black Mates}\n",
                Color::Black => "1-0 {White Mates}\n",
            }
            .to_string();
        }
        self.board = next;

        if self.board.no_capture_count() >= 50 {
            return STALEMATE.to_string();
        }

        format!("move {}{}\n", m.src(), m.dest())
    }

    /// Diagnostic rendering of the current position.
    #[must_use]
    pub fn get_state(&self) -> String {
        self.board.get_state()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
