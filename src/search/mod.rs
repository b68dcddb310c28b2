//! Alpha-beta search.
//!
//! Fail-hard minimax: white maximizes, black minimizes. Each node copies the
//! board and applies one candidate move to the copy; a move that leaves the
//! mover's own king attacked scores as the worst outcome for the mover and
//! the copy is discarded. Captures are searched before quiet moves, both
//! pre-ordered by the generator. Depth 0 drops into a capture-only
//! quiescence search.

mod quiescence;

use crate::board::{Board, Color, GeneratedMoves, Move};
use crate::transposition_table::{EntryFlag, TranspositionTable};

use quiescence::quiescence;

/// Score for a move that leaves the mover's own king attacked, indexed by
/// the mover's color.
pub(crate) const ILLEGAL_MOVE_SCORE: [i32; 2] = [i32::MIN + 1, i32::MAX - 1];

/// Score for a decided game, indexed by `get_result() - 1`.
pub(crate) const WIN_SCORE: [i32; 2] = [i32::MAX - 2, i32::MIN + 2];

/// Drives the alpha-beta search and owns the transposition table.
pub struct Searcher {
    depth: i32,
    pub(crate) tt: TranspositionTable,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Searcher {
            depth: 6,
            tt: TranspositionTable::new(),
        }
    }

    /// Configure the ply depth for subsequent searches.
    pub fn set_search_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    /// Search the position and return the best move, or the null move when
    /// the side to move has none at all.
    pub fn search(&mut self, board: &Board) -> Move {
        let moves = board.generate_all_moves();
        if moves.is_empty() {
            return Move::NULL;
        }

        // a best move cached for this position is searched first
        let hint = self
            .tt
            .probe(board.hash())
            .filter(|entry| entry.flag == EntryFlag::BestMove && !entry.best_move.is_null())
            .map(|entry| entry.best_move)
            .filter(|&h| contains_move(&moves, h));

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best = Move::NULL;

        match board.side_to_move() {
            Color::White => {
                for m in ordered_root_moves(&moves, hint) {
                    let eval = search_node(board, m, self.depth - 1, alpha, beta);
                    if eval > alpha {
                        alpha = eval;
                        best = m;
                    }
                }
            }
            Color::Black => {
                for m in ordered_root_moves(&moves, hint) {
                    let eval = search_node(board, m, self.depth - 1, alpha, beta);
                    if eval < beta {
                        beta = eval;
                        best = m;
                    }
                }
            }
        }

        // bounds never moved at all: settle for the first move that applies
        if best.is_null() {
            for m in ordered_root_moves(&moves, hint) {
                let mut next = *board;
                if next.make_move(m) {
                    best = m;
                    break;
                }
            }
        }

        if !best.is_null() {
            let entry = self.tt.get_entry(board.hash());
            entry.depth = self.depth;
            entry.best_move = best;
            entry.flag = EntryFlag::BestMove;
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new()
    }
}

/// Ordering-score-insensitive membership test.
fn contains_move(moves: &GeneratedMoves, m: Move) -> bool {
    moves
        .captures
        .iter()
        .chain(moves.quiets.iter())
        .any(|x| x.without_score() == m.without_score())
}

/// Root iteration order: the cached hint first, then captures, then quiets.
fn ordered_root_moves(
    moves: &GeneratedMoves,
    hint: Option<Move>,
) -> impl Iterator<Item = Move> + '_ {
    hint.into_iter().chain(
        moves
            .captures
            .iter()
            .chain(moves.quiets.iter())
            .copied()
            .filter(move |&m| {
                hint.map_or(true, |h| h.without_score() != m.without_score())
            }),
    )
}

/// One recursive node: apply `m` to a copy of `board` and search below it.
fn search_node(board: &Board, m: Move, depth: i32, mut alpha: i32, mut beta: i32) -> i32 {
    let mut board = *board;
    if !board.make_move(m) {
        // to_move is still the mover after a failed application
        return ILLEGAL_MOVE_SCORE[board.side_to_move().index()];
    }

    let result = board.get_result();
    if result != 0 {
        return WIN_SCORE[(result - 1) as usize];
    }

    if depth <= 0 {
        return quiescence(&board, alpha, beta);
    }

    let moves = board.generate_all_moves();
    if moves.is_empty() || board.no_capture_count() >= 50 {
        return 0;
    }

    match board.side_to_move() {
        Color::White => {
            for &m in moves.captures.iter().chain(moves.quiets.iter()) {
                let eval = search_node(&board, m, depth - 1, alpha, beta);
                if eval > alpha {
                    alpha = eval;
                    if beta <= alpha {
                        return beta;
                    }
                }
            }
            alpha
        }
        Color::Black => {
            for &m in moves.captures.iter().chain(moves.quiets.iter()) {
                let eval = search_node(&board, m, depth - 1, alpha, beta);
                if eval < beta {
                    beta = eval;
                    if beta <= alpha {
                        return alpha;
                    }
                }
            }
            beta
        }
    }
}
