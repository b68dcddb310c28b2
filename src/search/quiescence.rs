//! Quiescence search.
//!
//! At depth 0 the search keeps following capture chains until the position
//! is quiet, so a leaf is never evaluated in the middle of an exchange. The
//! side to move may always stand pat on its static evaluation.

use crate::board::{Board, Color, Move, MoveList, QUIESCENCE_CAPACITY};

use super::{ILLEGAL_MOVE_SCORE, WIN_SCORE};

/// Entry point from the main search once depth runs out.
pub(super) fn quiescence(board: &Board, alpha: i32, beta: i32) -> i32 {
    let captures = board.generate_capture_moves();
    if captures.is_empty() {
        return board.evaluate();
    }
    stand_pat_search(board, &captures, alpha, beta)
}

/// Apply one capture to a copy of the board and keep searching captures.
fn capture_node(board: &Board, m: Move, alpha: i32, beta: i32) -> i32 {
    let mut board = *board;
    if !board.make_move(m) {
        return ILLEGAL_MOVE_SCORE[board.side_to_move().index()];
    }

    let result = board.get_result();
    if result != 0 {
        return WIN_SCORE[(result - 1) as usize];
    }

    let captures = board.generate_capture_moves();
    if captures.is_empty() {
        return board.evaluate();
    }
    stand_pat_search(&board, &captures, alpha, beta)
}

fn stand_pat_search(
    board: &Board,
    captures: &MoveList<QUIESCENCE_CAPACITY>,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match board.side_to_move() {
        Color::White => {
            let stand_pat = board.evaluate();
            if stand_pat >= beta {
                return beta;
            }
            if alpha < stand_pat {
                alpha = stand_pat;
            }

            for &m in captures.iter() {
                let eval = capture_node(board, m, alpha, beta);
                if eval > alpha {
                    alpha = eval;
                }
                if beta <= alpha {
                    return beta;
                }
            }
            alpha
        }
        Color::Black => {
            let stand_pat = board.evaluate();
            if alpha >= stand_pat {
                return alpha;
            }
            if beta > stand_pat {
                beta = stand_pat;
            }

            for &m in captures.iter() {
                let eval = capture_node(board, m, alpha, beta);
                if eval < beta {
                    beta = eval;
                }
                if beta <= alpha {
                    return alpha;
                }
            }
            beta
        }
    }
}
