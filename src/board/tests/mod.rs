//! Board-level tests: move application invariants, generation, perft and
//! search behavior.

mod perft;
mod search;

use super::types::{Move, CAPTURE, ENPASSANT, NO_FLAGS};
use super::{Board, Piece, Square};

/// Quiet move helper for test sequences.
pub(super) fn quiet(src: Square, dest: Square, piece: Piece) -> Move {
    Move::encode(src, dest, piece, piece, NO_FLAGS)
}

/// Capture move helper for test sequences.
pub(super) fn capture(src: Square, dest: Square, piece: Piece) -> Move {
    Move::encode(src, dest, piece, piece, CAPTURE)
}

/// Pawn double push carrying the en-passant flag.
pub(super) fn double_push(src: Square, dest: Square) -> Move {
    Move::encode(src, dest, Piece::Pawn, Piece::Pawn, ENPASSANT)
}

/// Apply a sequence of moves, asserting each one is legal.
pub(super) fn play(board: &mut Board, moves: &[Move]) {
    for &m in moves {
        assert!(board.make_move(m), "illegal move {m:?} in test sequence");
    }
}

/// Check every structural invariant that must hold after a successful
/// `make_move`.
pub(super) fn assert_invariants(board: &Board) {
    // occupancies mirror the union of the piece boards
    assert_eq!(
        board.board,
        board.occupancies[0] | board.occupancies[1],
        "board is not the union of the occupancies"
    );
    assert!(
        (board.occupancies[0] & board.occupancies[1]).is_empty(),
        "both sides occupy the same square"
    );

    for color in 0..2 {
        let mut union = super::Bitboard::EMPTY;
        for piece in 0..6 {
            let bb = board.pieces[color][piece];
            assert!(
                (union & bb).is_empty(),
                "two piece types share a square for color {color}"
            );
            union |= bb;
        }
        assert_eq!(union, board.occupancies[color]);
    }

    // rolling hash and evaluation match their from-scratch versions
    assert_eq!(
        board.hash,
        crate::zobrist::hash_state(board),
        "rolling hash diverged from hash_state"
    );
    let (midgame, endgame) = board.recompute_eval();
    assert_eq!(board.midgame, midgame, "rolling midgame eval diverged");
    assert_eq!(board.endgame, endgame, "rolling endgame eval diverged");
    assert_eq!(board.static_evaluate(), board.midgame + board.endgame);
}
