//! Search behavior tests.

use crate::search::Searcher;
use crate::zobrist;

use super::super::builder::BoardBuilder;
use super::super::types::{Color, Piece, Square};
use super::super::Board;
use super::{assert_invariants, capture, double_push, play, quiet};

#[test]
fn test_search_from_start_returns_legal_move() {
    let board = Board::new();
    let mut searcher = Searcher::new();
    searcher.set_search_depth(3);

    let m = searcher.search(&board);
    assert!(!m.is_null());

    let mut next = board;
    assert!(next.make_move(m));
    assert_invariants(&next);
}

#[test]
fn test_search_scrambled_middlegame() {
    // the scrambled position exercises captures, double pushes and an
    // en-passant target in one sequence
    let mut board = Board::new();
    play(
        &mut board,
        &[
            quiet(Square::D2, Square::D4, Piece::Pawn),
            quiet(Square::E7, Square::E5, Piece::Pawn),
            capture(Square::B2, Square::B7, Piece::Pawn),
            quiet(Square::C7, Square::C5, Piece::Pawn),
            quiet(Square::G1, Square::F3, Piece::Knight),
            quiet(Square::H7, Square::H4, Piece::Pawn),
            double_push(Square::G2, Square::G4),
            quiet(Square::F7, Square::F6, Piece::Pawn),
        ],
    );
    assert_invariants(&board);

    let mut searcher = Searcher::new();
    searcher.set_search_depth(2);
    let m = searcher.search(&board);
    assert!(!m.is_null());

    let mut next = board;
    assert!(next.make_move(m));
    assert_eq!(next.hash(), zobrist::hash_state(&next));
}

#[test]
fn test_search_delivers_the_third_check() {
    // white has two checks banked; any queen slide to the open e-file or
    // the king's diagonal wins on the spot
    let board = BoardBuilder::new()
        .piece(Color::White, Piece::King, Square::A1)
        .piece(Color::White, Piece::Queen, Square::G4)
        .piece(Color::Black, Piece::King, Square::H8)
        .piece(Color::Black, Piece::Pawn, Square::A7)
        .checks_delivered(Color::White, 2)
        .build();

    for depth in [1, 2, 3] {
        let mut searcher = Searcher::new();
        searcher.set_search_depth(depth);
        let m = searcher.search(&board);
        assert!(!m.is_null());

        let mut next = board;
        assert!(next.make_move(m), "search returned an illegal move");
        assert_eq!(next.get_result(), 1, "depth {depth} missed the win");
    }
}

#[test]
fn test_search_avoids_handing_over_the_third_check() {
    // black has two checks banked and is checking again; only taking the
    // queen stops the counter from completing next move
    let board = BoardBuilder::new()
        .piece(Color::White, Piece::King, Square::E1)
        .piece(Color::White, Piece::Rook, Square::A4)
        .piece(Color::Black, Piece::Queen, Square::E4)
        .piece(Color::Black, Piece::King, Square::H8)
        .checks_delivered(Color::Black, 2)
        .build();

    let mut searcher = Searcher::new();
    searcher.set_search_depth(2);
    let m = searcher.search(&board);
    assert!(!m.is_null());

    let mut next = board;
    assert!(next.make_move(m));
    assert_eq!(next.piece_on(Square::E4), Some(Piece::Rook), "expected Rxe4");

    // black to move: no reply may reach the third check
    let replies = next.generate_all_moves();
    for &reply in replies.captures.iter().chain(replies.quiets.iter()) {
        let mut after = next;
        if after.make_move(reply) {
            assert_ne!(after.get_result(), 2, "white walked into the losing check");
        }
    }
}

#[test]
fn test_quiescence_extends_capture_chains() {
    // a queen grabbing a defended pawn must not be rated as a clean win of
    // material at depth 1
    let board = BoardBuilder::new()
        .piece(Color::White, Piece::King, Square::H1)
        .piece(Color::White, Piece::Queen, Square::D1)
        .piece(Color::Black, Piece::Pawn, Square::D5)
        .piece(Color::Black, Piece::Pawn, Square::C6)
        .piece(Color::Black, Piece::King, Square::H8)
        .build();

    let mut searcher = Searcher::new();
    searcher.set_search_depth(1);
    let m = searcher.search(&board);
    assert!(!m.is_null());
    // Qxd5 walks into c6xd5; quiescence should steer the queen elsewhere
    assert!(
        !(m.piece() == Piece::Queen && m.dest() == Square::D5 && m.is_capture()),
        "queen took a defended pawn"
    );
}

#[test]
fn test_repeated_search_caches_best_move() {
    let board = Board::new();
    let mut searcher = Searcher::new();
    searcher.set_search_depth(3);

    let first = searcher.search(&board);
    assert!(!first.is_null());
    let cached = searcher
        .tt
        .probe(board.hash())
        .expect("root entry missing after search");
    assert_eq!(cached.best_move.without_score(), first.without_score());

    // the cached move seeds the next search of the same position
    let second = searcher.search(&board);
    assert_eq!(first.without_score(), second.without_score());
}

#[test]
fn test_fifty_move_rule_draws_the_subtree() {
    let board = BoardBuilder::new()
        .piece(Color::White, Piece::King, Square::A1)
        .piece(Color::White, Piece::Knight, Square::B1)
        .piece(Color::Black, Piece::King, Square::H8)
        .piece(Color::Black, Piece::Knight, Square::G8)
        .no_capture_count(60)
        .build();

    let mut searcher = Searcher::new();
    searcher.set_search_depth(4);
    // nothing to win: every line is a draw, but a move must still come out
    let m = searcher.search(&board);
    assert!(!m.is_null());
    let mut next = board;
    assert!(next.make_move(m));
}
