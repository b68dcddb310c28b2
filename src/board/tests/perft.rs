//! Perft tests: pseudo-legal generation filtered by `make_move` must
//! reproduce the published node counts.

use super::super::builder::BoardBuilder;
use super::super::types::{Color, Piece, Square};
use super::super::Board;
use super::{double_push, play, quiet};

#[test]
fn test_perft_initial_position() {
    let board = Board::new();
    for (depth, expected) in [
        (1, 20),
        (2, 400),
        (3, 8_902),
        (4, 197_281),
        (5, 4_865_609),
    ] {
        assert_eq!(
            board.perft(depth),
            expected,
            "initial position, depth {depth}"
        );
    }
}

#[test]
fn test_perft_kiwipete() {
    let board = BoardBuilder::new()
        // white
        .piece(Color::White, Piece::Rook, Square::A1)
        .piece(Color::White, Piece::King, Square::E1)
        .piece(Color::White, Piece::Rook, Square::H1)
        .piece(Color::White, Piece::Pawn, Square::A2)
        .piece(Color::White, Piece::Pawn, Square::B2)
        .piece(Color::White, Piece::Pawn, Square::C2)
        .piece(Color::White, Piece::Bishop, Square::D2)
        .piece(Color::White, Piece::Bishop, Square::E2)
        .piece(Color::White, Piece::Pawn, Square::F2)
        .piece(Color::White, Piece::Pawn, Square::G2)
        .piece(Color::White, Piece::Pawn, Square::H2)
        .piece(Color::White, Piece::Knight, Square::C3)
        .piece(Color::White, Piece::Queen, Square::F3)
        .piece(Color::White, Piece::Pawn, Square::E4)
        .piece(Color::White, Piece::Pawn, Square::D5)
        .piece(Color::White, Piece::Knight, Square::E5)
        // black
        .piece(Color::Black, Piece::Rook, Square::A8)
        .piece(Color::Black, Piece::King, Square::E8)
        .piece(Color::Black, Piece::Rook, Square::H8)
        .piece(Color::Black, Piece::Pawn, Square::A7)
        .piece(Color::Black, Piece::Pawn, Square::C7)
        .piece(Color::Black, Piece::Pawn, Square::D7)
        .piece(Color::Black, Piece::Queen, Square::E7)
        .piece(Color::Black, Piece::Pawn, Square::F7)
        .piece(Color::Black, Piece::Bishop, Square::G7)
        .piece(Color::Black, Piece::Bishop, Square::A6)
        .piece(Color::Black, Piece::Knight, Square::B6)
        .piece(Color::Black, Piece::Pawn, Square::E6)
        .piece(Color::Black, Piece::Knight, Square::F6)
        .piece(Color::Black, Piece::Pawn, Square::G6)
        .piece(Color::Black, Piece::Pawn, Square::B4)
        .piece(Color::Black, Piece::Pawn, Square::H3)
        .allow_castling(Color::White)
        .allow_castling(Color::Black)
        .build();

    for (depth, expected) in [(1, 48), (2, 2_039), (3, 97_862)] {
        assert_eq!(board.perft(depth), expected, "kiwipete, depth {depth}");
    }
}

#[test]
fn test_perft_castling_position() {
    let board = BoardBuilder::new()
        .piece(Color::White, Piece::Rook, Square::A1)
        .piece(Color::White, Piece::King, Square::E1)
        .piece(Color::White, Piece::Rook, Square::H1)
        .piece(Color::Black, Piece::Rook, Square::A8)
        .piece(Color::Black, Piece::King, Square::E8)
        .piece(Color::Black, Piece::Rook, Square::H8)
        .allow_castling(Color::White)
        .allow_castling(Color::Black)
        .build();

    for (depth, expected) in [(1, 26), (2, 568), (3, 13_744)] {
        assert_eq!(board.perft(depth), expected, "castling position, depth {depth}");
    }
}

#[test]
fn test_perft_en_passant_position() {
    // 1. e4 d5 2. e5 f5 leaves f6 capturable en passant
    let mut board = Board::new();
    play(
        &mut board,
        &[
            quiet(Square::E2, Square::E4, Piece::Pawn),
            quiet(Square::D7, Square::D5, Piece::Pawn),
            quiet(Square::E4, Square::E5, Piece::Pawn),
            double_push(Square::F7, Square::F5),
        ],
    );
    assert_eq!(board.en_passant_target(), Some(Square::F6));

    for (depth, expected) in [(1, 31), (2, 707), (3, 21_637)] {
        assert_eq!(board.perft(depth), expected, "en passant position, depth {depth}");
    }
}
