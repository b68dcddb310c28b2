//! Board state: piece placement, flags, rolling evaluation and hash.

use std::fmt::Write as _;

use crate::zobrist;

use super::types::{Bitboard, Color, Piece, Square};

/// Castling-lost and check-count bits packed into one byte.
///
/// bit 0: white queen-side castling lost, bit 1: white king-side,
/// bit 2: black queen-side, bit 3: black king-side; bits 4-5 count checks
/// delivered by white, bits 6-7 checks delivered by black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct StateFlags(pub(crate) u8);

impl StateFlags {
    #[inline]
    pub(crate) const fn queen_side_bit(color: Color) -> usize {
        2 * color.index()
    }

    #[inline]
    pub(crate) const fn king_side_bit(color: Color) -> usize {
        2 * color.index() + 1
    }

    #[inline]
    pub(crate) const fn castle_lost(self, bit: usize) -> bool {
        self.0 & (1 << bit) != 0
    }

    #[inline]
    pub(crate) fn set_castle_lost(&mut self, bit: usize) {
        self.0 |= 1 << bit;
    }

    /// The four castling bits, used as a Zobrist key index.
    #[inline]
    pub(crate) const fn castle_bits(self) -> usize {
        (self.0 & 0x0f) as usize
    }

    /// The four check-count bits, used as a Zobrist key index.
    #[inline]
    pub(crate) const fn check_bits(self) -> usize {
        (self.0 >> 4) as usize
    }

    #[inline]
    pub(crate) const fn checks_by(self, color: Color) -> u8 {
        (self.0 >> (4 + 2 * color.index())) & 3
    }

    /// Count one more check for `color`; the two-bit counter sticks at 3.
    #[inline]
    pub(crate) fn add_check(&mut self, color: Color) {
        if self.checks_by(color) < 3 {
            self.0 += 1 << (4 + 2 * color.index());
        }
    }

    #[inline]
    pub(crate) fn set_checks(&mut self, color: Color, count: u8) {
        let shift = 4 + 2 * color.index();
        self.0 = (self.0 & !(3 << shift)) | ((count & 3) << shift);
    }
}

/// Castling-lost bit for a rook's home corner, if the square is one.
#[inline]
pub(crate) fn corner_castle_bit(sq: Square) -> Option<usize> {
    match sq {
        Square::A1 => Some(0),
        Square::H1 => Some(1),
        Square::A8 => Some(2),
        Square::H8 => Some(3),
        _ => None,
    }
}

// Indexed by the four check-count bits (white in the low two). A side whose
// counter reaches 3 has delivered the third check and wins.
#[rustfmt::skip]
const STATUS_MAP: [i32; 16] = [
    0, 0, 0, 1,
    0, 0, 0, 1,
    0, 0, 0, 1,
    2, 2, 2, 0,
];

/// The full game state. Small enough to copy freely; the search clones it at
/// every node instead of undoing moves.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    /// `pieces[color][piece]`, six bitboards per side.
    pub(crate) pieces: [[Bitboard; 6]; 2],
    /// Union of each side's piece bitboards.
    pub(crate) occupancies: [Bitboard; 2],
    /// Union of both occupancies.
    pub(crate) board: Bitboard,
    pub(crate) to_move: Color,
    pub(crate) flags: StateFlags,
    /// Square a pawn of the side to move may capture onto en passant.
    pub(crate) enpassant: Option<Square>,
    /// Rolling midgame and endgame evaluation sums.
    pub(crate) midgame: i32,
    pub(crate) endgame: i32,
    /// Accumulated weight of captured pieces, for the stage interpolation.
    pub(crate) gamestage: i32,
    /// Half-moves since the last capture.
    pub(crate) no_capture_count: i32,
    /// Rolling Zobrist hash; always equals `zobrist::hash_state(self)`.
    pub(crate) hash: u64,
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancies: [Bitboard::EMPTY; 2],
            board: Bitboard::EMPTY,
            to_move: Color::White,
            flags: StateFlags(0),
            enpassant: None,
            midgame: 0,
            endgame: 0,
            gamestage: 0,
            no_capture_count: 0,
            hash: 0,
        }
    }

    /// Reset to the standard initial position.
    pub fn reset(&mut self) {
        *self = Board::empty();

        for (color, back_rank, pawn_rank) in
            [(Color::White, 0usize, 1usize), (Color::Black, 7, 6)]
        {
            // square indices count files from 'h', so the array runs h1..a1
            let backs = [
                Piece::Rook,
                Piece::Knight,
                Piece::Bishop,
                Piece::King,
                Piece::Queen,
                Piece::Bishop,
                Piece::Knight,
                Piece::Rook,
            ];
            for (file, piece) in backs.into_iter().enumerate() {
                self.set_piece(piece, color, Square::from_index(back_rank * 8 + file));
            }
            for file in 0..8 {
                self.set_piece(Piece::Pawn, color, Square::from_index(pawn_rank * 8 + file));
            }
        }

        let (midgame, endgame) = self.recompute_eval();
        self.midgame = midgame;
        self.endgame = endgame;
        self.hash = zobrist::hash_state(self);
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Piece, color: Color, sq: Square) {
        let b = Bitboard::from_square(sq);
        self.board |= b;
        self.occupancies[color.index()] |= b;
        self.pieces[color.index()][piece.index()] |= b;
    }

    #[inline]
    pub(crate) fn pop_piece(&mut self, piece: Piece, color: Color, sq: Square) {
        let b = !Bitboard::from_square(sq);
        self.board &= b;
        self.occupancies[color.index()] &= b;
        self.pieces[color.index()][piece.index()] &= b;
    }

    /// Square of `color`'s king.
    #[inline]
    pub(crate) fn king_square(&self, color: Color) -> Square {
        self.pieces[color.index()][Piece::King.index()].lsb()
    }

    /// Bitboard of `color`'s pieces of one type.
    #[inline]
    pub(crate) fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub(crate) fn castle_bits(&self) -> usize {
        self.flags.castle_bits()
    }

    #[inline]
    pub(crate) fn check_bits(&self) -> usize {
        self.flags.check_bits()
    }

    /// 0 while the game is running, 1 once white has delivered the third
    /// check, 2 once black has.
    #[inline]
    #[must_use]
    pub fn get_result(&self) -> i32 {
        STATUS_MAP[self.flags.check_bits()]
    }

    /// The piece standing on `sq`, either color.
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let b = Bitboard::from_square(sq);
        for piece in [
            Piece::Pawn,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            if !((self.pieces[0][piece.index()] | self.pieces[1][piece.index()]) & b).is_empty() {
                return Some(piece);
            }
        }
        None
    }

    /// Whether a king move from `src` to `dest` is one of the four castling
    /// moves still available to its side.
    #[must_use]
    pub fn is_castle_move(&self, src: Square, dest: Square, piece: Piece) -> bool {
        piece == Piece::King
            && ((src == Square::E1
                && dest == Square::G1
                && !self.flags.castle_lost(StateFlags::king_side_bit(Color::White)))
                || (src == Square::E1
                    && dest == Square::C1
                    && !self.flags.castle_lost(StateFlags::queen_side_bit(Color::White)))
                || (src == Square::E8
                    && dest == Square::G8
                    && !self.flags.castle_lost(StateFlags::king_side_bit(Color::Black)))
                || (src == Square::E8
                    && dest == Square::C8
                    && !self.flags.castle_lost(StateFlags::queen_side_bit(Color::Black))))
    }

    /// Whether a pawn move from `src` to `dest` is a double push that leaves
    /// a capturable en-passant target behind it.
    #[must_use]
    pub fn is_en_passant_move(&self, src: Square, dest: Square, piece: Piece) -> bool {
        if piece != Piece::Pawn {
            return false;
        }
        let (delta, enemy_pawns) = match self.to_move {
            Color::White => (
                dest.index() as i32 - src.index() as i32,
                self.pieces[Color::Black.index()][Piece::Pawn.index()],
            ),
            Color::Black => (
                src.index() as i32 - dest.index() as i32,
                self.pieces[Color::White.index()][Piece::Pawn.index()],
            ),
        };
        if delta != 16 {
            return false;
        }
        !(enemy_pawns & (Bitboard::from_square(dest).east() | Bitboard::from_square(dest).west()))
            .is_empty()
    }

    /// Whether `sq` is a starting rook corner of the side to move.
    #[must_use]
    pub fn is_rook_start_square(&self, sq: Square) -> bool {
        match self.to_move {
            Color::White => sq == Square::A1 || sq == Square::H1,
            Color::Black => sq == Square::A8 || sq == Square::H8,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.enpassant
    }

    #[inline]
    #[must_use]
    pub fn no_capture_count(&self) -> i32 {
        self.no_capture_count
    }

    #[inline]
    #[must_use]
    pub fn gamestage(&self) -> i32 {
        self.gamestage
    }

    /// Checks delivered by `color` so far (saturates at 3).
    #[inline]
    #[must_use]
    pub fn checks_delivered(&self, color: Color) -> u8 {
        self.flags.checks_by(color)
    }

    /// Multi-line diagnostic rendering of the position, including the
    /// rolling-versus-static evaluation and hash comparisons.
    #[must_use]
    pub fn get_state(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "To play: {}", self.to_move);
        let _ = write!(out, "Flags:");
        for bit in 0..8 {
            let _ = write!(out, " {}", (self.flags.0 >> bit) & 1);
        }
        let _ = writeln!(out);
        match self.enpassant {
            Some(sq) => {
                let _ = writeln!(out, "En Passant square: {sq}");
            }
            None => {
                let _ = writeln!(out, "En Passant square: None");
            }
        }

        let _ = writeln!(out, "X a  b  c  d  e  f  g  h");
        for rank in (0..8usize).rev() {
            let _ = write!(out, "{} ", rank + 1);
            for i in ((rank * 8)..(rank * 8 + 8)).rev() {
                let sq = Square::from_index(i);
                match self.piece_on(sq) {
                    Some(piece) => {
                        let side = if self.occupancies[Color::White.index()].contains(sq) {
                            'w'
                        } else {
                            'b'
                        };
                        let _ = write!(out, "{}{} ", piece.to_char(), side);
                    }
                    None => {
                        let _ = write!(out, ".  ");
                    }
                }
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Game result: {}", self.get_result());
        let _ = writeln!(out, "Game stage: {}", self.gamestage);
        let _ = writeln!(out, "Static  Evaluation: {}", self.static_evaluate());
        let _ = writeln!(out, "Rolling Evaluation: {}", self.midgame + self.endgame);
        let _ = writeln!(out, "Static  Hash: {:016x}", zobrist::hash_state(self));
        let _ = writeln!(out, "Rolling Hash: {:016x}", self.hash);

        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
