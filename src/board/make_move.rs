//! Move application.

use crate::zobrist::{self, enpassant_index, ZobristKeys};

use super::eval::{endgame_value, midgame_value};
use super::pst::GAMESTAGE_WEIGHTS;
use super::state::{corner_castle_bit, StateFlags};
use super::types::{Bitboard, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Apply a pseudo-legal move.
    ///
    /// Updates the bitboards, flags, en-passant target, rolling evaluation
    /// and rolling hash in one pass. Returns `false` when the move leaves
    /// the mover's own king attacked; the state is not rolled back, so
    /// callers clone the board first and discard the clone on failure.
    pub fn make_move(&mut self, m: Move) -> bool {
        let keys = zobrist::keys();
        let src = m.src();
        let dest = m.dest();
        let piece = m.piece();
        let promoted = m.promoted();
        let mover = self.to_move;
        let c = mover.index();

        // lift the mover off its source square
        self.pop_piece(piece, mover, src);
        self.midgame -= midgame_value(mover, piece, src);
        self.endgame -= endgame_value(mover, piece, src);
        self.hash ^= keys.piece_keys[c][piece.index()][src.index()];

        // drop the (possibly promoted) piece on the destination
        self.set_piece(promoted, mover, dest);
        self.midgame += midgame_value(mover, promoted, dest);
        self.endgame += endgame_value(mover, promoted, dest);
        self.hash ^= keys.piece_keys[c][promoted.index()][dest.index()];

        self.no_capture_count += 1;
        self.hash ^= keys.enpassant_keys[enpassant_index(self.enpassant)];

        let castle_bits_before = self.flags.castle_bits();

        if m.is_capture() {
            self.no_capture_count = 0;
            if m.is_enpassant() {
                // the victim pawn sits one step behind the landing square
                self.remove_victim(Piece::Pawn, mover.opponent(), behind(mover, dest), keys);
            } else {
                let b = Bitboard::from_square(dest);
                for victim in Piece::VICTIMS {
                    if !(self.pieces[mover.opponent().index()][victim.index()] & b).is_empty() {
                        self.remove_victim(victim, mover.opponent(), dest, keys);
                        break;
                    }
                }
            }
            self.enpassant = None;
            if m.is_uncastle() {
                self.strip_castle_rights(piece, src);
            }
            // capturing on a corner costs the rook owner that corner's right
            if let Some(bit) = corner_castle_bit(dest) {
                self.flags.set_castle_lost(bit);
            }
        } else if m.is_castle() {
            self.move_castling_rook(dest, keys);
            self.enpassant = None;
            self.flags.set_castle_lost(StateFlags::queen_side_bit(mover));
            self.flags.set_castle_lost(StateFlags::king_side_bit(mover));
        } else if m.is_uncastle() {
            self.strip_castle_rights(piece, src);
            self.enpassant = None;
        } else if m.is_enpassant() {
            // double push; the generator only flags these when an enemy
            // pawn stands ready to capture onto the jumped square
            self.enpassant = Some(behind(mover, dest));
        } else {
            self.enpassant = None;
        }

        self.hash ^=
            keys.castle_keys[castle_bits_before] ^ keys.castle_keys[self.flags.castle_bits()];
        self.hash ^= keys.enpassant_keys[enpassant_index(self.enpassant)];

        if self.is_attacked(self.king_square(mover)) {
            return false;
        }

        self.to_move = mover.opponent();

        // a check against the new side to move counts for the mover
        if self.is_attacked(self.king_square(self.to_move)) {
            let check_bits_before = self.flags.check_bits();
            self.flags.add_check(mover);
            self.hash ^=
                keys.check_keys[check_bits_before] ^ keys.check_keys[self.flags.check_bits()];
        }

        true
    }

    fn remove_victim(&mut self, victim: Piece, owner: Color, sq: Square, keys: &ZobristKeys) {
        self.pop_piece(victim, owner, sq);
        self.midgame -= midgame_value(owner, victim, sq);
        self.endgame -= endgame_value(owner, victim, sq);
        self.hash ^= keys.piece_keys[owner.index()][victim.index()][sq.index()];
        self.gamestage += GAMESTAGE_WEIGHTS[victim.index()];
    }

    fn move_castling_rook(&mut self, king_dest: Square, keys: &ZobristKeys) {
        let (rook_from, rook_to) = match king_dest {
            Square::G1 => (Square::H1, Square::F1),
            Square::C1 => (Square::A1, Square::D1),
            Square::G8 => (Square::H8, Square::F8),
            _ => (Square::A8, Square::D8),
        };
        let mover = self.to_move;
        let c = mover.index();

        self.pop_piece(Piece::Rook, mover, rook_from);
        self.midgame -= midgame_value(mover, Piece::Rook, rook_from);
        self.endgame -= endgame_value(mover, Piece::Rook, rook_from);
        self.hash ^= keys.piece_keys[c][Piece::Rook.index()][rook_from.index()];

        self.set_piece(Piece::Rook, mover, rook_to);
        self.midgame += midgame_value(mover, Piece::Rook, rook_to);
        self.endgame += endgame_value(mover, Piece::Rook, rook_to);
        self.hash ^= keys.piece_keys[c][Piece::Rook.index()][rook_to.index()];
    }

    /// A king move loses both of the mover's rights; a rook move from a
    /// corner loses that corner's right.
    fn strip_castle_rights(&mut self, piece: Piece, src: Square) {
        if piece == Piece::King {
            self.flags
                .set_castle_lost(StateFlags::queen_side_bit(self.to_move));
            self.flags
                .set_castle_lost(StateFlags::king_side_bit(self.to_move));
        } else if let Some(bit) = corner_castle_bit(src) {
            self.flags.set_castle_lost(bit);
        }
    }
}

/// The square one pawn-step behind `sq` from `color`'s point of view.
#[inline]
fn behind(color: Color, sq: Square) -> Square {
    match color {
        Color::White => Square::from_index(sq.index() - 8),
        Color::Black => Square::from_index(sq.index() + 8),
    }
}
