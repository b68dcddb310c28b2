//! King move generation, including castling.

use super::super::attack_tables;
use super::super::state::StateFlags;
use super::super::types::{
    Bitboard, Move, MoveList, Piece, Square, CASTLE, MAX_GENERATED, NO_FLAGS, UNCASTLE,
};
use super::super::Board;

const KING_START: [Square; 2] = [Square::E1, Square::E8];

// squares between king and rook that must be empty
const KING_SIDE_BLOCKING: [Bitboard; 2] =
    [Bitboard(0x0000_0000_0000_0006), Bitboard(0x0600_0000_0000_0000)];
const QUEEN_SIDE_BLOCKING: [Bitboard; 2] =
    [Bitboard(0x0000_0000_0000_0070), Bitboard(0x7000_0000_0000_0000)];

// home corners the rook must still occupy
const KING_SIDE_ROOK: [Bitboard; 2] =
    [Bitboard(0x0000_0000_0000_0001), Bitboard(0x0100_0000_0000_0000)];
const QUEEN_SIDE_ROOK: [Bitboard; 2] =
    [Bitboard(0x0000_0000_0000_0080), Bitboard(0x8000_0000_0000_0000)];

impl Board {
    pub(super) fn king_captures<const N: usize>(&self, list: &mut MoveList<N>) {
        let from = self.king_square(self.to_move);
        let extra = if from == KING_START[self.to_move.index()] {
            UNCASTLE
        } else {
            NO_FLAGS
        };
        self.push_captures(from, Piece::King, attack_tables::king_attacks(from), extra, list);
    }

    pub(super) fn king_quiets(&self, list: &mut MoveList<MAX_GENERATED>) {
        let mover = self.to_move;
        let c = mover.index();
        let from = self.king_square(mover);
        let at_start = from == KING_START[c];

        if at_start {
            // king side: rights intact, path clear, rook home, not in
            // check, crossing square unattacked; the landing square is
            // covered by the self-check test in make_move
            if !self.flags.castle_lost(StateFlags::king_side_bit(mover))
                && (self.board & KING_SIDE_BLOCKING[c]).is_empty()
                && !(self.pieces[c][Piece::Rook.index()] & KING_SIDE_ROOK[c]).is_empty()
                && !self.is_attacked(from)
                && !self.is_attacked(Square::from_index(from.index() - 1))
            {
                list.push(Move::encode_scored(
                    from,
                    Square::from_index(from.index() - 2),
                    Piece::King,
                    Piece::King,
                    CASTLE,
                    1,
                ));
            }

            // queen side
            if !self.flags.castle_lost(StateFlags::queen_side_bit(mover))
                && (self.board & QUEEN_SIDE_BLOCKING[c]).is_empty()
                && !(self.pieces[c][Piece::Rook.index()] & QUEEN_SIDE_ROOK[c]).is_empty()
                && !self.is_attacked(from)
                && !self.is_attacked(Square::from_index(from.index() + 1))
            {
                list.push(Move::encode_scored(
                    from,
                    Square::from_index(from.index() + 2),
                    Piece::King,
                    Piece::King,
                    CASTLE,
                    1,
                ));
            }
        }

        let flags = if at_start { UNCASTLE } else { NO_FLAGS };
        for to in (attack_tables::king_attacks(from) & !self.board).iter() {
            list.push(Move::encode(from, to, Piece::King, Piece::King, flags));
        }
    }
}
