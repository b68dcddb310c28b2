//! Bishop, rook and queen move generation.

use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::types::{Move, MoveList, Piece, MAX_GENERATED, NO_FLAGS, UNCASTLE};
use super::super::Board;

impl Board {
    pub(super) fn slider_captures<const N: usize>(&self, list: &mut MoveList<N>) {
        let c = self.to_move.index();

        for from in self.pieces[c][Piece::Bishop.index()].iter() {
            self.push_captures(
                from,
                Piece::Bishop,
                bishop_attacks(from, self.board),
                NO_FLAGS,
                list,
            );
        }

        for from in self.pieces[c][Piece::Rook.index()].iter() {
            let extra = if self.is_rook_start_square(from) {
                UNCASTLE
            } else {
                NO_FLAGS
            };
            self.push_captures(from, Piece::Rook, rook_attacks(from, self.board), extra, list);
        }

        for from in self.pieces[c][Piece::Queen.index()].iter() {
            self.push_captures(
                from,
                Piece::Queen,
                queen_attacks(from, self.board),
                NO_FLAGS,
                list,
            );
        }
    }

    pub(super) fn slider_quiets(&self, list: &mut MoveList<MAX_GENERATED>) {
        let c = self.to_move.index();

        for from in self.pieces[c][Piece::Bishop.index()].iter() {
            for to in (bishop_attacks(from, self.board) & !self.board).iter() {
                list.push(Move::encode_scored(
                    from,
                    to,
                    Piece::Bishop,
                    Piece::Bishop,
                    NO_FLAGS,
                    self.check_hint(bishop_attacks(to, self.board)),
                ));
            }
        }

        for from in self.pieces[c][Piece::Rook.index()].iter() {
            // a rook leaving its home corner gives up that corner's right
            let flags = if self.is_rook_start_square(from) {
                UNCASTLE
            } else {
                NO_FLAGS
            };
            for to in (rook_attacks(from, self.board) & !self.board).iter() {
                list.push(Move::encode_scored(
                    from,
                    to,
                    Piece::Rook,
                    Piece::Rook,
                    flags,
                    self.check_hint(rook_attacks(to, self.board)),
                ));
            }
        }

        for from in self.pieces[c][Piece::Queen.index()].iter() {
            for to in (queen_attacks(from, self.board) & !self.board).iter() {
                list.push(Move::encode_scored(
                    from,
                    to,
                    Piece::Queen,
                    Piece::Queen,
                    NO_FLAGS,
                    self.check_hint(queen_attacks(to, self.board)),
                ));
            }
        }
    }
}
