//! Knight move generation.

use super::super::attack_tables;
use super::super::types::{Move, MoveList, Piece, MAX_GENERATED, NO_FLAGS};
use super::super::Board;

impl Board {
    pub(super) fn knight_captures<const N: usize>(&self, list: &mut MoveList<N>) {
        for from in self.pieces[self.to_move.index()][Piece::Knight.index()].iter() {
            self.push_captures(
                from,
                Piece::Knight,
                attack_tables::knight_attacks(from),
                NO_FLAGS,
                list,
            );
        }
    }

    pub(super) fn knight_quiets(&self, list: &mut MoveList<MAX_GENERATED>) {
        for from in self.pieces[self.to_move.index()][Piece::Knight.index()].iter() {
            for to in (attack_tables::knight_attacks(from) & !self.board).iter() {
                list.push(Move::encode_scored(
                    from,
                    to,
                    Piece::Knight,
                    Piece::Knight,
                    NO_FLAGS,
                    self.check_hint(attack_tables::knight_attacks(to)),
                ));
            }
        }
    }
}
