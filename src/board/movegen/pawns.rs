//! Pawn move generation: captures, en passant, pushes and promotions.

use super::super::attack_tables;
use super::super::state::corner_castle_bit;
use super::super::types::{
    Bitboard, Color, Move, MoveList, Piece, Square, CAPTURE, CAPTURE_SCORE_TABLE, ENPASSANT,
    MAX_GENERATED, NO_FLAGS, UNCASTLE,
};
use super::super::Board;

const DOUBLE_PUSH_SOURCE: [Bitboard; 2] = [Bitboard::RANK_2, Bitboard::RANK_7];

/// The square one step ahead of `sq` for a pawn of `color`.
#[inline]
fn push_square(color: Color, sq: Square) -> Square {
    match color {
        Color::White => Square::from_index(sq.index() + 8),
        Color::Black => Square::from_index(sq.index() - 8),
    }
}

/// Queen on the back rank, the pawn itself everywhere else.
#[inline]
fn promotion_for(color: Color, to: Square) -> Piece {
    let promotes = match color {
        Color::White => to.index() >= 56,
        Color::Black => to.index() <= 7,
    };
    if promotes {
        Piece::Queen
    } else {
        Piece::Pawn
    }
}

impl Board {
    pub(super) fn pawn_captures<const N: usize>(&self, list: &mut MoveList<N>) {
        let mover = self.to_move;
        let enemy = mover.opponent().index();

        for from in self.pieces[mover.index()][Piece::Pawn.index()].iter() {
            let attacks = attack_tables::pawn_attacks(mover, from);

            if let Some(ep) = self.enpassant {
                if attacks.contains(ep) {
                    list.push(Move::encode(
                        from,
                        ep,
                        Piece::Pawn,
                        Piece::Pawn,
                        CAPTURE | ENPASSANT,
                    ));
                }
            }

            for victim in Piece::VICTIMS {
                for to in (attacks & self.pieces[enemy][victim.index()]).iter() {
                    let mut flags = CAPTURE;
                    if corner_castle_bit(to).is_some() {
                        flags |= UNCASTLE;
                    }
                    list.push(Move::encode_scored(
                        from,
                        to,
                        Piece::Pawn,
                        promotion_for(mover, to),
                        flags,
                        CAPTURE_SCORE_TABLE[Piece::Pawn.index()][victim.index()],
                    ));
                }
            }
        }
    }

    pub(super) fn pawn_quiets(&self, list: &mut MoveList<MAX_GENERATED>) {
        let mover = self.to_move;
        let enemy = mover.opponent().index();

        for from in self.pieces[mover.index()][Piece::Pawn.index()].iter() {
            let to = push_square(mover, from);
            if self.board.contains(to) {
                continue;
            }
            list.push(Move::encode(
                from,
                to,
                Piece::Pawn,
                promotion_for(mover, to),
                NO_FLAGS,
            ));

            if DOUBLE_PUSH_SOURCE[mover.index()].contains(from) {
                let double_to = push_square(mover, to);
                if !self.board.contains(double_to) {
                    // flag the double push only when an enemy pawn stands
                    // ready to capture onto the jumped square
                    let takers = attack_tables::pawn_attacks(mover, to)
                        & self.pieces[enemy][Piece::Pawn.index()];
                    let flags = if takers.is_empty() { NO_FLAGS } else { ENPASSANT };
                    list.push(Move::encode(from, double_to, Piece::Pawn, Piece::Pawn, flags));
                }
            }
        }
    }
}
