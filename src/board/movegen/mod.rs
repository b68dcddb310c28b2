//! Pseudo-legal move generation.
//!
//! Moves obey piece geometry and capture rules but may still leave the
//! mover's king attacked; `make_move` rejects those at application time.
//! Captures and quiets are produced separately, annotated with a 4-bit
//! ordering score and sorted best-first.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables;
use super::state::corner_castle_bit;
use super::types::{
    Bitboard, GeneratedMoves, Move, MoveList, Piece, Square, CAPTURE, CAPTURE_SCORE_TABLE,
    QUIESCENCE_CAPACITY, UNCASTLE,
};
use super::Board;

impl Board {
    /// Every pseudo-legal move for the side to move, split into
    /// score-ordered captures and quiets.
    #[must_use]
    pub fn generate_all_moves(&self) -> GeneratedMoves {
        let mut moves = GeneratedMoves::new();

        self.pawn_captures(&mut moves.captures);
        self.pawn_quiets(&mut moves.quiets);
        self.knight_captures(&mut moves.captures);
        self.knight_quiets(&mut moves.quiets);
        self.king_captures(&mut moves.captures);
        self.king_quiets(&mut moves.quiets);
        self.slider_captures(&mut moves.captures);
        self.slider_quiets(&mut moves.quiets);

        moves.captures.sort_by_score();
        moves.quiets.sort_by_score();
        moves
    }

    /// Only the capture subset, for quiescence.
    #[must_use]
    pub fn generate_capture_moves(&self) -> MoveList<QUIESCENCE_CAPACITY> {
        let mut captures = MoveList::new();
        self.pawn_captures(&mut captures);
        self.knight_captures(&mut captures);
        self.king_captures(&mut captures);
        self.slider_captures(&mut captures);
        captures.sort_by_score();
        captures
    }

    /// Count the positions reachable in `depth` plies: pseudo-legal
    /// generation filtered through `make_move`, standard leaf counting.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_all_moves();
        let mut nodes = 0;
        for &m in moves.captures.iter().chain(moves.quiets.iter()) {
            let mut next = *self;
            if next.make_move(m) {
                nodes += next.perft(depth - 1);
            }
        }
        nodes
    }

    /// True when the side not on move attacks `sq`.
    ///
    /// Superpiece probe: attack sets computed from `sq` as each piece type,
    /// intersected with the matching enemy pieces.
    #[must_use]
    pub(crate) fn is_attacked(&self, sq: Square) -> bool {
        let enemy = self.to_move.opponent().index();

        let mut attackers = attack_tables::pawn_attacks(self.to_move, sq)
            & self.pieces[enemy][Piece::Pawn.index()];
        attackers |= attack_tables::knight_attacks(sq) & self.pieces[enemy][Piece::Knight.index()];
        attackers |= attack_tables::king_attacks(sq) & self.pieces[enemy][Piece::King.index()];

        let bishop_rays = attack_tables::bishop_attacks(sq, self.board);
        attackers |= bishop_rays & self.pieces[enemy][Piece::Bishop.index()];
        let rook_rays = attack_tables::rook_attacks(sq, self.board);
        attackers |= rook_rays & self.pieces[enemy][Piece::Rook.index()];
        attackers |= (bishop_rays | rook_rays) & self.pieces[enemy][Piece::Queen.index()];

        !attackers.is_empty()
    }

    /// Emit one capture per enemy piece reachable in `attacks`.
    fn push_captures<const N: usize>(
        &self,
        from: Square,
        piece: Piece,
        attacks: Bitboard,
        extra_flags: u32,
        list: &mut MoveList<N>,
    ) {
        let enemy = self.to_move.opponent().index();
        for victim in Piece::VICTIMS {
            for to in (attacks & self.pieces[enemy][victim.index()]).iter() {
                let mut flags = CAPTURE | extra_flags;
                if corner_castle_bit(to).is_some() {
                    flags |= UNCASTLE;
                }
                list.push(Move::encode_scored(
                    from,
                    to,
                    piece,
                    piece,
                    flags,
                    CAPTURE_SCORE_TABLE[piece.index()][victim.index()],
                ));
            }
        }
    }

    /// Ordering bonus for a quiet move whose destination attacks the enemy
    /// king.
    #[inline]
    fn check_hint(&self, attacks_from_dest: Bitboard) -> u32 {
        let enemy_king =
            self.pieces[self.to_move.opponent().index()][Piece::King.index()];
        u32::from(!(attacks_from_dest & enemy_king).is_empty())
    }
}
