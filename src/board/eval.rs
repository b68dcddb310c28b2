//! Position evaluation.
//!
//! Material and piece-square bonuses are folded into two value maps (one for
//! the middlegame, one for the endgame) indexed by color, piece and square.
//! The black maps are the white maps negated and vertically mirrored, so a
//! sum over all pieces is already a white-minus-black score. The board keeps
//! rolling `midgame`/`endgame` sums; `evaluate` interpolates them by the
//! game stage.

use once_cell::sync::Lazy;

use super::pst::{MATERIAL_EG, MATERIAL_MG, PST_EG, PST_MG};
use super::types::{Color, Piece, Square};
use super::Board;

static MIDGAME_VALUE: Lazy<[[[i32; 64]; 6]; 2]> =
    Lazy::new(|| build_value_maps(&MATERIAL_MG, &PST_MG));

static ENDGAME_VALUE: Lazy<[[[i32; 64]; 6]; 2]> =
    Lazy::new(|| build_value_maps(&MATERIAL_EG, &PST_EG));

/// Combine material and square bonuses into per-color value maps.
///
/// The piece-square tables are written rank 1 first with columns running
/// file a to file h, while square indices count files from 'h'; the column
/// flip below maps between the two. Black values are the mirrored white
/// values, negated.
fn build_value_maps(material: &[i32; 6], pst: &[[i32; 64]; 6]) -> [[[i32; 64]; 6]; 2] {
    let mut maps = [[[0; 64]; 6]; 2];
    for piece in 0..6 {
        for sq in 0..64 {
            let row = sq / 8;
            let col = 7 - sq % 8;
            maps[Color::White.index()][piece][sq] = material[piece] + pst[piece][row * 8 + col];
        }
        for sq in 0..64 {
            maps[Color::Black.index()][piece][sq] =
                -maps[Color::White.index()][piece][sq ^ 56];
        }
    }
    maps
}

#[inline]
pub(crate) fn midgame_value(color: Color, piece: Piece, sq: Square) -> i32 {
    MIDGAME_VALUE[color.index()][piece.index()][sq.index()]
}

#[inline]
pub(crate) fn endgame_value(color: Color, piece: Piece, sq: Square) -> i32 {
    ENDGAME_VALUE[color.index()][piece.index()][sq.index()]
}

/// Build the evaluation value maps. Later calls are no-ops.
pub fn init_eval_tables() {
    Lazy::force(&MIDGAME_VALUE);
    Lazy::force(&ENDGAME_VALUE);
}

impl Board {
    /// Tapered evaluation from the rolling accumulators. Positive favors
    /// white.
    #[inline]
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let stage = self.gamestage.min(24);
        (self.midgame * (24 - stage) + self.endgame * stage) / 24
    }

    /// Sum both value maps over every piece from scratch. Diagnostics only;
    /// always equals `midgame + endgame` on a consistent board.
    #[must_use]
    pub fn static_evaluate(&self) -> i32 {
        let (midgame, endgame) = self.recompute_eval();
        midgame + endgame
    }

    /// Recompute the rolling evaluation terms from the piece bitboards.
    pub(crate) fn recompute_eval(&self) -> (i32, i32) {
        let mut midgame = 0;
        let mut endgame = 0;
        for color in [Color::White, Color::Black] {
            for piece in [
                Piece::Pawn,
                Piece::Bishop,
                Piece::Knight,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                for sq in self.pieces[color.index()][piece.index()].iter() {
                    midgame += midgame_value(color, piece, sq);
                    endgame += endgame_value(color, piece, sq);
                }
            }
        }
        (midgame, endgame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_values_mirror_white() {
        init_eval_tables();
        for piece in [Piece::Pawn, Piece::Knight, Piece::King] {
            for sq in 0..64 {
                let sq = Square::from_index(sq);
                assert_eq!(
                    midgame_value(Color::Black, piece, sq),
                    -midgame_value(Color::White, piece, sq.flip_vertical()),
                );
                assert_eq!(
                    endgame_value(Color::Black, piece, sq),
                    -endgame_value(Color::White, piece, sq.flip_vertical()),
                );
            }
        }
    }

    #[test]
    fn test_promotion_rank_pawn_bonus() {
        // a white pawn one step from promotion must be worth far more
        // midgame than one on its starting square
        let seventh = midgame_value(Color::White, Piece::Pawn, Square::E7);
        let second = midgame_value(Color::White, Piece::Pawn, Square::E2);
        assert!(seventh > second + 50, "{seventh} vs {second}");
    }

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(board.evaluate(), 0);
        assert_eq!(board.static_evaluate(), 0);
    }
}
