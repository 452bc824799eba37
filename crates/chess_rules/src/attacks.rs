//! Attack maps: every square a colour threatens, independent of whose turn it is.
//!
//! Built from the raw movement patterns only. No turn-ownership and no
//! king-safety filtering happens here; the legality evaluator's king-safety
//! step is layered on top of this module, never the other way round.

use crate::board::Board;
use crate::square::{Square, SquareSet};
use crate::types::*;

/// (Δrank, Δfile) offsets.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares threatened by the piece `pc` standing on `from`.
///
/// Sliding rays stop at (and include) the first occupied square. Pawns
/// threaten both forward diagonals whether or not anything stands there.
pub fn piece_attacks(board: &Board, from: Square, pc: Piece) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    match pc.kind {
        PieceKind::Pawn => {
            let dr = pc.color.forward();
            for df in [-1, 1] {
                if let Some(to) = from.offset(dr, df) {
                    set.insert(to);
                }
            }
        }
        PieceKind::Knight => step_attacks(&mut set, from, &KNIGHT_DELTAS),
        PieceKind::King => step_attacks(&mut set, from, &KING_DELTAS),
        PieceKind::Bishop => ray_attacks(&mut set, board, from, &DIAGONALS),
        PieceKind::Rook => ray_attacks(&mut set, board, from, &ORTHOGONALS),
        PieceKind::Queen => {
            ray_attacks(&mut set, board, from, &DIAGONALS);
            ray_attacks(&mut set, board, from, &ORTHOGONALS);
        }
    }
    set
}

/// The full attack map of colour `by`.
pub fn attack_map(board: &Board, by: Color) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for (sq, pc) in board.pieces(by) {
        set |= piece_attacks(board, sq, pc);
    }
    set
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    attack_map(board, by).contains(target)
}

fn step_attacks(set: &mut SquareSet, from: Square, deltas: &[(i8, i8)]) {
    for &(dr, df) in deltas {
        if let Some(to) = from.offset(dr, df) {
            set.insert(to);
        }
    }
}

fn ray_attacks(set: &mut SquareSet, board: &Board, from: Square, dirs: &[(i8, i8)]) {
    for &(dr, df) in dirs {
        let mut cur = from.offset(dr, df);
        while let Some(to) = cur {
            set.insert(to);
            if !board.is_empty_at(to) {
                break;
            }
            cur = to.offset(dr, df);
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
