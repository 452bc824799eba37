use crate::board::Board;
use crate::types::*;

/// Material worth of one piece in centipawns. Kings are not counted.
pub fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Material of `color` minus material of its opponent.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    let own: i32 = board.pieces(color).map(|(_, pc)| material_value(pc.kind)).sum();
    let theirs: i32 = board
        .pieces(color.other())
        .map(|(_, pc)| material_value(pc.kind))
        .sum();
    own - theirs
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
