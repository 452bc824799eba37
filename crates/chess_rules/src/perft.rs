use crate::execute::apply_move;
use crate::legality::legal_moves;
use crate::state::GameState;

/// Number of leaf positions reachable in exactly `depth` plies.
///
/// Walks the tree through the same validator and executor the game uses,
/// so a wrong count points at the rules themselves.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|v| perft(&apply_move(state, v), depth - 1))
        .sum()
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
