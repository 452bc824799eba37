//! Greedy Material Engine
//!
//! Looks exactly one ply ahead: every legal move is played on a copy of the
//! position and the resulting material balance, from the mover's side, is
//! its score. The first move with the best score wins, in the row-major
//! order the rules enumerate moves in, so the choice is deterministic.
//!
//! Kings are worth nothing here; checkmate is never scored, only detected
//! by the session afterwards.

use chess_rules::{
    apply_move, legal_moves, material_balance, Engine, GameState, Move, SearchResult,
};
use tracing::debug;


#[derive(Debug, Clone, Default)]
pub struct GreedyEngine {
    nodes: u64,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for GreedyEngine {
    fn search(&mut self, state: &GameState) -> SearchResult {
        self.nodes = 0;
        let mover = state.side_to_move;

        let mut best: Option<(Move, i32)> = None;
        for v in legal_moves(state) {
            self.nodes += 1;
            let after = apply_move(state, &v);
            let score = material_balance(&after.board, mover);
            // strict: ties keep the earlier move
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((v.mv(), score));
            }
        }

        match best {
            Some((mv, score)) => {
                debug!(%mv, score, nodes = self.nodes, "greedy pick");
                SearchResult {
                    best_move: Some(mv),
                    score,
                    nodes: self.nodes,
                }
            }
            None => SearchResult {
                best_move: None,
                score: 0,
                nodes: self.nodes,
            },
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
