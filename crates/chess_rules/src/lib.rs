pub mod attacks;
pub mod board;
pub mod error;
pub mod eval;
pub mod execute;
pub mod export;
pub mod fen;
pub mod legality;
pub mod perft;
pub mod session;
pub mod square;
pub mod state;
pub mod status;
pub mod types;

// Re-export the rules surface so collaborators need one import
pub use attacks::{attack_map, is_square_attacked, piece_attacks};
pub use board::*;
pub use error::ChessError;
pub use eval::{material_balance, material_value};
pub use execute::apply_move;
pub use export::{log_prompt, render_overlay, suggestion_prompt, BoardExport};
pub use legality::{
    has_legal_move, is_legal, legal_moves, legal_moves_for, validate, MoveEffect, ValidatedMove,
};
pub use perft::perft;
pub use session::{MoveRecord, Session};
pub use square::*;
pub use state::*;
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by anything that picks moves for one side
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Score of the chosen move in centipawns, from the mover's side
    pub score: i32,
    /// Number of positions looked at
    pub nodes: u64,
}

/// Trait that all move pickers implement.
///
/// Engines only ever propose moves; whatever they return is played
/// through [`Session::submit`] and validated like any other input.
pub trait Engine: Send {
    /// Pick a move for the side to move in `state`.
    fn search(&mut self, state: &GameState) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chess-rules"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
