//! Self-play: two engines alternate through one session until the game ends
//! or the ply cap is reached.

use chess_rules::{ChessError, Color, Engine, GameState, GameStatus, MoveRecord, Session};
use serde::Serialize;
use tracing::{debug, info};

/// How a self-play game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayOutcome {
    /// Final classification; `InProgress` when the ply cap stopped the game
    pub status: GameStatus,
    pub plies: u32,
    pub log: Vec<MoveRecord>,
}

/// Play one game from `start`. Every engine move goes through
/// [`Session::submit`], so an engine proposing an illegal move ends the
/// game with that error.
pub fn run_selfplay(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    start: GameState,
    max_plies: u32,
) -> Result<SelfPlayOutcome, ChessError> {
    let mut session = Session::from_state(start);
    white.new_game();
    black.new_game();

    let mut plies = 0;
    while plies < max_plies && !session.status().is_over() {
        let state = session.current_state();
        let side = state.side_to_move;
        let result = if side == Color::White {
            white.search(state)
        } else {
            black.search(state)
        };
        let mv = result.best_move.ok_or(ChessError::NoLegalMoves)?;
        debug!(%side, %mv, score = result.score, "self-play move");
        session.submit(mv)?;
        plies += 1;
    }

    let status = match session.status() {
        over if over.is_over() => over,
        _ => GameStatus::InProgress,
    };
    info!(
        white = white.name(),
        black = black.name(),
        plies,
        %status,
        "self-play game finished"
    );
    Ok(SelfPlayOutcome {
        status,
        plies,
        log: session.move_log().to_vec(),
    })
}

#[cfg(test)]
#[path = "selfplay_tests.rs"]
mod selfplay_tests;
