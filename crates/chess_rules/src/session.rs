//! The game session: the authoritative history and the one door moves go
//! through.
//!
//! History is a list of full snapshots plus a cursor. Browsing moves the
//! cursor only; new moves are accepted only while the cursor is on the
//! newest snapshot, so there is never a branch to discard.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::ChessError;
use crate::execute::apply_move;
use crate::legality::{legal_moves, validate, ValidatedMove};
use crate::state::GameState;
use crate::status::{classify, GameStatus};
use crate::types::*;

/// One applied move as it appears in the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub notation: String,
    pub color: Color,
    pub fullmove_number: u32,
    pub captured: Option<PieceKind>,
}

#[derive(Clone, Debug)]
pub struct Session {
    history: Vec<GameState>,
    /// `statuses[i]` classifies `history[i]`.
    statuses: Vec<GameStatus>,
    log: Vec<MoveRecord>,
    cursor: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::from_state(GameState::startpos())
    }

    pub fn from_state(state: GameState) -> Self {
        let status = classify(&state);
        Session {
            history: vec![state],
            statuses: vec![status],
            log: Vec::new(),
            cursor: 0,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Ok(Self::from_state(GameState::from_fen(fen)?))
    }

    /// Parse and play a move given in `<kind>-<from>-<to>` notation.
    pub fn submit_move(&mut self, notation: &str) -> Result<GameStatus, ChessError> {
        self.ensure_latest()?;
        let mv: Move = notation.parse().inspect_err(|e| {
            debug!(notation, error = %e, "rejected move notation");
        })?;
        self.submit(mv)
    }

    /// Validate and play `mv` against the live state.
    ///
    /// On any error the session is left exactly as it was.
    pub fn submit(&mut self, mv: Move) -> Result<GameStatus, ChessError> {
        self.ensure_latest()?;
        let state = &self.history[self.cursor];
        let validated = validate(state, mv).inspect_err(|e| {
            debug!(%mv, reason = %e, "rejected move");
        })?;

        let record = MoveRecord {
            notation: mv.to_string(),
            color: state.side_to_move,
            fullmove_number: state.fullmove_number,
            captured: validated.captured().map(|pc| pc.kind),
        };
        let next = apply_move(state, &validated);
        let status = classify(&next);

        self.history.truncate(self.cursor + 1);
        self.statuses.truncate(self.cursor + 1);
        self.history.push(next);
        self.statuses.push(status);
        self.log.push(record);
        self.cursor = self.history.len() - 1;

        info!(%mv, ply = self.log.len(), %status, "move accepted");
        if status.is_over() {
            info!(%status, "game over");
        }
        Ok(status)
    }

    fn ensure_latest(&self) -> Result<(), ChessError> {
        if self.is_at_latest() {
            Ok(())
        } else {
            let err = ChessError::NotAtLatestState {
                cursor: self.cursor,
                latest: self.history.len() - 1,
            };
            debug!(error = %err, "move refused while browsing history");
            Err(err)
        }
    }

    /// Move the view one snapshot back. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "stepped back");
        true
    }

    /// Move the view one snapshot forward. Returns false at the head.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_latest() {
            return false;
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, "stepped forward");
        true
    }

    pub fn go_to_latest(&mut self) {
        self.cursor = self.history.len() - 1;
        trace!(cursor = self.cursor, "back to the live position");
    }

    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Back to the position the session was created with.
    pub fn restart(&mut self) {
        self.history.truncate(1);
        self.statuses.truncate(1);
        self.log.clear();
        self.cursor = 0;
        info!("session restarted");
    }

    /// The snapshot under the cursor.
    pub fn current_state(&self) -> &GameState {
        &self.history[self.cursor]
    }

    pub fn latest_state(&self) -> &GameState {
        &self.history[self.history.len() - 1]
    }

    /// Classification of the snapshot under the cursor.
    pub fn status(&self) -> GameStatus {
        self.statuses[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &[GameState] {
        &self.history
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Legal moves in the snapshot under the cursor.
    pub fn legal_moves(&self) -> Vec<ValidatedMove> {
        legal_moves(self.current_state())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
