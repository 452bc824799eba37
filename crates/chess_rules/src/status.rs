//! Check, checkmate and stalemate.
//!
//! Everything here is derived from the attack map and the exhaustive legal
//! move enumeration, so one call costs up to 64×64 legality checks plus a
//! board copy per pseudo-legal candidate.

use std::fmt;

use serde::Serialize;

use crate::attacks::attack_map;
use crate::board::Board;
use crate::legality::has_legal_move;
use crate::state::GameState;
use crate::types::*;

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GameStatus {
    InProgress,
    Check { color: Color },
    Checkmate { loser: Color },
    Stalemate { color: Color },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate { .. }
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { loser } => Some(loser.other()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check { color } => write!(f, "{color} is in check"),
            GameStatus::Checkmate { loser } => {
                write!(f, "checkmate, {} wins", loser.other())
            }
            GameStatus::Stalemate { color } => write!(f, "stalemate, {color} has no move"),
        }
    }
}

/// Whether `c`'s king stands on a square the other colour attacks.
///
/// A board without a king for `c` counts as in check.
pub fn in_check(board: &Board, c: Color) -> bool {
    match board.king_square(c) {
        Some(ksq) => attack_map(board, c.other()).contains(ksq),
        None => true,
    }
}

pub fn is_checkmate(state: &GameState, c: Color) -> bool {
    in_check(&state.board, c) && !has_legal_move(state, c)
}

pub fn is_stalemate(state: &GameState, c: Color) -> bool {
    !in_check(&state.board, c) && !has_legal_move(state, c)
}

pub fn is_game_ended(state: &GameState, c: Color) -> bool {
    !has_legal_move(state, c)
}

/// Status of `state` from the point of view of the side to move.
pub fn classify(state: &GameState) -> GameStatus {
    let c = state.side_to_move;
    let checked = in_check(&state.board, c);
    match (checked, has_legal_move(state, c)) {
        (true, false) => GameStatus::Checkmate { loser: c },
        (false, false) => GameStatus::Stalemate { color: c },
        (true, true) => GameStatus::Check { color: c },
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
