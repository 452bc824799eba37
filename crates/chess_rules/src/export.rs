//! Read-only views of a position for collaborators: the token grid, a
//! compact diagram, an attack overlay, and the text handed to a
//! move-suggestion service.

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::session::MoveRecord;
use crate::square::{Square, SquareSet};
use crate::state::GameState;
use crate::types::Color;

/// Eight rows of eight cells, rank 8 first, each cell `<color>-<kind>` or
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardExport {
    pub rows: Vec<Vec<Option<String>>>,
}

impl fmt::Display for BoardExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or("none"))
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl Board {
    pub fn export(&self) -> BoardExport {
        let rows = (0..8u8)
            .rev()
            .map(|rank| {
                grid_row(rank)
                    .map(|sq| self.piece_at(sq).map(|pc| pc.token()))
                    .collect()
            })
            .collect();
        BoardExport { rows }
    }
}

/// Letter diagram, white pieces upper case, with rank and file labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for sq in grid_row(rank) {
                let ch = match self.piece_at(sq) {
                    Some(pc) if pc.color == Color::White => {
                        pc.kind.fen_char().to_ascii_uppercase()
                    }
                    Some(pc) => pc.kind.fen_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Diagram of a square set, `x` on members, rank 8 first.
pub fn render_overlay(squares: SquareSet) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for sq in grid_row(rank) {
            out.push(' ');
            out.push(if squares.contains(sq) { 'x' } else { '.' });
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}

fn grid_row(rank: u8) -> impl Iterator<Item = Square> {
    (0..8i8).filter_map(move |file| Square::new(rank as i8, file).ok())
}

/// Board-based framing for a move-suggestion service.
pub fn suggestion_prompt(state: &GameState) -> String {
    let side = state.side_to_move;
    let mut lines = vec![
        "You will play chess. I will give you the board and you return the best move.".to_string(),
        format!("You are {side}."),
        "The board is given from a8, b8, c8, ..., h8, a7, b7, ..., a1, b1, ..., h1.".to_string(),
        "Cells look like: black-rook, black-knight, ..., none, ..., white-knight, white-rook"
            .to_string(),
        "Return the move in the format: <piece>-<from>-<to>".to_string(),
        "piece: pawn, knight, bishop, rook, queen, king".to_string(),
        "Examples: king-e2-e3, queen-a7-a6".to_string(),
        "The board is:".to_string(),
    ];
    lines.push(state.board.export().to_string());
    lines.push("Answer with <piece>-<from>-<to> and nothing else.".to_string());
    lines.join("\n")
}

/// Log-based framing: the moves so far instead of the board.
pub fn log_prompt(state: &GameState, log: &[MoveRecord]) -> String {
    let mut lines = vec![
        "You will play chess. I will give you the game so far and you return the best move."
            .to_string(),
        format!("You are {}.", state.side_to_move),
        "The format of the log is: <piece>-<from>-<to>".to_string(),
        "piece: pawn, knight, bishop, rook, queen, king".to_string(),
    ];
    for (i, rec) in log.iter().enumerate() {
        lines.push(format!("log #{i}: {}", rec.notation));
    }
    lines.push("Return the best move in the format: <piece>-<from>-<to>".to_string());
    lines.push("No other characters should be given.".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
