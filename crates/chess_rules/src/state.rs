use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::square::Square;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// Home file of the rook castling on this side.
    pub fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
}

/// Per-colour, per-side castling flags. Flags are only ever cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn has(&self, c: Color, side: CastlingSide) -> bool {
        match (c, side) {
            (Color::White, CastlingSide::Kingside) => self.wk,
            (Color::White, CastlingSide::Queenside) => self.wq,
            (Color::Black, CastlingSide::Kingside) => self.bk,
            (Color::Black, CastlingSide::Queenside) => self.bq,
        }
    }

    pub fn revoke(&mut self, c: Color, side: CastlingSide) {
        match (c, side) {
            (Color::White, CastlingSide::Kingside) => self.wk = false,
            (Color::White, CastlingSide::Queenside) => self.wq = false,
            (Color::Black, CastlingSide::Kingside) => self.bk = false,
            (Color::Black, CastlingSide::Queenside) => self.bq = false,
        }
    }

    pub fn revoke_all(&mut self, c: Color) {
        self.revoke(c, CastlingSide::Kingside);
        self.revoke(c, CastlingSide::Queenside);
    }

    /// The right tied to a rook's home corner, if `sq` is one.
    pub fn corner(sq: Square) -> Option<(Color, CastlingSide)> {
        let color = match sq.rank() {
            0 => Color::White,
            7 => Color::Black,
            _ => return None,
        };
        match sq.file() {
            0 => Some((color, CastlingSide::Queenside)),
            7 => Some((color, CastlingSide::Kingside)),
            _ => None,
        }
    }
}

/// One complete position plus the bookkeeping the rules need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square passed over by a pawn that advanced two squares on the
    /// previous move; cleared by every other move.
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Number of the move about to be played, starting at 1.
    pub turn_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl GameState {
    pub fn startpos() -> Self {
        GameState {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            turn_count: 1,
        }
    }

    /// A state around a hand-built board, for `side_to_move` with no
    /// castling rights and no en-passant target.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            turn_count: if side_to_move == Color::White { 1 } else { 2 },
        }
    }
}
