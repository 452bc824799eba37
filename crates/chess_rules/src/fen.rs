//! Forsyth-Edwards Notation for test setup and logging.
//!
//! FEN carries no per-piece flags, so they are derived on the way in:
//! kings and rooks count as unmoved only while a matching castling right is
//! present, pawns as unmoved only on their starting rank, and the pawn that
//! created an en-passant target is stamped as having double-stepped on the
//! previous turn.

use crate::board::Board;
use crate::error::ChessError;
use crate::square::Square;
use crate::state::{CastlingRights, CastlingSide, GameState};
use crate::types::*;

impl GameState {
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |reason: &str| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields"));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("board section must have 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_fen_char(ch)
                        .ok_or_else(|| invalid(&format!("invalid piece char {ch:?}")))?;
                    let sq = Square::new(rank, file)
                        .map_err(|_| invalid("too many files in a rank"))?;
                    board.set_piece(sq, Some(Piece::new(color, kind)));
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid("too many files in a rank"));
                }
            }
            if file != 8 {
                return Err(invalid("not enough files in a rank"));
            }
        }

        for c in [Color::White, Color::Black] {
            if board.count(c, PieceKind::King) != 1 {
                return Err(invalid(&format!("{c} must have exactly one king")));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("side to move must be 'w' or 'b'")),
        };

        let mut castling_rights = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling_rights.wk = true,
                    'Q' => castling_rights.wq = true,
                    'k' => castling_rights.bk = true,
                    'q' => castling_rights.bq = true,
                    _ => return Err(invalid(&format!("invalid castling char {c:?}"))),
                }
            }
        }

        let en_passant_target = if ep_part == "-" {
            None
        } else {
            Some(
                ep_part
                    .parse::<Square>()
                    .map_err(|_| invalid("invalid en-passant square"))?,
            )
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| invalid("invalid halfmove clock"))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| invalid("invalid fullmove number"))?;
        if fullmove_number == 0 {
            return Err(invalid("fullmove number starts at 1"));
        }
        let turn_count = (fullmove_number - 1)
            .checked_mul(2)
            .and_then(|n| n.checked_add(1 + side_to_move.idx() as u32))
            .ok_or_else(|| invalid("fullmove number too large"))?;

        derive_moved_flags(&mut board, &castling_rights);

        if let Some(target) = en_passant_target {
            let pusher = side_to_move.other();
            // the square a pusher's double step passes over
            let expected_rank = pusher.pawn_start_rank() as i8 + pusher.forward();
            if target.rank() as i8 != expected_rank {
                return Err(invalid("en-passant square on the wrong rank"));
            }
            if !board.is_empty_at(target) {
                return Err(invalid("en-passant square is occupied"));
            }
            let pawn_sq = target
                .offset(pusher.forward(), 0)
                .ok_or_else(|| invalid("en-passant square on an edge rank"))?;
            match board.piece_at_mut(pawn_sq) {
                Some(pc) if pc.kind == PieceKind::Pawn && pc.color == pusher => {
                    pc.last_double_step_turn = Some(turn_count - 1);
                }
                _ => return Err(invalid("no pawn in front of the en-passant square")),
            }
        }

        Ok(GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            turn_count,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let pc = Square::new(rank, file)
                    .ok()
                    .and_then(|sq| self.board.piece_at(sq));
                match pc {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let ch = pc.kind.fen_char();
                        out.push(if pc.color == Color::White {
                            ch.to_ascii_uppercase()
                        } else {
                            ch
                        });
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.side_to_move == Color::White { 'w' } else { 'b' });
        out.push(' ');

        let rights = self.castling_rights;
        let mut castle = String::new();
        for (flag, ch) in [
            (rights.wk, 'K'),
            (rights.wq, 'Q'),
            (rights.bk, 'k'),
            (rights.bq, 'q'),
        ] {
            if flag {
                castle.push(ch);
            }
        }
        out.push_str(if castle.is_empty() { "-" } else { &castle });

        out.push(' ');
        match self.en_passant_target {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

fn derive_moved_flags(board: &mut Board, rights: &CastlingRights) {
    for idx in 0..64 {
        let Ok(sq) = Square::from_index(idx) else {
            continue;
        };
        let Some(pc) = board.piece_at_mut(sq) else {
            continue;
        };
        pc.has_moved = match pc.kind {
            PieceKind::Pawn => sq.rank() != pc.color.pawn_start_rank(),
            PieceKind::King => {
                let home = sq.rank() == pc.color.back_rank() && sq.file() == 4;
                !(home
                    && (rights.has(pc.color, CastlingSide::Kingside)
                        || rights.has(pc.color, CastlingSide::Queenside)))
            }
            PieceKind::Rook => match CastlingRights::corner(sq) {
                Some((color, side)) if color == pc.color => !rights.has(color, side),
                _ => true,
            },
            _ => false,
        };
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
