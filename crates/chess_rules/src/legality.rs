//! Move legality.
//!
//! [`validate`] runs the ordered chain for one candidate move and stops at
//! the first failure:
//!
//! 1. notation (done by [`Move`]'s parser before we get here),
//! 2. the source holds a piece of the stated kind belonging to the side to move,
//! 3. the destination is not occupied by that side,
//! 4. the piece's movement pattern, including path clearance and the
//!    castling / en-passant preconditions,
//! 5. king safety: the move is simulated on a scratch board and rejected if
//!    the mover's king would then sit in the opponent's attack map.
//!
//! A move that survives is returned as a [`ValidatedMove`], the only input
//! the executor accepts.

use std::borrow::Cow;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::error::ChessError;
use crate::execute::relocate;
use crate::square::Square;
use crate::state::{CastlingSide, GameState};
use crate::status::in_check;
use crate::types::*;

/// Side effects a legal move carries beyond moving one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEffect {
    Normal,
    /// Pawn advanced two squares, passing over `passed`.
    DoubleStep { passed: Square },
    /// The captured pawn stands on `captured_at`, beside the destination.
    EnPassant { captured_at: Square },
    Castle {
        side: CastlingSide,
        rook_from: Square,
        rook_to: Square,
    },
    /// Pawn reached the last rank and becomes a queen.
    Promotion,
}

/// A move that passed the whole legality chain for a particular state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedMove {
    mv: Move,
    effect: MoveEffect,
    captured: Option<Piece>,
}

impl ValidatedMove {
    pub fn mv(&self) -> Move {
        self.mv
    }

    pub fn effect(&self) -> MoveEffect {
        self.effect
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

pub fn validate(state: &GameState, mv: Move) -> Result<ValidatedMove, ChessError> {
    let board = &state.board;

    let piece = match board.piece_at(mv.from) {
        Some(pc) if pc.kind == mv.kind => pc,
        _ => {
            return Err(ChessError::NoPieceAtSource {
                square: mv.from,
                kind: mv.kind,
            });
        }
    };
    if piece.color != state.side_to_move {
        return Err(ChessError::WrongTurnOwnership {
            square: mv.from,
            to_move: state.side_to_move,
        });
    }

    let target = board.piece_at(mv.to);
    if let Some(t) = target {
        if t.color == piece.color {
            return Err(ChessError::FriendlyCapture(mv.to));
        }
        if t.kind == PieceKind::King {
            return Err(violation(mv, "kings are never captured"));
        }
    }

    let effect = match piece.kind {
        PieceKind::King => king_pattern(state, mv, piece)?,
        PieceKind::Queen => slider_pattern(board, mv, true, true)?,
        PieceKind::Rook => slider_pattern(board, mv, false, true)?,
        PieceKind::Bishop => slider_pattern(board, mv, true, false)?,
        PieceKind::Knight => knight_pattern(mv)?,
        PieceKind::Pawn => pawn_pattern(state, mv, piece)?,
    };

    let captured = match effect {
        MoveEffect::EnPassant { captured_at } => board.piece_at(captured_at),
        _ => target,
    };
    let validated = ValidatedMove {
        mv,
        effect,
        captured,
    };

    let mut scratch = board.clone();
    relocate(&mut scratch, &validated);
    if in_check(&scratch, piece.color) {
        return Err(ChessError::KingExposedAfterMove {
            mv,
            color: piece.color,
        });
    }

    Ok(validated)
}

pub fn is_legal(state: &GameState, mv: Move) -> bool {
    validate(state, mv).is_ok()
}

/// Every fully-legal move for the side to move.
///
/// Exhaustive: each own piece (row-major) is tried against each destination
/// (row-major), and the full chain runs on every pair. That is 64×64
/// candidates with a board copy per surviving one, which is fine at human
/// pace but not for deep search.
pub fn legal_moves(state: &GameState) -> Vec<ValidatedMove> {
    legal_moves_for(state, state.side_to_move)
}

/// Every fully-legal move `color` would have if it were on move.
///
/// For the side not on move, the state is viewed with the turn handed over
/// and no en-passant target, since that target only ever belongs to the
/// side to move.
pub fn legal_moves_for(state: &GameState, color: Color) -> Vec<ValidatedMove> {
    let view = view_for(state, color);
    let mut out = Vec::with_capacity(64);
    for (from, pc) in view.board.pieces(color) {
        for to in Square::row_major() {
            if let Ok(v) = validate(&view, Move::new(pc.kind, from, to)) {
                out.push(v);
            }
        }
    }
    out
}

/// Whether `color` has at least one fully-legal move; stops at the first.
pub fn has_legal_move(state: &GameState, color: Color) -> bool {
    let view = view_for(state, color);
    view.board.pieces(color).any(|(from, pc)| {
        Square::row_major().any(|to| is_legal(&view, Move::new(pc.kind, from, to)))
    })
}

fn view_for(state: &GameState, color: Color) -> Cow<'_, GameState> {
    if color == state.side_to_move {
        Cow::Borrowed(state)
    } else {
        let mut view = state.clone();
        view.side_to_move = color;
        view.en_passant_target = None;
        Cow::Owned(view)
    }
}

fn violation(mv: Move, reason: &'static str) -> ChessError {
    ChessError::PseudoLegalityViolation { mv, reason }
}

fn castling_error(mv: Move, reason: &'static str) -> ChessError {
    ChessError::CastlingPreconditionViolation { mv, reason }
}

fn slider_pattern(
    board: &Board,
    mv: Move,
    diagonal: bool,
    straight: bool,
) -> Result<MoveEffect, ChessError> {
    let (dr, df) = mv.from.delta_to(mv.to);
    let on_straight = dr == 0 || df == 0;
    let on_diagonal = dr.abs() == df.abs();
    if !((straight && on_straight) || (diagonal && on_diagonal)) {
        return Err(violation(mv, "destination is not on one of the piece's lines"));
    }
    if !board.path_clear(mv.from, mv.to) {
        return Err(violation(mv, "the path to the destination is blocked"));
    }
    Ok(MoveEffect::Normal)
}

fn knight_pattern(mv: Move) -> Result<MoveEffect, ChessError> {
    let (dr, df) = mv.from.delta_to(mv.to);
    match (dr.abs(), df.abs()) {
        (1, 2) | (2, 1) => Ok(MoveEffect::Normal),
        _ => Err(violation(mv, "knights move in an L of one and two squares")),
    }
}

fn king_pattern(state: &GameState, mv: Move, king: Piece) -> Result<MoveEffect, ChessError> {
    let (dr, df) = mv.from.delta_to(mv.to);
    if dr.abs() <= 1 && df.abs() <= 1 {
        return Ok(MoveEffect::Normal);
    }
    if dr == 0 && df.abs() == 2 {
        return castle_pattern(state, mv, king);
    }
    Err(violation(mv, "kings move one square in any direction"))
}

fn castle_pattern(state: &GameState, mv: Move, king: Piece) -> Result<MoveEffect, ChessError> {
    let board = &state.board;
    let color = king.color;
    let rank = color.back_rank() as i8;
    let side = if mv.to.file() > mv.from.file() {
        CastlingSide::Kingside
    } else {
        CastlingSide::Queenside
    };

    if mv.from.rank() as i8 != rank || mv.from.file() != 4 {
        return Err(castling_error(mv, "the king is not on its home square"));
    }
    if king.has_moved {
        return Err(castling_error(mv, "the king has already moved"));
    }
    if !state.castling_rights.has(color, side) {
        return Err(castling_error(mv, "the castling right on that side is gone"));
    }

    let rook_from = Square::new(rank, side.rook_file() as i8)?;
    match board.piece_at(rook_from) {
        Some(r) if r.kind == PieceKind::Rook && r.color == color && !r.has_moved => {}
        _ => return Err(castling_error(mv, "the rook has moved or is missing")),
    }
    if !board.path_clear(mv.from, rook_from) {
        return Err(castling_error(mv, "squares between king and rook are occupied"));
    }

    let step = if side == CastlingSide::Kingside { 1 } else { -1 };
    let rook_to = Square::new(rank, 4 + step)?;
    if in_check(board, color) {
        return Err(castling_error(mv, "the king is in check"));
    }
    if is_square_attacked(board, rook_to, color.other()) {
        return Err(castling_error(mv, "the king would pass through an attacked square"));
    }

    Ok(MoveEffect::Castle {
        side,
        rook_from,
        rook_to,
    })
}

fn pawn_pattern(state: &GameState, mv: Move, pawn: Piece) -> Result<MoveEffect, ChessError> {
    let board = &state.board;
    let color = pawn.color;
    let dir = color.forward();
    let (dr, df) = mv.from.delta_to(mv.to);
    let promotes = mv.to.rank() == color.promotion_rank();
    let landed = if promotes {
        MoveEffect::Promotion
    } else {
        MoveEffect::Normal
    };

    if df == 0 {
        if !board.is_empty_at(mv.to) {
            return Err(violation(mv, "pawns cannot capture straight ahead"));
        }
        if dr == dir {
            return Ok(landed);
        }
        if dr == 2 * dir && mv.from.rank() == color.pawn_start_rank() {
            let passed = Square::new(mv.from.rank() as i8 + dir, mv.from.file() as i8)?;
            if !board.is_empty_at(passed) {
                return Err(violation(mv, "the square in front of the pawn is occupied"));
            }
            return Ok(MoveEffect::DoubleStep { passed });
        }
        return Err(violation(
            mv,
            "pawns advance one square, or two from their starting rank",
        ));
    }

    if df.abs() == 1 && dr == dir {
        if !board.is_empty_at(mv.to) {
            return Ok(landed);
        }
        if state.en_passant_target == Some(mv.to) {
            let captured_at = Square::new(mv.from.rank() as i8, mv.to.file() as i8)?;
            let previous_turn = state.turn_count.checked_sub(1);
            return match board.piece_at(captured_at) {
                Some(victim)
                    if victim.kind == PieceKind::Pawn
                        && victim.color != color
                        && victim.last_double_step_turn.is_some()
                        && victim.last_double_step_turn == previous_turn =>
                {
                    Ok(MoveEffect::EnPassant { captured_at })
                }
                _ => Err(violation(mv, "no pawn to take en passant")),
            };
        }
        return Err(violation(mv, "pawns move diagonally only to capture"));
    }

    Err(violation(mv, "not a pawn move"))
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
