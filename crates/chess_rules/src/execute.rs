//! Applying a validated move.
//!
//! [`apply_move`] never touches its input: it builds the successor state on
//! a copy, so a caller holding the old state sees either the complete new
//! state or nothing at all.

use crate::board::Board;
use crate::legality::{MoveEffect, ValidatedMove};
use crate::state::{CastlingRights, GameState};
use crate::types::*;

pub fn apply_move(state: &GameState, validated: &ValidatedMove) -> GameState {
    let mv = validated.mv();
    let mover = state.side_to_move;
    let mut next = state.clone();

    relocate(&mut next.board, validated);

    next.en_passant_target = None;
    if let MoveEffect::DoubleStep { passed } = validated.effect() {
        next.en_passant_target = Some(passed);
        if let Some(pawn) = next.board.piece_at_mut(mv.to) {
            pawn.last_double_step_turn = Some(state.turn_count);
        }
    }

    // Castling rights: king moves drop both sides, a rook leaving or being
    // taken on its home corner drops that side.
    if mv.kind == PieceKind::King {
        next.castling_rights.revoke_all(mover);
    }
    if mv.kind == PieceKind::Rook
        && let Some((color, side)) = CastlingRights::corner(mv.from)
        && color == mover
    {
        next.castling_rights.revoke(color, side);
    }
    if let Some(victim) = validated.captured()
        && victim.kind == PieceKind::Rook
        && let Some((color, side)) = CastlingRights::corner(mv.to)
        && color == victim.color
    {
        next.castling_rights.revoke(color, side);
    }

    next.halfmove_clock = if mv.kind == PieceKind::Pawn || validated.is_capture() {
        0
    } else {
        state.halfmove_clock.saturating_add(1)
    };
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.turn_count = next.turn_count.saturating_add(1);
    next.side_to_move = mover.other();
    next
}

/// Move the pieces a validated move moves, nothing else.
///
/// Shared by the executor and by the king-safety simulation, so both see
/// exactly the same resulting placement.
pub(crate) fn relocate(board: &mut Board, validated: &ValidatedMove) {
    let mv = validated.mv();
    match validated.effect() {
        MoveEffect::EnPassant { captured_at } => {
            board.set_piece(captured_at, None);
        }
        MoveEffect::Castle {
            rook_from, rook_to, ..
        } => {
            if let Some(mut rook) = board.take(rook_from) {
                rook.has_moved = true;
                board.set_piece(rook_to, Some(rook));
            }
        }
        _ => {}
    }

    if let Some(mut piece) = board.take(mv.from) {
        piece.has_moved = true;
        if validated.effect() == MoveEffect::Promotion {
            piece.kind = PieceKind::Queen;
        }
        board.set_piece(mv.to, Some(piece));
    }
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod execute_tests;
