//! The single error type of the rules engine.
//!
//! An illegal move is an expected, recoverable outcome: every variant here
//! is returned to the caller, the authoritative state is never touched when
//! one is produced, and callers decide how to present it.

use thiserror::Error;

use crate::square::Square;
use crate::types::{Color, Move, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The text does not have the shape `<kind>-<square>-<square>`.
    #[error("malformed move notation {0:?}, expected <kind>-<square>-<square>")]
    MalformedMoveNotation(String),

    /// A computed coordinate fell outside the 8×8 grid.
    #[error("square (rank {rank}, file {file}) is off the board")]
    OutOfRangeSquare { rank: i8, file: i8 },

    /// The source square does not hold a piece of the stated kind.
    #[error("there is no {kind} on {square}")]
    NoPieceAtSource { square: Square, kind: PieceKind },

    /// The piece on the source square belongs to the side not on move.
    #[error("the piece on {square} does not belong to {to_move}, who is to move")]
    WrongTurnOwnership { square: Square, to_move: Color },

    #[error("{0} is occupied by a piece of the moving side")]
    FriendlyCapture(Square),

    /// The move breaks the piece's movement pattern or its path is blocked.
    #[error("{mv} is not a legal {kind} move: {reason}", kind = .mv.kind)]
    PseudoLegalityViolation { mv: Move, reason: &'static str },

    #[error("{mv} would leave the {color} king in check")]
    KingExposedAfterMove { mv: Move, color: Color },

    #[error("cannot castle with {mv}: {reason}")]
    CastlingPreconditionViolation { mv: Move, reason: &'static str },

    #[error("unknown piece kind {0:?}")]
    UnknownPieceKind(String),

    /// A move was submitted while the session is showing an older position.
    #[error("viewing position {cursor} of {latest}; return to the latest position before moving")]
    NotAtLatestState { cursor: usize, latest: usize },

    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// An engine was asked for a move in a position without one.
    #[error("no legal moves available")]
    NoLegalMoves,
}
