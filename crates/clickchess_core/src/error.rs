use std::fmt;

use crate::types::{PieceKind, Pos};

/// Errors surfaced by the board accessors and the game entry points.
///
/// Rejected moves are not errors: an illegal destination simply deselects
/// the piece (see [`crate::Game::activate_square`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate fell outside the 8x8 grid.
    OutOfRange(Pos),
    /// A promotion was resolved with a kind a pawn cannot become.
    InvalidPromotionChoice(PieceKind),
    /// `resolve_promotion` was called while no promotion was pending.
    NoPromotionPending,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfRange(pos) => {
                write!(f, "square ({}, {}) is outside the board", pos.row, pos.col)
            }
            ChessError::InvalidPromotionChoice(kind) => {
                write!(f, "a pawn cannot promote to a {:?}", kind)
            }
            ChessError::NoPromotionPending => write!(f, "no promotion is pending"),
        }
    }
}

impl std::error::Error for ChessError {}
