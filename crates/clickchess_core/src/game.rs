//! Turn, selection, and promotion state driven by square activations.

use crate::board::Board;
use crate::error::ChessError;
use crate::hints::legal_destinations;
use crate::rules::is_legal;
use crate::types::{Color, Move, MoveHint, Piece, PieceKind, Pos};

/// Where the interaction protocol currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SelectionState {
    /// Nothing selected; the next activation may select a piece.
    Idle,
    /// The active player selected the piece on this square.
    PieceSelected(Pos),
    /// A pawn reached the far rank and sits on `square` until its
    /// replacement kind arrives via [`Game::resolve_promotion`].
    PromotionPending { square: Pos, color: Color },
}

/// The whole mutable game: board, whose turn it is, and the selection /
/// promotion protocol. All mutation funnels through
/// [`Game::activate_square`] and [`Game::resolve_promotion`]; everything
/// else is a read accessor for drawing.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    state: SelectionState,
    /// Legal destinations for the current selection, refreshed whenever
    /// the selection changes.
    hints: Vec<MoveHint>,
    last_move: Option<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game: standard layout, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::start(), Color::White)
    }

    /// Game over an arbitrary position, e.g. a study or a test setup.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            state: SelectionState::Idle,
            hints: Vec::new(),
            last_move: None,
        }
    }

    /// Throw the current game away and start over.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Square of the currently selected piece, if any.
    pub fn selected(&self) -> Option<Pos> {
        match self.state {
            SelectionState::PieceSelected(square) => Some(square),
            _ => None,
        }
    }

    /// Square and color of the pawn awaiting promotion, if any.
    pub fn pending_promotion(&self) -> Option<(Pos, Color)> {
        match self.state {
            SelectionState::PromotionPending { square, color } => Some((square, color)),
            _ => None,
        }
    }

    /// Legal destinations for the current selection; empty when nothing
    /// is selected.
    pub fn hints(&self) -> &[MoveHint] {
        &self.hints
    }

    /// The most recently applied move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Feed one activated (clicked) square into the protocol.
    ///
    /// Idle: activating one of the active player's pieces selects it, any
    /// other square is a no-op. With a piece selected: a legal target
    /// applies the move, any other target deselects without erroring.
    /// While a promotion is pending, activations are ignored until the
    /// choice is resolved.
    pub fn activate_square(&mut self, pos: Pos) -> Result<(), ChessError> {
        match self.state {
            SelectionState::Idle => self.try_select(pos),
            SelectionState::PieceSelected(src) => self.try_move(src, pos),
            SelectionState::PromotionPending { .. } => Ok(()),
        }
    }

    fn try_select(&mut self, pos: Pos) -> Result<(), ChessError> {
        if let Some(piece) = self.board.get(pos)?
            && piece.color == self.turn
        {
            self.state = SelectionState::PieceSelected(pos);
            self.hints = legal_destinations(&self.board, piece, pos);
        }
        Ok(())
    }

    fn try_move(&mut self, src: Pos, dest: Pos) -> Result<(), ChessError> {
        let target = self.board.get(dest)?;
        // Whatever happens next, the selection is spent.
        self.state = SelectionState::Idle;
        self.hints.clear();

        let Some(piece) = self.board.get(src)? else {
            return Ok(());
        };
        if !is_legal(&self.board, piece, src, dest) {
            return Ok(());
        }

        self.board.set(dest, Some(piece))?;
        self.board.set(src, None)?;
        self.last_move = Some(Move {
            from: src,
            to: dest,
            capture: target.is_some(),
            promotion: None,
        });

        let far_row = match piece.color {
            Color::White => 0,
            Color::Black => 7,
        };
        if piece.kind == PieceKind::Pawn && dest.row == far_row {
            // The pawn already sits on `dest`; the turn does not pass
            // until the replacement kind arrives.
            self.state = SelectionState::PromotionPending {
                square: dest,
                color: piece.color,
            };
        } else {
            self.turn = self.turn.other();
        }
        Ok(())
    }

    /// Replace the pawn awaiting promotion with the chosen kind, then pass
    /// the turn. Only Queen, Rook, Bishop, and Knight are accepted; on an
    /// invalid kind the choice stays pending so the caller can retry.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<(), ChessError> {
        let SelectionState::PromotionPending { square, color } = self.state else {
            return Err(ChessError::NoPromotionPending);
        };
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessError::InvalidPromotionChoice(kind));
        }
        self.board.set(square, Some(Piece { color, kind }))?;
        if let Some(last) = self.last_move.as_mut() {
            last.promotion = Some(kind);
        }
        self.state = SelectionState::Idle;
        self.turn = self.turn.other();
        Ok(())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
