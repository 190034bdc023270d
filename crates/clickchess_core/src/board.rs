use crate::error::ChessError;
use crate::types::{Color, Piece, PieceKind, Pos};

/// 8x8 grid of squares, stored row-major with row 0 at the top (Black's
/// home rank in the initial layout). A square is either empty or holds
/// exactly one piece; the board never enforces piece counts.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Board with every square empty.
    pub fn empty() -> Self {
        Board { squares: [None; 64] }
    }

    /// Standard initial layout: pawn ranks on rows 1 (Black) and 6 (White),
    /// back ranks R N B Q K B N R on rows 0 and 7.
    pub fn start() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.squares[8 + col] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            b.squares[48 + col] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            b.squares[col] = Some(Piece {
                color: Color::Black,
                kind,
            });
            b.squares[56 + col] = Some(Piece {
                color: Color::White,
                kind,
            });
        }
        b
    }

    fn index(pos: Pos) -> Result<usize, ChessError> {
        if pos.in_bounds() {
            Ok(pos.row as usize * 8 + pos.col as usize)
        } else {
            Err(ChessError::OutOfRange(pos))
        }
    }

    /// Content of the square at `pos`.
    pub fn get(&self, pos: Pos) -> Result<Option<Piece>, ChessError> {
        Ok(self.squares[Self::index(pos)?])
    }

    /// Replace the content of the square at `pos` wholesale.
    pub fn set(&mut self, pos: Pos, content: Option<Piece>) -> Result<(), ChessError> {
        self.squares[Self::index(pos)?] = content;
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
