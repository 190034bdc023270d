use crate::board::Board;
use crate::rules::is_legal;
use crate::types::{MoveHint, Piece, Pos};

/// Every square `piece` standing on `from` can legally reach, in row-major
/// order, each annotated with whether the move would capture. Scans the
/// whole board on every call; nothing is cached and nothing is mutated.
pub fn legal_destinations(board: &Board, piece: Piece, from: Pos) -> Vec<MoveHint> {
    let mut out = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = Pos::new(row, col);
            if to == from {
                continue;
            }
            if is_legal(board, piece, from, to) {
                let capture = board.get(to).unwrap_or_default().is_some();
                out.push(MoveHint { to, capture });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "hints_tests.rs"]
mod hints_tests;
