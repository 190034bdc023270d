use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Pos};

/// Whether moving `piece` from `from` to `to` is geometrically and
/// tactically legal: movement shape, path clearance, and capture rules.
/// King safety is never considered, so a move that leaves or puts the
/// mover's own king in check is still accepted.
///
/// Structurally impossible requests (off-grid squares, `from == to`,
/// landing on a same-color piece) are plain `false`, never errors.
pub fn is_legal(board: &Board, piece: Piece, from: Pos, to: Pos) -> bool {
    if from == to || !from.in_bounds() || !to.in_bounds() {
        return false;
    }
    // Own pieces can never be captured, whatever the movement shape says.
    if let Some(target) = occupant(board, to)
        && target.color == piece.color
    {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_legal(board, piece.color, from, to),
        PieceKind::Knight => knight_legal(from, to),
        PieceKind::Bishop => bishop_legal(board, from, to),
        PieceKind::Rook => rook_legal(board, from, to),
        // A queen moves like a rook or a bishop from the same squares.
        PieceKind::Queen => rook_legal(board, from, to) || bishop_legal(board, from, to),
        PieceKind::King => king_legal(from, to),
    }
}

/// Occupant of a square already known to be on the grid.
fn occupant(board: &Board, pos: Pos) -> Option<Piece> {
    board.get(pos).unwrap_or_default()
}

fn pawn_legal(board: &Board, color: Color, from: Pos, to: Pos) -> bool {
    // White pawns advance toward row 0, black pawns toward row 7.
    let dir: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    let start_row: i8 = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    if from.col == to.col && occupant(board, to).is_none() {
        if to.row - from.row == dir {
            return true;
        }
        // Double step from the starting row; the skipped square must be
        // empty as well.
        to.row - from.row == 2 * dir
            && from.row == start_row
            && occupant(board, Pos::new(from.row + dir, from.col)).is_none()
    } else {
        // A diagonal step is only ever a capture.
        (from.col - to.col).abs() == 1
            && to.row - from.row == dir
            && occupant(board, to).is_some()
    }
}

fn knight_legal(from: Pos, to: Pos) -> bool {
    let dr = (from.row - to.row).abs();
    let dc = (from.col - to.col).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn rook_legal(board: &Board, from: Pos, to: Pos) -> bool {
    (from.row == to.row || from.col == to.col) && path_clear(board, from, to)
}

fn bishop_legal(board: &Board, from: Pos, to: Pos) -> bool {
    (from.row - to.row).abs() == (from.col - to.col).abs() && path_clear(board, from, to)
}

fn king_legal(from: Pos, to: Pos) -> bool {
    (from.row - to.row).abs().max((from.col - to.col).abs()) == 1
}

/// Every square strictly between `from` and `to` must be empty. Callers
/// guarantee the two squares share a rank, file, or diagonal.
fn path_clear(board: &Board, from: Pos, to: Pos) -> bool {
    let dr = (to.row - from.row).signum();
    let dc = (to.col - from.col).signum();
    let mut cur = Pos::new(from.row + dr, from.col + dc);
    while cur != to {
        if occupant(board, cur).is_some() {
            return false;
        }
        cur = Pos::new(cur.row + dr, cur.col + dc);
    }
    true
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
