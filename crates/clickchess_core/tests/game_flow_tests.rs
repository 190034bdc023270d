//! End-to-end tests for the click-driven interaction protocol:
//! select, move, turn alternation, and pawn promotion.

use clickchess_core::{Board, Color, Game, Piece, PieceKind, Pos};

fn piece(color: Color, kind: PieceKind) -> Piece {
    Piece { color, kind }
}

// =============================================================================
// Turn alternation
// =============================================================================

#[test]
fn test_opening_moves_alternate_turns() {
    let mut game = Game::new();
    assert_eq!(game.turn(), Color::White);

    // White: two-square pawn opening
    game.activate_square(Pos::new(6, 4)).unwrap();
    game.activate_square(Pos::new(4, 4)).unwrap();
    assert_eq!(
        game.board().get(Pos::new(4, 4)).unwrap(),
        Some(piece(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.board().get(Pos::new(6, 4)).unwrap(), None);
    assert_eq!(game.turn(), Color::Black);

    // Black: one-square pawn reply
    game.activate_square(Pos::new(1, 3)).unwrap();
    game.activate_square(Pos::new(2, 3)).unwrap();
    assert_eq!(
        game.board().get(Pos::new(2, 3)).unwrap(),
        Some(piece(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_rejected_move_does_not_pass_the_turn() {
    let mut game = Game::new();

    // White aims a pawn sideways: rejected, still White's turn
    game.activate_square(Pos::new(6, 0)).unwrap();
    game.activate_square(Pos::new(5, 4)).unwrap();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.selected(), None);

    // The rejected attempt left the board playable
    game.activate_square(Pos::new(6, 0)).unwrap();
    game.activate_square(Pos::new(5, 0)).unwrap();
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_opponent_cannot_move_out_of_turn() {
    let mut game = Game::new();

    // Black tries to act first; nothing selects, nothing moves
    game.activate_square(Pos::new(1, 4)).unwrap();
    game.activate_square(Pos::new(3, 4)).unwrap();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(
        game.board().get(Pos::new(1, 4)).unwrap(),
        Some(piece(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(game.board().get(Pos::new(3, 4)).unwrap(), None);
}

// =============================================================================
// Captures and hints
// =============================================================================

#[test]
fn test_knight_capture_over_own_pawns() {
    let mut game = Game::new();

    // March the white b1-knight to a black pawn in three moves, with a
    // black knight shuffling in between.
    for (from, to) in [
        ((7, 1), (5, 2)), // White
        ((0, 1), (2, 2)), // Black
        ((5, 2), (3, 3)), // White
        ((2, 2), (0, 1)), // Black
    ] {
        game.activate_square(Pos::new(from.0, from.1)).unwrap();
        game.activate_square(Pos::new(to.0, to.1)).unwrap();
    }

    // White knight on (3,3) now sees the pawn on (1,2) as a capture hint
    game.activate_square(Pos::new(3, 3)).unwrap();
    let capture_hints: Vec<_> = game.hints().iter().filter(|h| h.capture).collect();
    assert!(capture_hints.iter().any(|h| h.to == Pos::new(1, 2)));

    game.activate_square(Pos::new(1, 2)).unwrap();
    assert_eq!(
        game.board().get(Pos::new(1, 2)).unwrap(),
        Some(piece(Color::White, PieceKind::Knight))
    );
    assert_eq!(game.turn(), Color::Black);
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_promotion_end_to_end() {
    let mut board = Board::empty();
    board
        .set(Pos::new(1, 3), Some(piece(Color::White, PieceKind::Pawn)))
        .unwrap();
    let mut game = Game::with_board(board, Color::White);

    game.activate_square(Pos::new(1, 3)).unwrap();
    game.activate_square(Pos::new(0, 3)).unwrap();

    // The pawn already sits on the far rank while the choice is pending,
    // and the turn has not passed yet.
    assert_eq!(game.pending_promotion(), Some((Pos::new(0, 3), Color::White)));
    assert_eq!(
        game.board().get(Pos::new(0, 3)).unwrap(),
        Some(piece(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.turn(), Color::White);

    game.resolve_promotion(PieceKind::Rook).unwrap();
    assert_eq!(
        game.board().get(Pos::new(0, 3)).unwrap(),
        Some(piece(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.pending_promotion(), None);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_black_promotes_on_row_seven() {
    let mut board = Board::empty();
    board
        .set(Pos::new(6, 5), Some(piece(Color::Black, PieceKind::Pawn)))
        .unwrap();
    let mut game = Game::with_board(board, Color::Black);

    game.activate_square(Pos::new(6, 5)).unwrap();
    game.activate_square(Pos::new(7, 5)).unwrap();
    assert_eq!(game.pending_promotion(), Some((Pos::new(7, 5), Color::Black)));

    game.resolve_promotion(PieceKind::Knight).unwrap();
    assert_eq!(
        game.board().get(Pos::new(7, 5)).unwrap(),
        Some(piece(Color::Black, PieceKind::Knight))
    );
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_promotion_records_chosen_kind_on_last_move() {
    let mut board = Board::empty();
    board
        .set(Pos::new(1, 0), Some(piece(Color::White, PieceKind::Pawn)))
        .unwrap();
    board
        .set(Pos::new(0, 1), Some(piece(Color::Black, PieceKind::Rook)))
        .unwrap();
    let mut game = Game::with_board(board, Color::White);

    // Promote by capturing diagonally
    game.activate_square(Pos::new(1, 0)).unwrap();
    game.activate_square(Pos::new(0, 1)).unwrap();
    game.resolve_promotion(PieceKind::Queen).unwrap();

    let last = game.last_move().unwrap();
    assert_eq!(last.from, Pos::new(1, 0));
    assert_eq!(last.to, Pos::new(0, 1));
    assert!(last.capture);
    assert_eq!(last.promotion, Some(PieceKind::Queen));
}
