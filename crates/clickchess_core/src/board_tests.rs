use super::*;

#[test]
fn test_start_layout() {
    let board = Board::start();

    // Black back rank on row 0, White's on row 7
    assert_eq!(
        board.get(Pos::new(0, 0)).unwrap(),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Rook
        })
    );
    assert_eq!(
        board.get(Pos::new(0, 3)).unwrap(),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen
        })
    );
    assert_eq!(
        board.get(Pos::new(7, 4)).unwrap(),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );

    // Full pawn ranks on rows 1 and 6
    for col in 0..8 {
        assert_eq!(
            board.get(Pos::new(1, col)).unwrap(),
            Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn
            })
        );
        assert_eq!(
            board.get(Pos::new(6, col)).unwrap(),
            Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn
            })
        );
    }

    // Middle rows empty
    for row in 2..6 {
        for col in 0..8 {
            assert_eq!(board.get(Pos::new(row, col)).unwrap(), None);
        }
    }
}

#[test]
fn test_get_set_round_trip() {
    let mut board = Board::empty();
    let knight = Piece {
        color: Color::White,
        kind: PieceKind::Knight,
    };

    board.set(Pos::new(4, 4), Some(knight)).unwrap();
    assert_eq!(board.get(Pos::new(4, 4)).unwrap(), Some(knight));

    board.set(Pos::new(4, 4), None).unwrap();
    assert_eq!(board.get(Pos::new(4, 4)).unwrap(), None);
}

#[test]
fn test_out_of_range_coordinates() {
    let mut board = Board::empty();
    let pawn = Piece {
        color: Color::Black,
        kind: PieceKind::Pawn,
    };

    for pos in [
        Pos::new(8, 0),
        Pos::new(0, 8),
        Pos::new(-1, 3),
        Pos::new(3, -1),
    ] {
        assert_eq!(board.get(pos), Err(ChessError::OutOfRange(pos)));
        assert_eq!(board.set(pos, Some(pawn)), Err(ChessError::OutOfRange(pos)));
    }
}
