#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Board coordinate. Row 0 is the top rank (Black's home in the initial
/// layout), column 0 the leftmost file. Fields are signed so candidate
/// offsets can be formed off the grid and range-checked afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Pos { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
}

/// An applied move. `promotion` is filled in once the replacement kind for
/// a promoting pawn has been chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
}

/// One legal destination for a selected piece, used to drive move-hint
/// rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveHint {
    pub to: Pos,
    pub capture: bool,
}
