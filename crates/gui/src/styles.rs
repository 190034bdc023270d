//! Styling constants and piece glyphs

use clickchess_core::{Color as PieceColor, PieceKind};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const CAPTURE_SQUARE: Color = Color::from_rgba(0.78, 0.2, 0.2, 0.5); // Red overlay

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 260.0;

/// Unicode glyph for a piece.
pub fn piece_char(color: PieceColor, kind: PieceKind) -> &'static str {
    match (color, kind) {
        (PieceColor::White, PieceKind::King) => "♔",
        (PieceColor::White, PieceKind::Queen) => "♕",
        (PieceColor::White, PieceKind::Rook) => "♖",
        (PieceColor::White, PieceKind::Bishop) => "♗",
        (PieceColor::White, PieceKind::Knight) => "♘",
        (PieceColor::White, PieceKind::Pawn) => "♙",
        (PieceColor::Black, PieceKind::King) => "♚",
        (PieceColor::Black, PieceKind::Queen) => "♛",
        (PieceColor::Black, PieceKind::Rook) => "♜",
        (PieceColor::Black, PieceKind::Bishop) => "♝",
        (PieceColor::Black, PieceKind::Knight) => "♞",
        (PieceColor::Black, PieceKind::Pawn) => "♟",
    }
}
