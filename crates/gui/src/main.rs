//! clickchess GUI
//!
//! Point-and-click front end for the rules core:
//! - Renders the board and pieces
//! - Forwards clicked squares to the game
//! - Shows move hints for the current selection
//! - Solicits the mandatory promotion choice

mod app;
mod board;
mod styles;

use app::ChessApp;
use iced::application;

fn main() -> iced::Result {
    application("clickchess", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((880.0, 640.0))
        .run_with(ChessApp::new)
}
