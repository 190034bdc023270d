//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::styles::{self, PANEL_WIDTH};

use clickchess_core::{Color, Game, PieceKind};
use iced::widget::{button, column, container, horizontal_rule, row, text, vertical_space};
use iced::{Element, Length, Task, Theme};

/// Main application state
pub struct ChessApp {
    /// The game being played
    game: Game,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Promotion chooser
    PromotionChosen(PieceKind),

    // Game controls
    NewGame,
}

impl ChessApp {
    pub fn new() -> (Self, Task<Message>) {
        (Self { game: Game::new() }, Task::none())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(pos)) => {
                // The board view only produces on-grid squares, and the
                // game ignores clicks while a promotion choice is pending.
                let _ = self.game.activate_square(pos);
                Task::none()
            }

            Message::PromotionChosen(kind) => {
                // The chooser only offers the four accepted kinds.
                let _ = self.game.resolve_promotion(kind);
                Task::none()
            }

            Message::NewGame => {
                self.game.reset();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game).view().map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the side panel: controls, status, and (while a promotion is
    /// pending) the mandatory piece chooser.
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let status = match self.game.pending_promotion() {
            Some((_, color)) => format!("{} promotes: pick a piece", side_name(color)),
            None => format!("{} to move", side_name(self.game.turn())),
        };

        let mut panel = column![
            new_game_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status).size(16),
        ]
        .spacing(5);

        if let Some((_, color)) = self.game.pending_promotion() {
            panel = panel
                .push(vertical_space().height(10))
                .push(promotion_chooser(color));
        }

        panel.into()
    }
}

/// Row of the four kinds a pawn may become. The game accepts no further
/// square clicks until one is picked.
fn promotion_chooser(color: Color) -> Element<'static, Message> {
    let kinds = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    let mut choices = row![].spacing(5);
    for kind in kinds {
        choices = choices.push(
            button(text(styles::piece_char(color, kind)).size(28).center())
                .on_press(Message::PromotionChosen(kind))
                .style(button::primary),
        );
    }
    choices.into()
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
