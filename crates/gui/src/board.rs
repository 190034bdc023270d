//! Chess board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use clickchess_core::{Game, Pos};
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Pos),
}

/// Renders the chess board
pub struct BoardView<'a> {
    game: &'a Game,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// Create the board view element. Row 0 (Black's home rank) renders at
    /// the top, matching the board's own orientation.
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for board_row in 0..8 {
            let mut squares_row = row![].spacing(0);
            for board_col in 0..8 {
                squares_row = squares_row.push(self.render_square(Pos::new(board_row, board_col)));
            }
            board_column = board_column.push(squares_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, pos: Pos) -> Element<'a, BoardMessage> {
        let is_light = (pos.row + pos.col) % 2 == 0;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        // Highlight selected square
        if self.game.selected() == Some(pos) {
            bg_color = styles::SELECTED_SQUARE;
        }

        // Highlight last move
        if let Some(last) = self.game.last_move() {
            if pos == last.from || pos == last.to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        // Hints for the current selection: a capture tints the whole
        // square, a quiet destination gets a dot.
        let hint = self.game.hints().iter().find(|h| h.to == pos);
        if matches!(hint, Some(h) if h.capture) {
            bg_color = blend_colors(bg_color, styles::CAPTURE_SQUARE);
        }

        // Get piece on this square
        let piece_glyph = self
            .game
            .board()
            .get(pos)
            .ok()
            .flatten()
            .map(|p| styles::piece_char(p.color, p.kind));

        let content: Element<'a, BoardMessage> = if let Some(glyph) = piece_glyph {
            text(glyph).size(SQUARE_SIZE * 0.75).center().into()
        } else if hint.is_some() {
            // Show dot for quiet legal moves
            text("●")
                .size(SQUARE_SIZE * 0.3)
                .color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))
                .center()
                .into()
        } else {
            text("").into()
        };

        button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(pos))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
