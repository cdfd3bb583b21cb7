use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// The joke itself: setup and punchline centered over the current
/// background color. Renders a fallback card when the deck is empty.
pub struct JokeCardWidget;

impl JokeCardWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let background = app.palette.color(app.color_index);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ])
            .horizontal_margin(6)
            .split(area);

        let text_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        match app.deck.current() {
            Some(joke) => {
                frame.render_widget(
                    Paragraph::new(joke.setup.as_str())
                        .style(text_style)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    chunks[1],
                );
                frame.render_widget(
                    Paragraph::new(joke.punchline.as_str())
                        .style(Style::default().fg(Color::White))
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    chunks[2],
                );
            }
            None => {
                frame.render_widget(
                    Paragraph::new("No jokes loaded")
                        .style(text_style)
                        .alignment(Alignment::Center),
                    chunks[1],
                );
                frame.render_widget(
                    Paragraph::new("Check the endpoint in ~/.config/dadjokes/config.toml")
                        .style(Style::default().fg(Color::White))
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    chunks[2],
                );
            }
        }
    }
}
