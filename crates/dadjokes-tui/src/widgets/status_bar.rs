use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const BAR_BG: Color = Color::Rgb(0x20, 0x20, 0x20);

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = match app.deck.current() {
            Some(joke) => format!(
                " Dad Jokes | {}/{} | {}",
                app.deck.position() + 1,
                app.deck.len(),
                joke.category
            ),
            None => " Dad Jokes | no jokes".to_string(),
        };

        let help_hint = " \u{2190}/\u{2192}:swipe drag:waves q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Color::White).bg(BAR_BG),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(BAR_BG)),
            Span::styled(
                help_hint,
                Style::default().fg(Color::DarkGray).bg(BAR_BG),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
