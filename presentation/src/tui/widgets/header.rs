//! Header widget: title, tagline and the service in use

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "Check Your Brand Name";
pub const TAGLINE: &str = "Analyze the cultural significance and potential implications of your brand name before committing to it.";

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        ];

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" brandcheck ")
            .style(Style::default().fg(Color::White));
        if !self.state.service_url.is_empty() {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", self.state.service_url),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_rows;

    #[test]
    fn test_renders_title_and_service() {
        let mut state = TuiState::new();
        state.service_url = "http://localhost:5000".into();

        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&state).render(area, &mut buf);

        let rows = buffer_rows(&buf);
        assert!(rows[1].contains(TITLE));
        assert!(rows[2].contains("cultural significance"));
        assert!(rows[3].contains("http://localhost:5000"));
    }
}
