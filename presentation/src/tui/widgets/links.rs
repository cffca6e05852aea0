//! Links overlay: about the tool, where it points, and the keys

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub const SITE_NAME: &str = "Check The Name";
pub const SITE_URL: &str = "https://checkthename.com";

pub struct LinksWidget<'a> {
    state: &'a TuiState,
}

impl<'a> LinksWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for LinksWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let link = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED);

        let service = if self.state.service_url.is_empty() {
            "(not configured)"
        } else {
            self.state.service_url.as_str()
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{} - Brand Name Analysis Tool", SITE_NAME),
                heading,
            )),
            Line::from(""),
            Line::from(vec![Span::raw("  Website   "), Span::styled(SITE_URL, link)]),
            Line::from(vec![Span::raw("  Service   "), Span::styled(service, link)]),
            Line::from(""),
            Line::from(Span::styled("Keys", heading)),
            Line::from("  Enter            Analyze the name"),
            Line::from("  ↑/↓ PgUp/PgDn    Scroll results"),
            Line::from("  Ctrl+U           Clear input"),
            Line::from("  F1 or ?          Show this overlay"),
            Line::from("  Ctrl+C           Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Links ")
            .style(Style::default().fg(Color::Cyan));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_rows;

    #[test]
    fn test_lists_site_and_service() {
        let mut state = TuiState::new();
        state.service_url = "http://localhost:5000".into();

        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        LinksWidget::new(&state).render(area, &mut buf);

        let text = buffer_rows(&buf).join("\n");
        assert!(text.contains(SITE_URL));
        assert!(text.contains("http://localhost:5000"));
        assert!(text.contains("Press Esc to close"));
    }
}
