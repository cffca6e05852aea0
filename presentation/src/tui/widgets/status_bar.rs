//! Status bar widget: mode indicator + interaction status + key hints or flash

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use brandcheck_domain::{InteractionState, Status};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
    interaction: &'a InteractionState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState, interaction: &'a InteractionState) -> Self {
        Self { state, interaction }
    }

    fn status_color(status: Status) -> Color {
        match status {
            Status::Idle => Color::Gray,
            Status::Pending(_) => Color::Yellow,
            Status::Succeeded => Color::Green,
            Status::Failed => Color::Red,
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let status = self.interaction.status();

        let left = Line::from(vec![
            Span::styled(
                format!(" {} ", mode.indicator()),
                Style::default()
                    .fg(Color::Black)
                    .bg(mode.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", status.label()),
                Style::default()
                    .fg(Self::status_color(status))
                    .bg(Color::DarkGray),
            ),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        // Flash message or key hints on the right
        let right_text = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else {
            match mode {
                Mode::Input => "Enter:analyze  ↑↓/PgUp/PgDn:scroll  F1:links  Ctrl+C:quit".into(),
                Mode::Links => "Esc:close  Ctrl+C:quit".into(),
            }
        };

        let right_width = Line::from(right_text.as_str()).width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_rows;

    fn draw(state: &TuiState, interaction: &InteractionState) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state, interaction).render(area, &mut buf);
        buffer_rows(&buf).remove(0)
    }

    #[test]
    fn test_mode_status_and_hints() {
        let row = draw(&TuiState::new(), &InteractionState::new());
        assert!(row.starts_with(" INPUT "));
        assert!(row.contains("idle"));
        assert!(row.contains("F1:links"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("Analysis complete");
        let row = draw(&state, &InteractionState::new());
        assert!(row.contains("Analysis complete"));
        assert!(!row.contains("F1:links"));
    }
}
