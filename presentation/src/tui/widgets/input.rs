//! Input widget: the brand name field, plus the inline message line below it

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use brandcheck_domain::InteractionState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Enter your brand name";
const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
    interaction: &'a InteractionState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, interaction: &'a InteractionState) -> Self {
        Self { state, interaction }
    }

    /// Text spans with a block cursor at `cursor_pos`
    fn text_spans(&self, active: bool) -> Vec<Span<'a>> {
        let text = self.state.input.as_str();
        if text.is_empty() {
            let mut spans = Vec::new();
            if active {
                spans.push(Span::styled(" ", Style::default().bg(Color::Magenta)));
            }
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            return spans;
        }

        if !active {
            return vec![Span::raw(text)];
        }

        let cursor = self.state.cursor_pos.min(text.len());
        let (before, after) = text.split_at(cursor);
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Magenta);

        let mut spans = vec![Span::raw(before)];
        match after.chars().next() {
            Some(ch) => {
                let (under, rest) = after.split_at(ch.len_utf8());
                spans.push(Span::styled(under, cursor_style));
                if !rest.is_empty() {
                    spans.push(Span::raw(rest));
                }
            }
            // Cursor at end of line, show block cursor on a space
            None => spans.push(Span::styled(" ", cursor_style)),
        }
        spans
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.mode == Mode::Input;
        let pending = self.interaction.is_pending();

        let color = if active { Color::Magenta } else { Color::DarkGray };
        let mut spans = vec![Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        spans.extend(self.text_spans(active));

        let action = if pending {
            Span::styled(
                format!(" {} Analyzing ", self.state.spinner()),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(" Enter: Analyze ", Style::default().fg(Color::DarkGray))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Brand name ")
            .title_top(Line::from(action).right_aligned())
            .style(Style::default().fg(color));

        // Keep the cursor visible on narrow terminals
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor = self.state.cursor_pos.min(self.state.input.len());
        let cursor_col = PROMPT.len() + self.state.input[..cursor].chars().count();
        let scroll_x = (cursor_col + 1).saturating_sub(inner_width);

        Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, u16::try_from(scroll_x).unwrap_or(u16::MAX)))
            .render(area, buf);
    }
}

/// Validation or failure message shown under the input
pub struct InlineMessageWidget<'a> {
    interaction: &'a InteractionState,
}

impl<'a> InlineMessageWidget<'a> {
    pub fn new(interaction: &'a InteractionState) -> Self {
        Self { interaction }
    }
}

impl<'a> Widget for InlineMessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(message) = self.interaction.inline_message() {
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(message, Style::default().fg(Color::Red)),
            ]))
            .render(area, buf);
        }
    }
}
