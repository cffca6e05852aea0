//! Analysis Results widget: the rendered markdown answer

use crate::layout::{LayoutLine, Segment};
use crate::tui::state::TuiState;
use brandcheck_domain::{InteractionState, Status};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct AnalysisWidget<'a> {
    state: &'a TuiState,
    interaction: &'a InteractionState,
}

impl<'a> AnalysisWidget<'a> {
    pub fn new(state: &'a TuiState, interaction: &'a InteractionState) -> Self {
        Self { state, interaction }
    }

    fn body(&self) -> Text<'a> {
        let hint = |text: &'static str| {
            Text::from(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )))
        };

        match self.interaction.status() {
            Status::Pending(_) => hint("Analyzing..."),
            Status::Failed => hint("No results. See the error above."),
            Status::Idle => hint("Type a brand name and press Enter to analyze it."),
            Status::Succeeded if self.state.analysis.is_empty() => {
                hint("The service returned an empty analysis.")
            }
            Status::Succeeded => Text::from(
                self.state
                    .analysis
                    .iter()
                    .map(to_line)
                    .collect::<Vec<_>>(),
            ),
        }
    }
}

/// Rows `lines` occupy once wrapped to `width` columns
pub fn wrapped_rows(lines: &[LayoutLine], width: u16) -> u16 {
    let text = Text::from(lines.iter().map(to_line).collect::<Vec<_>>());
    // Same wrapper the widget renders with
    let rows = Paragraph::new(text).wrap(Wrap { trim: false }).line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Measure the analysis against the pane it is about to be drawn in
pub fn fit_viewport(state: &mut TuiState, area: Rect) {
    // Borders take one column/row on each side
    let rows = wrapped_rows(&state.analysis, area.width.saturating_sub(2));
    state.set_analysis_viewport(rows, area.height.saturating_sub(2));
}

fn to_line(line: &LayoutLine) -> Line<'_> {
    Line::from(
        line.segments
            .iter()
            .map(|segment| Span::styled(segment.text.as_str(), segment_style(segment)))
            .collect::<Vec<_>>(),
    )
}

fn segment_style(segment: &Segment) -> Style {
    let flags = segment.style;
    let mut style = Style::default();
    if flags.heading {
        style = style.fg(Color::Cyan);
    }
    if flags.code {
        style = style.fg(Color::Yellow);
    }
    if flags.muted {
        style = style.fg(Color::DarkGray);
    }
    if flags.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if flags.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if flags.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    style
}

impl<'a> Widget for AnalysisWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Analysis Results ")
            .style(Style::default().fg(Color::White));

        if self.state.scroll_offset > 0 {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" ↑ {} ", self.state.scroll_offset),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        Paragraph::new(self.body())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll_offset, 0))
            .render(area, buf);
    }
}
