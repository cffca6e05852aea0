//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (4) ─────────────────────────────────────┐
//! ├── Input (3) ──────────────────────────────────────┤
//! │   inline message (1)                              │
//! ├── Analysis Results (flex) ────────────────────────┤
//! └── StatusBar (1) ──────────────────────────────────┘

pub mod analysis;
pub mod header;
pub mod input;
pub mod links;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub input: Rect,
    pub message: Rect,
    pub analysis: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            input: vertical[1],
            message: vertical[2],
            analysis: vertical[3],
            status_bar: vertical[4],
        }
    }

    /// Centered rectangle for overlays, sized as a percentage of `area`
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Collect a rendered buffer into one string per row (widget tests)
#[cfg(test)]
pub(crate) fn buffer_rows(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.input.y, 4);
        assert_eq!(layout.message.y, 7);
        assert_eq!(layout.analysis.y, 8);
        assert_eq!(layout.analysis.height, 21);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_overlay_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.height, 20);
        assert!(overlay.x > 0 && overlay.y > 0);
    }
}
