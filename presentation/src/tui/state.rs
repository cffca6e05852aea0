//! TUI view state
//!
//! Everything the TUI renders that is not interaction state: the edit
//! buffer and cursor, scroll position, overlay mode and transient
//! messages. [`InteractionState`] stays owned by the controller.
//!
//! [`InteractionState`]: brandcheck_domain::InteractionState

use super::mode::Mode;
use crate::layout::LayoutLine;
use std::time::{Duration, Instant};

/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL: u16 = 10;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// View state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    // -- Mode --
    pub mode: Mode,

    // -- Input buffer --
    pub input: String,
    /// Byte offset into `input`, always on a char boundary
    pub cursor_pos: usize,

    // -- Results pane --
    /// Laid-out lines of the current analysis
    pub analysis: Vec<LayoutLine>,
    pub scroll_offset: u16,
    /// Wrapped rows of `analysis` at the last measured pane width
    pub analysis_rows: u16,
    /// Rows the results pane shows; 0 until first measured
    pub analysis_visible: u16,

    // -- Chrome --
    /// Base URL shown in the header and links overlay
    pub service_url: String,
    pub flash_message: Option<(String, Instant)>,
    pub spinner_frame: usize,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    // -- Results --

    pub fn set_analysis(&mut self, lines: Vec<LayoutLine>) {
        self.analysis = lines;
        self.scroll_offset = 0;
    }

    pub fn clear_analysis(&mut self) {
        self.analysis.clear();
        self.scroll_offset = 0;
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll towards the end; stops once the last row is at the bottom
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_scroll());
    }

    /// Record the results pane geometry (called before each draw)
    pub fn set_analysis_viewport(&mut self, rows: u16, visible: u16) {
        self.analysis_rows = rows;
        self.analysis_visible = visible;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        if self.analysis_visible == 0 {
            // Not measured yet, one row per laid-out line
            return u16::try_from(self.analysis.len().saturating_sub(1)).unwrap_or(u16::MAX);
        }
        self.analysis_rows.saturating_sub(self.analysis_visible)
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    // -- Spinner --

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use brandcheck_domain::render;

    #[test]
    fn test_input_editing() {
        let mut state = TuiState::new();
        for c in "Nike".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input, "Nike");
        assert_eq!(state.cursor_pos, 4);

        state.cursor_left();
        state.delete_char();
        assert_eq!(state.input, "Nie");
        assert_eq!(state.cursor_pos, 2);

        state.cursor_home();
        state.delete_forward();
        assert_eq!(state.input, "ie");

        state.cursor_end();
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut state = TuiState::new();
        state.insert_char('é');
        state.insert_char('x');
        state.cursor_left();
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);
        state.cursor_right();
        assert_eq!(state.cursor_pos, 'é'.len_utf8());
        state.delete_char();
        assert_eq!(state.input, "x");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_edit_at_bounds_is_noop() {
        let mut state = TuiState::new();
        state.delete_char();
        state.delete_forward();
        state.cursor_left();
        state.cursor_right();
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = TuiState::new();
        state.scroll_down(5);
        assert_eq!(state.scroll_offset, 0);

        state.set_analysis(layout(&render("a\n\nb\n\nc")));
        state.scroll_down(PAGE_SCROLL);
        assert_eq!(state.scroll_offset, 4);
        state.scroll_up(1);
        assert_eq!(state.scroll_offset, 3);
        state.scroll_up(PAGE_SCROLL);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_is_clamped_to_wrapped_rows() {
        let mut state = TuiState::new();
        state.set_analysis(layout(&render("a\n\nb\n\nc")));
        // 5 lines wrapping to 20 rows in a 6-row pane
        state.set_analysis_viewport(20, 6);
        state.scroll_down(PAGE_SCROLL);
        state.scroll_down(PAGE_SCROLL);
        assert_eq!(state.scroll_offset, 14);

        // A wider terminal needs fewer rows; the offset follows
        state.set_analysis_viewport(8, 6);
        assert_eq!(state.scroll_offset, 2);

        // Everything fits: no scrolling at all
        state.set_analysis_viewport(4, 6);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down(1);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_new_analysis_resets_scroll() {
        let mut state = TuiState::new();
        state.set_analysis(layout(&render("a\n\nb")));
        state.scroll_down(2);
        state.set_analysis(layout(&render("c")));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = TuiState::new();
        let first = state.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            state.advance_spinner();
        }
        assert_eq!(state.spinner(), first);
    }
}
