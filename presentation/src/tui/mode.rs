//! Key handling
//!
//! The input line is always focused; the links overlay is the only other
//! mode. Keys map to [`Action`]s, which the app applies.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What currently has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the brand name
    #[default]
    Input,
    /// Links overlay is open
    Links,
}

impl Mode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Links => "LINKS",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Input => Color::Magenta,
            Self::Links => Color::Blue,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert character at the cursor
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Delete character under the cursor (Delete)
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Clear the whole input (Ctrl+U)
    ClearInput,
    /// Analyze the current input
    Submit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Open the links overlay
    ShowLinks,
    /// Close the links overlay
    Dismiss,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode.
    ///
    /// `input_empty` lets `?` open the overlay without stealing the
    /// character from a name being typed.
    pub fn handle(mode: Mode, key: KeyEvent, input_empty: bool) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match mode {
            Mode::Input => Self::handle_input(key, input_empty),
            Mode::Links => Self::handle_links(key),
        }
    }

    fn handle_input(key: KeyEvent, input_empty: bool) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Action::Submit,

            // Overlay
            (KeyCode::F(1), _) => Action::ShowLinks,
            (KeyCode::Char('?'), _) if input_empty => Action::ShowLinks,

            // Line editing shortcuts
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,

            // Text input
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Action::InsertChar(c)
            }
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Delete, _) => Action::DeleteForward,

            // Cursor
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,

            // Results scrolling
            (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::PageUp, _) => Action::PageUp,
            (KeyCode::PageDown, _) => Action::PageDown,

            _ => Action::None,
        }
    }

    fn handle_links(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                Action::Dismiss
            }
            _ => Action::None,
        }
    }
}
