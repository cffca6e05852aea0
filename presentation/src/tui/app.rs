//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop, owns the controller)
//!   ├─ crossterm EventStream ── KeyHandler ── Action ──▶ controller intents
//!   ├─ outcome_rx (from spawned request tasks) ────────▶ controller.apply_outcome
//!   ├─ ui_rx (UiEvent from controller) ── TuiPresenter ─▶ TuiState
//!   └─ tick_interval ─────────────────────────────────▶ spinner, flash expiry
//! ```

use super::mode::{Action, KeyHandler, Mode};
use super::presenter::TuiPresenter;
use super::state::{PAGE_SCROLL, TuiState};
use super::widgets::{
    MainLayout,
    analysis::{AnalysisWidget, fit_viewport},
    header::HeaderWidget,
    input::{InlineMessageWidget, InputWidget},
    links::LinksWidget,
    status_bar::StatusBarWidget,
};
use brandcheck_application::{
    AnalysisGateway, AnalysisOutcome, InteractionController, SubmitOutcome, UiEvent,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// How long a flash message stays in the status bar
const FLASH_TTL: Duration = Duration::from_secs(4);

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(120);

type Backend = CrosstermBackend<io::Stdout>;

/// Main TUI application
pub struct TuiApp {
    controller: InteractionController,
    outcome_rx: mpsc::UnboundedReceiver<AnalysisOutcome>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    presenter: TuiPresenter,
    tick_rate: Duration,
    service_url: String,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let (controller, outcome_rx) = InteractionController::new(gateway, ui_tx);

        Self {
            controller,
            outcome_rx,
            ui_rx,
            presenter: TuiPresenter::new(),
            tick_rate: DEFAULT_TICK_RATE,
            service_url: String::new(),
        }
    }

    /// Redraw interval; also paces the spinner
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Service URL shown in the header and links overlay
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        info!("TUI started");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal, even when the loop failed
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<Backend>) -> io::Result<()> {
        let mut state = TuiState::new();
        state.service_url = self.service_url.clone();

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            // Measure the results pane so scrolling stops at the last wrapped row
            let size = terminal.size()?;
            let pane = MainLayout::compute(Rect::new(0, 0, size.width, size.height)).analysis;
            fit_viewport(&mut state, pane);

            // Render
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(&mut state, event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Request outcomes from spawned tasks
                Some(outcome) = self.outcome_rx.recv() => {
                    self.controller.apply_outcome(outcome);
                }

                // UiEvents from controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // Tick for flash expiry and spinner animation
                _ = tick.tick() => {
                    self.on_tick(&mut state);
                }
            }
        }

        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let interaction = self.controller.state();
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(InputWidget::new(state, interaction), layout.input);
        frame.render_widget(InlineMessageWidget::new(interaction), layout.message);
        frame.render_widget(AnalysisWidget::new(state, interaction), layout.analysis);
        frame.render_widget(StatusBarWidget::new(state, interaction), layout.status_bar);

        if state.mode == Mode::Links {
            let overlay = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(LinksWidget::new(state), overlay);
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(state.mode, key, state.input.is_empty());
                self.handle_action(state, action);
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll_up(1),
                MouseEventKind::ScrollDown => state.scroll_down(1),
                _ => {}
            },
            // Terminal auto-resizes on next draw
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&mut self, state: &mut TuiState, action: Action) {
        match action {
            Action::None => {}

            // Text editing
            Action::InsertChar(c) => {
                state.insert_char(c);
                self.sync_query(state);
            }
            Action::DeleteChar => {
                state.delete_char();
                self.sync_query(state);
            }
            Action::DeleteForward => {
                state.delete_forward();
                self.sync_query(state);
            }
            Action::ClearInput => {
                state.clear_input();
                self.sync_query(state);
            }
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),

            // Submit
            Action::Submit => match self.controller.on_submit_intent() {
                SubmitOutcome::Dispatched(request) => debug!("Submitted request {}", request),
                SubmitOutcome::Rejected(message) => debug!("Submit rejected: {}", message),
                SubmitOutcome::Ignored => debug!("Submit ignored while pending"),
            },

            // Results scrolling
            Action::ScrollUp => state.scroll_up(1),
            Action::ScrollDown => state.scroll_down(1),
            Action::PageUp => state.scroll_up(PAGE_SCROLL),
            Action::PageDown => state.scroll_down(PAGE_SCROLL),

            // Overlay
            Action::ShowLinks => state.mode = Mode::Links,
            Action::Dismiss => state.mode = Mode::Input,

            Action::Quit => state.should_quit = true,
        }
    }

    fn sync_query(&mut self, state: &TuiState) {
        self.controller.on_query_change(state.input.clone());
    }

    fn on_tick(&mut self, state: &mut TuiState) {
        if self.controller.state().is_pending() {
            state.advance_spinner();
        }
        state.expire_flash(FLASH_TTL);
    }
}
