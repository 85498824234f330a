//! Interactive tile preview screen
//!
//! Owns the terminal lifecycle and the draw/poll loop. Layout, top to
//! bottom: search bar, tile list, help bar. All rendering reads the
//! application state; all mutation happens in the event handlers.

use super::events::{self, EventResult};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, SearchBar, TileList};
use crate::samples::SampleRegistry;
use crate::VitrineError;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Interactive tile preview application
pub struct App {
    theme: Theme,
}

impl App {
    /// Create a new preview application
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, VitrineError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<(), VitrineError> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Run the preview screen until the user exits
    ///
    /// # Errors
    /// Returns `VitrineError` when the terminal cannot be set up or the
    /// event stream fails. The terminal is restored on every exit path.
    pub fn run(&self, registry: SampleRegistry, initial_query: &str) -> Result<(), VitrineError> {
        let mut terminal = Self::setup_terminal()?;
        let mut state = AppState::new(registry, initial_query);

        let result = self.run_loop(&mut terminal, &mut state);

        Self::cleanup_terminal()?;
        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<(), VitrineError> {
        let hints = HelpBar::default_hints();

        loop {
            terminal.draw(|frame| self.render(frame, state, &hints))?;

            match events::poll_and_handle(state, Duration::from_millis(50))? {
                EventResult::Exit => return Ok(()),
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                return Ok(());
            }
        }
    }

    /// Render the full screen
    fn render(&self, frame: &mut Frame, state: &mut AppState, hints: &[KeyHint]) {
        let area = frame.area();

        state.visible_height = area.height.saturating_sub(4) as usize;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Tile list
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let search_bar = SearchBar::new(
            &state.query,
            state.query_cursor,
            state.resolution.is_match(),
            &self.theme,
        );
        frame.render_widget(search_bar, layout[0]);

        let tile_list = TileList::new(state, &self.theme);
        frame.render_widget(tile_list, layout[1]);

        let help_bar = HelpBar::new(hints, &self.theme);
        frame.render_widget(help_bar, layout[2]);
    }
}
