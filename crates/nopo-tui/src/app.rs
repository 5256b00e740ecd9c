//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        results::{ResultsPane, ResultsState, SearchResults},
        search_form::{FormSlot, SearchFormBar, SearchFormState},
        title_bar::TitleBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nopo_core::{Catalog, Match, Restaurant, SearchField};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    Keyword,
    /// Only reachable while the menu field is selected.
    Price,
    Results,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    fn form_slot(self) -> Option<FormSlot> {
        match self {
            Focus::Field => Some(FormSlot::Field),
            Focus::Keyword => Some(FormSlot::Keyword),
            Focus::Price => Some(FormSlot::Price),
            Focus::Results | Focus::Command => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// Loaded once at startup; only ever borrowed.
    pub catalog: Catalog,
    pub form: SearchFormState,
    pub results: ResultsState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, field: SearchField, theme: Theme, separator_width: usize) -> Self {
        Self {
            catalog,
            form: SearchFormState::new(field),
            results: ResultsState::new(separator_width),
            focus: Focus::Keyword,
            prev_focus: Focus::Keyword,
            theme,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    fn next_focus(&self) -> Focus {
        match self.focus {
            Focus::Field => Focus::Keyword,
            Focus::Keyword if self.form.field.takes_price() => Focus::Price,
            Focus::Keyword | Focus::Price => Focus::Results,
            Focus::Results | Focus::Command => Focus::Field,
        }
    }

    fn prev_focus_of(&self) -> Focus {
        match self.focus {
            Focus::Field | Focus::Command => Focus::Results,
            Focus::Keyword => Focus::Field,
            Focus::Price => Focus::Keyword,
            Focus::Results if self.form.field.takes_price() => Focus::Price,
            Focus::Results => Focus::Keyword,
        }
    }

    /// Validate the form and, if it passes, replace the displayed results.
    /// Rejected input clears the results so only the error is shown.
    fn run_search(&mut self) {
        match self.form.submit() {
            Ok(query) => {
                let records: Vec<Restaurant> = query
                    .run(self.catalog.restaurants())
                    .iter()
                    .map(Match::to_record)
                    .collect();
                self.results.show(SearchResults { query, records });
            }
            Err(_) => self.results.clear(),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text input is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.value.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            fix_price_focus(s);
            return;
        }

        let typing = is_insert_mode(s.focus);
        match event {
            AppEvent::Char('?') if !typing => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if !typing => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape => {
                if typing {
                    tracing::debug!(from = ?s.focus, "focus -> Results");
                    s.focus = Focus::Results;
                }
            }

            AppEvent::FocusNext => {
                let next = s.next_focus();
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }
            AppEvent::FocusPrev => {
                let prev = s.prev_focus_of();
                tracing::debug!(from = ?s.focus, to = ?prev, "focus cycle back");
                s.focus = prev;
            }

            AppEvent::KeywordFocus => {
                tracing::debug!("focus -> Keyword");
                s.focus = Focus::Keyword;
            }

            AppEvent::Enter => s.run_search(),

            // Page scrolling works regardless of focus
            AppEvent::ScrollUp
            | AppEvent::ScrollDown
            | AppEvent::ScrollToTop
            | AppEvent::ScrollToBottom => s.results.handle(&event),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
        fix_price_focus(s);
    }
}

/// Returns true when the current focus is on a text input, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Keyword | Focus::Price | Focus::Command)
}

/// The price input disappears when the field changes away from menu search.
fn fix_price_focus(s: &mut AppState) {
    if !s.form.field.takes_price() {
        if s.focus == Focus::Price {
            s.focus = Focus::Keyword;
        }
        if s.prev_focus == Focus::Price {
            s.prev_focus = Focus::Keyword;
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Field | Focus::Keyword | Focus::Price => {
            if let Some(slot) = s.focus.form_slot() {
                s.form.handle(slot, &event);
            }
        }
        Focus::Results => {
            if matches!(event, AppEvent::Nav(Direction::Up | Direction::Down)) {
                s.results.handle(&event);
            }
        }
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line title bar | results | 4-line search form
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(4),
        ])
        .split(area);

    frame.render_widget(TitleBar::new(state.catalog.len(), &state.theme), vert[0]);
    frame.render_widget(
        ResultsPane::new(&state.results, state.focus == Focus::Results, &state.theme),
        vert[1],
    );
    let form = SearchFormBar::new(&state.form, state.focus.form_slot(), &state.theme);
    let cursor = form.cursor_position(vert[2]);
    frame.render_widget(form, vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
