//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each iteration:
//!
//! 1. Redraw if anything changed since the last frame.
//! 2. Wait up to `POLL_INTERVAL` for terminal input, then drain every pending
//!    event without blocking.
//! 3. Drain actions sent by fired timers.
//!
//! Every `Action` goes through `update()`; the returned `Effect` is handed to
//! `WidgetTimers`, which arms the debouncers or the blur delay. Timer actions
//! come back on the same channel in firing order.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dataset::Dataset;
use crate::core::state::App;
use crate::timer::WidgetTimers;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchLayout};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Upper bound on how late a fired timer is drawn.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_layout: SearchLayout,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_layout: SearchLayout::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Apply one action and arm whatever timer it asks for. Returns true on quit.
fn dispatch(app: &mut App, timers: &mut WidgetTimers, action: Action) -> bool {
    let effect = update(app, action);
    timers.schedule(&effect);
    effect == Effect::Quit
}

/// Turn a terminal event into actions for the search box.
fn handle_terminal_event(
    app: &mut App,
    tui: &mut TuiState,
    timers: &mut WidgetTimers,
    event: &TuiEvent,
) -> bool {
    // Typing into a blurred input focuses it first
    if matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) && !app.search.is_focused() {
        dispatch(app, timers, Action::Focus);
    }

    let action = SearchBox::new(&mut app.search, &mut tui.search_layout).handle_event(event);
    match action {
        Some(action) => dispatch(app, timers, action),
        None => false,
    }
}

pub fn run(config: ResolvedConfig, dataset: Dataset) -> std::io::Result<()> {
    info!(
        "Starting picker over {} people (query {:?}, visibility {:?}, blur {:?})",
        dataset.len(),
        config.timing.query_delay,
        config.timing.visibility_delay,
        config.timing.blur_grace
    );

    let mut app = App::new(dataset);
    let mut tui = TuiState::new();

    // Channel for actions from fired timers
    let (tx, rx) = mpsc::channel();
    let mut timers = WidgetTimers::new(&config.timing, tx);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut app, &mut tui, &mut timers, &rx)
    });

    // Nothing may touch the widget after teardown
    timers.cancel_all();
    ratatui::restore();
    info!("Picker closed (selection: {:?})", app.selection.name());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    timers: &mut WidgetTimers,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // First event waits up to POLL_INTERVAL, the rest are drained before the next draw
        let mut next = poll_event_timeout(POLL_INTERVAL)?;
        while let Some(event) = next {
            needs_redraw = true;
            // Resize just needs a redraw (already flagged above)
            if event != TuiEvent::Resize && handle_terminal_event(app, tui, timers, &event) {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Fired timers, in firing order
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(app, timers, action);
        }
    }
}
