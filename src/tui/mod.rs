//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resizes, or
//!   settled requests.
//!
//! Requests run as tokio tasks and report back over an `mpsc` channel;
//! the loop drains it between frames and feeds each result to `update()`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::controller::fetch_answer;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, QuestionInput, StatusPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub question_input: QuestionInput,
    pub status_panel: StatusPanelState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            question_input: QuestionInput::new(),
            status_panel: StatusPanelState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Blinking resets on every draw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(app: App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, app));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    // Channel for settled requests from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.status_panel.handle_event(&event);
                }
                _ => {
                    if let Some(InputEvent::Submit(question)) =
                        tui.question_input.handle_event(&event)
                    {
                        // Submitting while loading is allowed; the newest request wins
                        let effect = update(&mut app, Action::Submit(question));
                        if let Effect::SpawnRequest {
                            request_id,
                            question,
                        } = effect
                        {
                            tui.status_panel.reset();
                            spawn_request(&app, request_id, question, tx.clone());
                        }
                    }
                }
            }
        }

        if should_quit {
            info!("Quit requested");
            return Ok(());
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    }
}

fn spawn_request(app: &App, request_id: u64, question: String, tx: mpsc::Sender<Action>) {
    info!("Spawning answer request {}", request_id);
    let service = app.service.clone();
    tokio::spawn(async move {
        let action = fetch_answer(service.as_ref(), request_id, &question).await;
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver result of request {}: receiver dropped",
                request_id
            );
        }
    });
}
