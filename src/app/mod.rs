// agent_chat_tui — Terminal chat shell for AI coding agents
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod events;
mod replay;
mod session;
mod state;

pub use events::{handle_replay_event, handle_terminal_event};
pub use replay::{
    ReplayEvent, ScriptedTurn, Transcript, TranscriptError, replay_events, spawn_turn,
};
pub use session::ScriptedSession;
pub use state::App;

use crate::chat::ChatSession;
use crate::error::AppError;
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

/// Enhanced keyboard protocol, so Shift+Enter arrives with its modifier
/// instead of as a plain Enter.
pub const KEYBOARD_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        .union(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        .union(KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS);

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal =
        ratatui::try_init().map_err(|e| AppError::TerminalUnavailable(e.to_string()))?;

    // Enable bracketed paste and mouse capture (ignore error on unsupported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
        PushKeyboardEnhancementFlags(KEYBOARD_FLAGS),
    );

    let result = event_loop(app, &mut terminal).await;

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
        PopKeyboardEnhancementFlags,
    );
    ratatui::restore();
    tracing::info!(messages = app.session.messages().len(), "terminal restored");

    result
}

async fn event_loop(app: &mut App, terminal: &mut ratatui::DefaultTerminal) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            Some(event) = app.session.event_rx.recv() => {
                handle_replay_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first (keeps typing responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                handle_terminal_event(app, event);
                continue;
            }
            match app.session.event_rx.try_recv() {
                Ok(event) => handle_replay_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            return Ok(());
        }

        // Phase 3: render once
        if app.is_animating() {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }
}
