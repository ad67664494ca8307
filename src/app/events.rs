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

use super::App;
use super::replay::ReplayEvent;
use crate::ui::chat::WHEEL_SCROLL_LINES;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if is_ctrl_char_shortcut(key, 'c') || is_ctrl_char_shortcut(key, 'q') {
                app.should_quit = true;
                return;
            }
            app.shell.handle_key(&mut app.session, key);
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => app.shell.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown => app.shell.scroll_down(WHEEL_SCROLL_LINES),
            _ => {}
        },
        Event::Paste(text) => {
            app.shell.handle_paste(&mut app.session, text);
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

pub fn handle_replay_event(app: &mut App, event: ReplayEvent) {
    app.session.apply_replay_event(event);
}
