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

use super::ScriptedSession;
use crate::chat::ChatSession;
use crate::ui::ChatShell;

pub struct App {
    pub session: ScriptedSession,
    pub shell: ChatShell,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: ScriptedSession) -> Self {
        Self { session, shell: ChatShell::new(), spinner_frame: 0, should_quit: false }
    }

    /// Spinners are on screen: a request is in flight or a tool is pending.
    pub fn is_animating(&self) -> bool {
        self.session.status().is_loading() || self.session.has_pending_tools()
    }
}
