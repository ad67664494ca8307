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

use super::{ChatMessage, ChatStatus, InputChange, InputState};

/// The chat-state provider the shell renders from.
///
/// The provider owns and mutates all of this; the shell only reads it on each
/// render and forwards input through the two handlers.
pub trait ChatSession {
    fn messages(&self) -> &[ChatMessage];

    /// Bumped on every mutation of the message sequence, including streamed
    /// edits to the last message. The shell compares it across renders to
    /// decide when to scroll to the bottom.
    fn messages_revision(&self) -> u64;

    fn input(&self) -> &InputState;

    fn status(&self) -> ChatStatus;

    fn handle_input_change(&mut self, change: InputChange);

    fn handle_submit(&mut self);
}
