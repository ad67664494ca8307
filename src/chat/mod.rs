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

//! Chat state as seen by the display layer: the message and tool-invocation
//! records, the draft input, and the `ChatSession` seam the shell reads from.

mod input;
mod model;
mod session;

pub use input::{InputChange, InputState};
pub use model::{
    ChatMessage, ChatStatus, Role, STATE_CALL, STATE_RESULT, ToolInvocation, is_truthy,
};
pub use session::ChatSession;
