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

use super::replay::{self, ReplayEvent, Transcript};
use crate::chat::{
    ChatMessage, ChatSession, ChatStatus, InputChange, InputState, Role, STATE_RESULT,
};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Chat-state provider that answers each submit by replaying the next turn
/// of a `Transcript`.
///
/// Replay events arrive on `event_rx`; the event loop drains them into
/// `apply_replay_event`, so all mutation happens on the loop.
pub struct ScriptedSession {
    messages: Vec<ChatMessage>,
    revision: u64,
    input: InputState,
    status: ChatStatus,
    transcript: Transcript,
    next_turn: usize,
    step_delay: Duration,
    event_tx: mpsc::UnboundedSender<ReplayEvent>,
    pub event_rx: mpsc::UnboundedReceiver<ReplayEvent>,
}

impl ScriptedSession {
    pub fn new(transcript: Transcript, step_delay: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            messages: Vec::new(),
            revision: 0,
            input: InputState::new(),
            status: ChatStatus::Idle,
            transcript,
            next_turn: 0,
            step_delay,
            event_tx,
            event_rx,
        }
    }

    /// Any tool invocation in the transcript still waiting for its result.
    pub fn has_pending_tools(&self) -> bool {
        self.messages
            .iter()
            .flat_map(|m| &m.tool_invocations)
            .any(|inv| !inv.is_complete())
    }

    pub fn apply_replay_event(&mut self, event: ReplayEvent) {
        match event {
            ReplayEvent::Started => {
                self.status = ChatStatus::Streaming;
                self.messages.push(ChatMessage::assistant(""));
                self.bump();
            }
            ReplayEvent::ToolCall(invocation) => {
                tracing::debug!(
                    tool_call_id = %invocation.tool_call_id,
                    tool_name = %invocation.tool_name,
                    "tool call started"
                );
                self.reply_mut().tool_invocations.push(invocation);
                self.bump();
            }
            ReplayEvent::ToolResult { tool_call_id, result } => {
                let target = self
                    .messages
                    .iter_mut()
                    .rev()
                    .flat_map(|m| m.tool_invocations.iter_mut())
                    .find(|inv| inv.tool_call_id == tool_call_id);
                let Some(invocation) = target else {
                    tracing::warn!(%tool_call_id, "result for unknown tool call ignored");
                    return;
                };
                invocation.state = STATE_RESULT.to_owned();
                invocation.result = result;
                self.bump();
            }
            ReplayEvent::TextChunk(chunk) => {
                self.reply_mut().content.push_str(&chunk);
                self.bump();
            }
            ReplayEvent::Finished(status) => {
                self.status = status;
                tracing::info!(
                    messages = self.messages.len(),
                    status = status.as_str(),
                    "assistant turn finished"
                );
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// The assistant message being streamed, created if the last message is
    /// not an assistant reply.
    fn reply_mut(&mut self) -> &mut ChatMessage {
        if !matches!(self.messages.last(), Some(m) if m.role == Role::Assistant) {
            self.messages.push(ChatMessage::assistant(""));
        }
        let last = self.messages.len() - 1;
        &mut self.messages[last]
    }
}

impl ChatSession for ScriptedSession {
    fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn messages_revision(&self) -> u64 {
        self.revision
    }

    fn input(&self) -> &InputState {
        &self.input
    }

    fn status(&self) -> ChatStatus {
        self.status
    }

    fn handle_input_change(&mut self, change: InputChange) {
        self.input.apply(&change);
    }

    /// The reply is played on a task of the current tokio runtime. Without
    /// one the user message is kept and the session stays idle.
    fn handle_submit(&mut self) {
        if self.status.is_loading() || self.input.is_blank() {
            return;
        }
        let text = self.input.take();
        self.messages.push(ChatMessage::user(text));
        self.bump();
        self.status = ChatStatus::Submitted;

        let Some(turn) = self.transcript.turn(self.next_turn).cloned() else {
            self.status = ChatStatus::Idle;
            return;
        };
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("no tokio runtime; assistant turn not replayed");
            self.status = ChatStatus::Idle;
            return;
        };
        tracing::info!(turn = self.next_turn, tools = turn.tools.len(), "replaying assistant turn");
        self.next_turn += 1;
        replay::spawn_turn(&runtime, turn, self.step_delay, self.event_tx.clone());
    }
}
