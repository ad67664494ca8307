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

use crate::chat::{ChatStatus, STATE_CALL, STATE_RESULT, ToolInvocation};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("transcript has no turns")]
    NoTurns,
}

/// Assistant turns played back, one per user submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub turns: Vec<ScriptedTurn>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptedTurn {
    /// Assistant text, streamed word by word after the tools.
    #[serde(default)]
    pub reply: String,
    /// Tool calls in order. Entries whose `state` is `"result"` are completed
    /// with their `result`; the rest stay pending.
    #[serde(default)]
    pub tools: Vec<ToolInvocation>,
    /// Chat status once the turn is delivered, as a wire string such as
    /// `"error"`. Absent means idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ScriptedTurn {
    /// Status the session settles in after this turn. A turn never ends
    /// loading, so `"submitted"`/`"streaming"` read as idle.
    pub fn end_status(&self) -> ChatStatus {
        match self.status.as_deref().map(ChatStatus::from_wire) {
            Some(status) if !status.is_loading() => status,
            _ => ChatStatus::Idle,
        }
    }
}

impl Transcript {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::TranscriptNotFound { path: path.to_path_buf() }
            } else {
                AppError::TranscriptInvalid { path: path.to_path_buf(), reason: e.to_string() }
            }
        })?;
        Self::parse(&raw).map_err(|e| AppError::TranscriptInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn parse(raw: &str) -> Result<Self, TranscriptError> {
        let transcript: Self = serde_json::from_str(raw)?;
        if transcript.turns.is_empty() {
            return Err(TranscriptError::NoTurns);
        }
        Ok(transcript)
    }

    /// Turn for the `index`-th submit. Wraps around once the script runs out.
    pub fn turn(&self, index: usize) -> Option<&ScriptedTurn> {
        if self.turns.is_empty() {
            return None;
        }
        self.turns.get(index % self.turns.len())
    }

    /// Built-in script exercising every tool label.
    pub fn demo() -> Self {
        let editor = |id: &str, command: &str, path: &str| {
            ToolInvocation::call(
                id,
                "str_replace_editor",
                json!({ "command": command, "path": path }),
            )
            .with_result(json!("Success"))
        };
        Self {
            turns: vec![
                ScriptedTurn {
                    reply: "I created the app shell and a Button component.".to_owned(),
                    tools: vec![
                        editor("demo-1", "create", "/App.jsx"),
                        editor("demo-2", "create", "/components/Button.jsx"),
                        editor("demo-3", "str_replace", "/App.jsx"),
                    ],
                    status: None,
                },
                ScriptedTurn {
                    reply: "Moved the button into a ui folder and removed the old stylesheet."
                        .to_owned(),
                    tools: vec![
                        editor("demo-4", "view", "/components/Button.jsx"),
                        ToolInvocation::call(
                            "demo-5",
                            "file_manager",
                            json!({
                                "command": "rename",
                                "path": "/components/Button.jsx",
                                "new_path": "/components/ui/Button.jsx",
                            }),
                        )
                        .with_result(json!({ "success": true })),
                        ToolInvocation::call(
                            "demo-6",
                            "file_manager",
                            json!({ "command": "delete", "path": "/styles/old.css" }),
                        )
                        .with_result(json!({ "success": true })),
                        editor("demo-7", "insert", "/App.jsx"),
                    ],
                    status: None,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayEvent {
    /// The assistant reply has started streaming.
    Started,
    ToolCall(ToolInvocation),
    ToolResult { tool_call_id: String, result: Option<Value> },
    TextChunk(String),
    /// The reply is complete; the session settles in this status.
    Finished(ChatStatus),
}

/// Events for one turn, in delivery order.
pub fn replay_events(turn: &ScriptedTurn) -> Vec<ReplayEvent> {
    let mut events = vec![ReplayEvent::Started];
    for tool in &turn.tools {
        let mut call = tool.clone();
        call.state = STATE_CALL.to_owned();
        call.result = None;
        events.push(ReplayEvent::ToolCall(call));
        if tool.state == STATE_RESULT {
            events.push(ReplayEvent::ToolResult {
                tool_call_id: tool.tool_call_id.clone(),
                result: tool.result.clone(),
            });
        }
    }
    let words = turn.reply.split_inclusive(' ');
    events.extend(words.map(|word| ReplayEvent::TextChunk(word.to_owned())));
    events.push(ReplayEvent::Finished(turn.end_status()));
    events
}

/// Play a turn on `runtime`, pausing `step_delay` before each event.
/// Stops early if the receiving session is gone.
pub fn spawn_turn(
    runtime: &Handle,
    turn: ScriptedTurn,
    step_delay: Duration,
    tx: mpsc::UnboundedSender<ReplayEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let events = replay_events(&turn);
        let total = events.len();
        for event in events {
            tokio::time::sleep(step_delay).await;
            if tx.send(event).is_err() {
                tracing::debug!("replay receiver dropped; stopping turn");
                return;
            }
        }
        tracing::debug!(events = total, "replay turn delivered");
    })
}
