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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire value of `state` once the tool has returned.
pub const STATE_RESULT: &str = "result";
/// Wire value of `state` while the call is in flight.
pub const STATE_CALL: &str = "call";

fn default_state() -> String {
    STATE_CALL.to_owned()
}

/// One call made by the agent to an external tool, as produced upstream.
///
/// Every field is optional on the wire. `args` is kept untyped: only a few
/// keys are ever read, and a non-object value reads as "no keys".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    #[serde(default)]
    pub tool_call_id: String,
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToolInvocation {
    /// In-flight invocation with no result yet.
    pub fn call(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        args: Value,
    ) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args,
            state: default_state(),
            result: None,
        }
    }

    /// Mark the invocation as returned with `result`.
    #[must_use]
    pub fn with_result(mut self, result: Value) -> Self {
        self.state = STATE_RESULT.to_owned();
        self.result = Some(result);
        self
    }

    /// Look up an argument. Missing keys and non-object `args` both yield `None`.
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.args.get(key)
    }

    /// The `command` argument, if it is a string.
    pub fn command(&self) -> Option<&str> {
        self.arg("command").and_then(Value::as_str)
    }

    /// `state == "result"` and the result is truthy.
    ///
    /// A `"result"` state carrying `null`, `false`, `0` or `""` still counts
    /// as pending.
    pub fn is_complete(&self) -> bool {
        self.state == STATE_RESULT && self.result.as_ref().is_some_and(is_truthy)
    }
}

/// Truthiness as the upstream producer defines it: `null`, `false`, zero and
/// the empty string are falsy, everything else (empty arrays and objects
/// included) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_invocations: Vec<ToolInvocation>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            tool_invocations: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Request lifecycle published by the chat-state provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatStatus {
    #[default]
    Idle,
    Submitted,
    Streaming,
    Error,
}

impl ChatStatus {
    /// Parse a wire status. Unknown values read as `Idle`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "submitted" => Self::Submitted,
            "streaming" => Self::Streaming,
            "error" => Self::Error,
            _ => Self::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitted => "submitted",
            Self::Streaming => "streaming",
            Self::Error => "error",
        }
    }

    /// A request is in flight; input should be disabled.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Submitted | Self::Streaming)
    }
}
