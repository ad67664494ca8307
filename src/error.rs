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

use std::path::PathBuf;

/// Failures that end the process before or around the TUI session.
///
/// Rendering itself never fails: malformed tool output degrades to a
/// fallback label instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("transcript not found: {}", .path.display())]
    TranscriptNotFound { path: PathBuf },
    #[error("transcript {} is invalid: {reason}", .path.display())]
    TranscriptInvalid { path: PathBuf, reason: String },
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(String),
}

impl AppError {
    pub const TRANSCRIPT_NOT_FOUND_EXIT_CODE: i32 = 20;
    pub const TRANSCRIPT_INVALID_EXIT_CODE: i32 = 21;
    pub const TERMINAL_UNAVAILABLE_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TranscriptNotFound { .. } => Self::TRANSCRIPT_NOT_FOUND_EXIT_CODE,
            Self::TranscriptInvalid { .. } => Self::TRANSCRIPT_INVALID_EXIT_CODE,
            Self::TerminalUnavailable(_) => Self::TERMINAL_UNAVAILABLE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TranscriptNotFound { path } => {
                format!(
                    "Transcript file {} does not exist. Check the --transcript path.",
                    path.display()
                )
            }
            Self::TranscriptInvalid { path, reason } => {
                format!("Transcript file {} could not be used: {reason}", path.display())
            }
            Self::TerminalUnavailable(reason) => {
                format!(
                    "Could not take over the terminal ({reason}). \
                     Run agent-chat in an interactive terminal."
                )
            }
        }
    }
}
