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

//! Status pill for a single tool invocation: completion indicator, icon and
//! a human-readable label such as `Edited App.jsx`.
//!
//! Everything here is total. Unknown tools, unknown commands and missing or
//! non-string paths all fall through to a generic label.

use crate::chat::ToolInvocation;
use crate::ui::theme;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TOOL_STR_REPLACE_EDITOR: &str = "str_replace_editor";
pub const TOOL_FILE_MANAGER: &str = "file_manager";

/// Placeholder used when `path` is missing or not a string.
const FALLBACK_FILE_NAME: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    FileCreate,
    FileEdit,
    FileView,
    FileMove,
    FileDelete,
    FileGeneric,
}

impl IconKind {
    /// Monochrome glyph, one column wide.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::FileCreate => "+",
            Self::FileEdit => "✎",
            Self::FileView => "◉",
            Self::FileMove => "⇄",
            Self::FileDelete => "✗",
            Self::FileGeneric => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
    Other,
}

impl EditorCommand {
    fn parse(command: Option<&str>) -> Self {
        match command {
            Some("create") => Self::Create,
            Some("str_replace") => Self::StrReplace,
            Some("insert") => Self::Insert,
            Some("view") => Self::View,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileManagerCommand {
    Rename,
    Delete,
    Other,
}

impl FileManagerCommand {
    fn parse(command: Option<&str>) -> Self {
        match command {
            Some("rename") => Self::Rename,
            Some("delete") => Self::Delete,
            _ => Self::Other,
        }
    }
}

/// What an invocation does, classified by tool name and then by command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction<'a> {
    Editor(EditorCommand),
    FileManager(FileManagerCommand),
    /// Any other tool; carries the tool name verbatim.
    Other(&'a str),
}

impl<'a> ToolAction<'a> {
    pub fn classify(invocation: &'a ToolInvocation) -> Self {
        let command = invocation.command();
        match invocation.tool_name.as_str() {
            TOOL_STR_REPLACE_EDITOR => Self::Editor(EditorCommand::parse(command)),
            TOOL_FILE_MANAGER => Self::FileManager(FileManagerCommand::parse(command)),
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLabel {
    pub icon: IconKind,
    pub text: String,
}

/// Last `/`-separated segment of a path argument.
///
/// Non-string or missing values become `"file"`. An empty last segment
/// (trailing slash, empty string) falls back to the whole string.
pub fn file_name(path: Option<&Value>) -> String {
    let Some(path) = path.and_then(Value::as_str) else {
        return FALLBACK_FILE_NAME.to_owned();
    };
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_owned(),
        _ => path.to_owned(),
    }
}

fn tense<'s>(complete: bool, pending: &'s str, done: &'s str) -> &'s str {
    if complete { done } else { pending }
}

/// Derive the icon and label for an invocation.
pub fn describe(invocation: &ToolInvocation) -> ToolLabel {
    let complete = invocation.is_complete();
    let file = file_name(invocation.arg("path"));

    let (icon, text) = match ToolAction::classify(invocation) {
        ToolAction::Editor(command) => {
            let (icon, pending, done) = match command {
                EditorCommand::Create => (IconKind::FileCreate, "Creating", "Created"),
                EditorCommand::StrReplace => (IconKind::FileEdit, "Editing", "Edited"),
                EditorCommand::Insert => (IconKind::FileEdit, "Updating", "Updated"),
                EditorCommand::View => (IconKind::FileView, "Viewing", "Viewed"),
                EditorCommand::Other => (IconKind::FileGeneric, "Modifying", "Modified"),
            };
            (icon, format!("{} {file}", tense(complete, pending, done)))
        }
        ToolAction::FileManager(FileManagerCommand::Rename) => {
            let new_file = file_name(invocation.arg("new_path"));
            let verb = tense(complete, "Renaming", "Renamed");
            (IconKind::FileMove, format!("{verb} {file} to {new_file}"))
        }
        ToolAction::FileManager(FileManagerCommand::Delete) => {
            (IconKind::FileDelete, format!("{} {file}", tense(complete, "Deleting", "Deleted")))
        }
        ToolAction::FileManager(FileManagerCommand::Other) => (
            IconKind::FileGeneric,
            format!("{} {file}", tense(complete, "Modifying", "Modified")),
        ),
        ToolAction::Other(name) => (IconKind::FileGeneric, name.to_owned()),
    };

    ToolLabel { icon, text }
}

/// Filled dot once complete, otherwise the current spinner frame.
pub fn status_indicator(complete: bool, spinner_frame: usize) -> (&'static str, Color) {
    if complete {
        (theme::PILL_DONE_DOT, theme::PILL_DONE)
    } else {
        (theme::spinner(spinner_frame), theme::PILL_SPINNER)
    }
}

/// Columns taken by everything except the label: `[ ● ✎ ` + ` ]`.
const PILL_CHROME_WIDTH: usize = 8;

/// Render the pill as one line, shortening the label with `…` to fit
/// `max_width` columns.
pub fn render_tool_status(
    invocation: &ToolInvocation,
    spinner_frame: usize,
    max_width: u16,
) -> Line<'static> {
    let label = describe(invocation);
    let (indicator, indicator_color) = status_indicator(invocation.is_complete(), spinner_frame);
    let chrome = Style::default().fg(theme::DIM);
    let budget = usize::from(max_width).saturating_sub(PILL_CHROME_WIDTH);

    Line::from(vec![
        Span::styled("[ ", chrome),
        Span::styled(format!("{indicator} "), Style::default().fg(indicator_color)),
        Span::styled(format!("{} ", label.icon.glyph()), Style::default().fg(theme::PILL_ICON)),
        Span::styled(
            truncate_to_width(&label.text, budget),
            Style::default().fg(theme::PILL_LABEL),
        ),
        Span::styled(" ]", chrome),
    ])
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
