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

use crate::chat::ChatMessage;
use crate::ui::{theme, tool_status};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Left inset for message bodies and pills, under the role header.
const BODY_INDENT: &str = "  ";

/// Transcript lines: a role header per message, its text, then one status
/// pill per tool invocation. A trailing spinner line is shown while loading.
pub fn render_lines(
    messages: &[ChatMessage],
    is_loading: bool,
    spinner_frame: usize,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if messages.is_empty() && !is_loading {
        lines.push(Line::from(Span::styled(
            format!("{BODY_INDENT}Start a conversation with the assistant."),
            Style::default().fg(theme::DIM),
        )));
        lines.push(Line::from(Span::styled(
            format!("{BODY_INDENT}Tool activity shows up here as it happens."),
            Style::default().fg(theme::DIM),
        )));
        return lines;
    }

    let indent_width = u16::try_from(BODY_INDENT.len()).unwrap_or(u16::MAX);
    let pill_width = width.saturating_sub(indent_width);

    for msg in messages {
        let (role, color) = theme::role_label(msg.role);
        lines.push(Line::from(Span::styled(
            role,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        if !msg.content.is_empty() {
            for text in msg.content.lines() {
                lines.push(Line::from(vec![
                    Span::raw(BODY_INDENT),
                    Span::styled(text.to_owned(), Style::default().fg(theme::TEXT)),
                ]));
            }
        }

        for invocation in &msg.tool_invocations {
            let mut pill = tool_status::render_tool_status(invocation, spinner_frame, pill_width);
            pill.spans.insert(0, Span::raw(BODY_INDENT));
            lines.push(pill);
        }

        lines.push(Line::default());
    }

    if is_loading {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{BODY_INDENT}{} ", theme::spinner(spinner_frame)),
                Style::default().fg(theme::ACCENT),
            ),
            Span::styled("Thinking...", Style::default().fg(theme::DIM)),
        ]));
    }

    lines
}
