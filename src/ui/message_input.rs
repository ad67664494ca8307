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

use crate::chat::InputState;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal padding to match the header inset.
const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

pub const PLACEHOLDER_ENABLED: &str = "Type a message...";
pub const PLACEHOLDER_DISABLED: &str = "Waiting for the assistant...";
pub const SUBMIT_HINT_ENABLED: &str =
    "enter send · shift+enter newline · pgup/pgdn scroll · ctrl+c quit";
pub const SUBMIT_HINT_DISABLED: &str = "responding · input disabled · ctrl+c quit";

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + INPUT_PAD.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    }
}

/// Draw the input row. While `disabled` the text is dimmed and no cursor is
/// placed, so keystrokes have nowhere visible to land.
pub fn render(frame: &mut Frame, area: Rect, input: &InputState, disabled: bool) {
    let padded = padded(area);
    let prompt_style =
        Style::default().fg(if disabled { theme::DIM } else { theme::ACCENT });
    let text_style = if disabled {
        Style::default().fg(theme::DIM).add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    if input.is_empty() {
        let placeholder = if disabled { PLACEHOLDER_DISABLED } else { PLACEHOLDER_ENABLED };
        let line = Line::from(vec![
            prompt(prompt_style),
            Span::styled(placeholder, Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);
        if !disabled {
            frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        }
        return;
    }

    let content_width = usize::from(padded.width.saturating_sub(PROMPT_WIDTH));
    if content_width == 0 {
        return;
    }
    let rows = visual_rows(input.text(), content_width);
    let (cursor_row, cursor_col) = cursor_cell(&rows, input);
    let scroll = cursor_row.saturating_sub(usize::from(padded.height.saturating_sub(1)));

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let prefix = if row.start == 0 { prompt(prompt_style) } else { Span::raw("  ") };
            Line::from(vec![prefix, Span::styled(row.text.to_owned(), text_style)])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).scroll((to_u16(scroll), 0)), padded);

    if disabled {
        return;
    }
    let x = padded.x + PROMPT_WIDTH + to_u16(cursor_col);
    let y = padded.y + to_u16(cursor_row - scroll);
    if x < padded.right() && y < padded.bottom() {
        frame.set_cursor_position((x, y));
    }
}

fn prompt(style: Style) -> Span<'static> {
    Span::styled(format!("{} ", theme::PROMPT_CHAR), style)
}

/// One visual row of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row<'a> {
    /// Byte offset of the row in the draft.
    start: usize,
    text: &'a str,
}

/// Break the draft into rows of at most `width` columns, splitting between
/// characters. A logical line whose last row is full gets an extra empty row
/// for the cursor to sit on.
fn visual_rows(text: &str, width: usize) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    let mut line_start = 0;
    for line in text.split('\n') {
        let mut row_start = 0;
        let mut row_width = 0;
        for (i, c) in line.char_indices() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if row_width > 0 && row_width + w > width {
                rows.push(Row { start: line_start + row_start, text: &line[row_start..i] });
                row_start = i;
                row_width = 0;
            }
            row_width += w;
        }
        rows.push(Row { start: line_start + row_start, text: &line[row_start..] });
        if row_width >= width {
            rows.push(Row { start: line_start + line.len(), text: "" });
        }
        line_start += line.len() + 1;
    }
    rows
}

/// (visual row, display column) of the cursor within `rows`.
fn cursor_cell(rows: &[Row<'_>], input: &InputState) -> (usize, usize) {
    let cursor = input.cursor();
    let row = rows.iter().rposition(|r| r.start <= cursor).unwrap_or(0);
    let col = rows.get(row).map_or(0, |r| {
        let end = (cursor - r.start).min(r.text.len());
        UnicodeWidthStr::width(&r.text[..end])
    });
    (row, col)
}

/// Key hints under the input; doubles as the submit control's state.
pub fn render_submit_hint(frame: &mut Frame, area: Rect, disabled: bool) {
    if area.height == 0 {
        return;
    }
    let hint = if disabled { SUBMIT_HINT_DISABLED } else { SUBMIT_HINT_ENABLED };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(theme::DIM)))),
        padded(area),
    );
}

/// Visual lines the draft occupies at `area_width`, at least 1.
pub fn visual_line_count(input: &InputState, area_width: u16) -> u16 {
    let content_width =
        usize::from(area_width.saturating_sub(INPUT_PAD * 2).saturating_sub(PROMPT_WIDTH));
    if content_width == 0 {
        return to_u16(input.lines().count().max(1));
    }
    to_u16(visual_rows(input.text(), content_width).len().max(1))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
