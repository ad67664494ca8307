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

use ratatui::layout::{Constraint, Layout, Rect};

/// Maximum input area height (lines) to keep the transcript visible.
pub const MAX_INPUT_HEIGHT: u16 = 8;

pub struct AppLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    /// Submit hint row (zero-height on very short terminals).
    pub hint: Rect,
}

pub fn compute(area: Rect, input_lines: u16) -> AppLayout {
    let input_height = input_lines.clamp(1, MAX_INPUT_HEIGHT);
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 6 {
        // Compact: transcript and input only
        let [transcript, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(input_height)]).areas(area);
        AppLayout {
            header: zero,
            transcript,
            input_sep: Rect::new(area.x, input.y, area.width, 0),
            input,
            hint: Rect::new(area.x, input.bottom(), area.width, 0),
        }
    } else {
        let [header, transcript, input_sep, input, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout { header, transcript, input_sep, input, hint }
    }
}
