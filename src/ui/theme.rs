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

use crate::chat::Role;
use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const TEXT: Color = Color::Gray;
pub const PROMPT_CHAR: &str = "❯";
pub const SEPARATOR_CHAR: &str = "─";

// Role header colors
pub const ROLE_USER: Color = Color::White;
pub const ROLE_ASSISTANT: Color = ACCENT;
pub const ROLE_SYSTEM: Color = Color::Yellow;

// Tool status pill
pub const PILL_DONE: Color = Color::Rgb(16, 185, 129);
pub const PILL_SPINNER: Color = Color::Rgb(37, 99, 235);
pub const PILL_ICON: Color = Color::Gray;
pub const PILL_LABEL: Color = Color::White;
pub const PILL_DONE_DOT: &str = "●";

/// Braille spinner frames shared by the pill and the thinking line.
pub const SPINNER_FRAMES: &[&str] = &[
    "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280F}",
];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn role_label(role: Role) -> (&'static str, Color) {
    match role {
        Role::User => ("You", ROLE_USER),
        Role::Assistant => ("Assistant", ROLE_ASSISTANT),
        Role::System => ("System", ROLE_SYSTEM),
    }
}
