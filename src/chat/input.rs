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

use unicode_width::UnicodeWidthStr;

/// A single edit to the draft, forwarded from the input row to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    Insert(char),
    /// Pasted text. `\r\n` and lone `\r` become `\n`.
    InsertText(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Clear,
}

/// Draft text plus a cursor. The cursor is a byte offset that always sits on
/// a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with the cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the draft has anything besides whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Cursor as a byte offset into `text()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Cursor as (logical row, display column).
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, UnicodeWidthStr::width);
        (row, col)
    }

    /// Empty the draft and return its previous contents.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn apply(&mut self, change: &InputChange) {
        match change {
            InputChange::Insert(c) => self.insert_char(*c),
            InputChange::InsertText(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.text.insert_str(self.cursor, &normalized);
                self.cursor += normalized.len();
            }
            InputChange::Newline => self.insert_char('\n'),
            InputChange::Backspace => {
                if let Some(prev) = self.prev_char_len() {
                    self.cursor -= prev;
                    self.text.remove(self.cursor);
                }
            }
            InputChange::Delete => {
                if self.cursor < self.text.len() {
                    self.text.remove(self.cursor);
                }
            }
            InputChange::CursorLeft => {
                if let Some(prev) = self.prev_char_len() {
                    self.cursor -= prev;
                }
            }
            InputChange::CursorRight => {
                if let Some(next) = self.text[self.cursor..].chars().next() {
                    self.cursor += next.len_utf8();
                }
            }
            InputChange::CursorHome => {
                self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
            }
            InputChange::CursorEnd => {
                self.cursor = self.text[self.cursor..]
                    .find('\n')
                    .map_or(self.text.len(), |i| self.cursor + i);
            }
            InputChange::Clear => {
                self.text.clear();
                self.cursor = 0;
            }
        }
    }

    fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn prev_char_len(&self) -> Option<usize> {
        self.text[..self.cursor].chars().next_back().map(char::len_utf8)
    }
}
