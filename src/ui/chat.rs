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

//! The chat shell: transcript above, input row below.
//!
//! The shell owns only viewport state. Everything it draws comes from the
//! `ChatSession` passed to each call, so tests can drive it with a plain
//! struct.

use crate::chat::{ChatSession, InputChange};
use crate::ui::{layout, message_input, message_list, theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: usize = 3;

#[derive(Debug, Default)]
pub struct ChatShell {
    scroll_offset: usize,
    max_scroll: usize,
    /// Last `messages_revision` the scroll effect ran for. `None` until the
    /// first render so the initial transcript also lands at the bottom.
    seen_revision: Option<u64>,
    scroll_effect_runs: u64,
    transcript_area: Rect,
}

/// `true` while a request is in flight.
pub fn is_loading<S: ChatSession + ?Sized>(session: &S) -> bool {
    session.status().is_loading()
}

impl ChatShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn max_scroll(&self) -> usize {
        self.max_scroll
    }

    /// How many times the scroll-to-bottom effect has fired.
    pub fn scroll_effect_runs(&self) -> u64 {
        self.scroll_effect_runs
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_scroll);
    }

    fn page(&self) -> usize {
        usize::from(self.transcript_area.height.saturating_sub(1)).max(1)
    }

    /// Draw header, transcript and input row for one frame.
    ///
    /// The transcript is laid out first; only then does the scroll effect
    /// read its height, so a new message is measured before the jump.
    pub fn render<S: ChatSession + ?Sized>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        session: &S,
        spinner_frame: usize,
    ) {
        let loading = is_loading(session);
        let input = session.input();
        let areas = layout::compute(area, message_input::visual_line_count(input, area.width));

        render_header(frame, areas.header, session);

        let lines = message_list::render_lines(
            session.messages(),
            loading,
            spinner_frame,
            areas.transcript.width,
        );
        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(areas.transcript.width);
        self.transcript_area = areas.transcript;
        self.sync_scroll(
            session.messages_revision(),
            content_height.saturating_sub(usize::from(areas.transcript.height)),
        );
        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        frame.render_widget(paragraph.scroll((offset, 0)), areas.transcript);

        render_separator(frame, areas.input_sep);
        message_input::render(frame, areas.input, input, loading);
        message_input::render_submit_hint(frame, areas.hint, loading);
    }

    /// Post-layout scroll effect. Fires once per revision change; a resize or
    /// an input edit only re-clamps the current offset.
    fn sync_scroll(&mut self, revision: u64, max_scroll: usize) {
        self.max_scroll = max_scroll;
        if self.seen_revision != Some(revision) {
            self.seen_revision = Some(revision);
            self.scroll_offset = max_scroll;
            self.scroll_effect_runs += 1;
            tracing::debug!(revision, max_scroll, "transcript scrolled to bottom");
        } else {
            self.scroll_offset = self.scroll_offset.min(max_scroll);
        }
    }

    /// Route a key press. Scroll keys always work; editing and submit keys
    /// are forwarded to the session only while no request is in flight.
    /// Returns whether the key was consumed.
    pub fn handle_key<S: ChatSession + ?Sized>(&mut self, session: &mut S, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageUp => {
                self.scroll_up(self.page());
                return true;
            }
            KeyCode::PageDown => {
                self.scroll_down(self.page());
                return true;
            }
            KeyCode::Up if ctrl => {
                self.scroll_up(1);
                return true;
            }
            KeyCode::Down if ctrl => {
                self.scroll_down(1);
                return true;
            }
            _ => {}
        }

        if is_loading(session) {
            return false;
        }

        if key.code == KeyCode::Enter
            && !key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
        {
            session.handle_submit();
            return true;
        }

        let change = match key.code {
            KeyCode::Enter => InputChange::Newline,
            KeyCode::Char('u') if ctrl => InputChange::Clear,
            KeyCode::Char(c) if !ctrl => InputChange::Insert(c),
            KeyCode::Backspace => InputChange::Backspace,
            KeyCode::Delete => InputChange::Delete,
            KeyCode::Left => InputChange::CursorLeft,
            KeyCode::Right => InputChange::CursorRight,
            KeyCode::Home => InputChange::CursorHome,
            KeyCode::End => InputChange::CursorEnd,
            _ => return false,
        };
        session.handle_input_change(change);
        true
    }

    /// Forward a bracketed paste, unless input is disabled.
    pub fn handle_paste<S: ChatSession + ?Sized>(&mut self, session: &mut S, text: String) -> bool {
        if is_loading(session) {
            return false;
        }
        session.handle_input_change(InputChange::InsertText(text));
        true
    }
}

fn render_header<S: ChatSession + ?Sized>(frame: &mut Frame, area: Rect, session: &S) {
    if area.height == 0 {
        return;
    }
    let status = session.status();
    let status_color = if status.is_loading() { theme::ACCENT } else { theme::DIM };
    let title = Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("  agent-chat", title),
        Span::styled(
            format!("  {}  ", message_count(session.messages().len())),
            Style::default().fg(theme::DIM),
        ),
        Span::styled(status.as_str(), Style::default().fg(status_color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn message_count(n: usize) -> String {
    if n == 1 {
        "1 message".to_owned()
    } else {
        format!("{n} messages")
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let rule = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(rule, Style::default().fg(theme::DIM)))),
        area,
    );
}
