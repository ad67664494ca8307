use agent_chat_tui::chat::{ChatMessage, ChatSession, ChatStatus, InputChange, InputState};
use agent_chat_tui::ui::ChatShell;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Plain-struct chat state that records what the shell forwards to it.
#[derive(Debug, Default)]
pub struct FakeSession {
    pub messages: Vec<ChatMessage>,
    pub revision: u64,
    pub input: InputState,
    pub status: ChatStatus,
    pub changes: Vec<InputChange>,
    pub submits: usize,
}

impl FakeSession {
    pub fn with_status(status: ChatStatus) -> Self {
        Self { status, ..Self::default() }
    }

    /// Append a message the way a provider would: new message, new revision.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }
}

impl ChatSession for FakeSession {
    fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn messages_revision(&self) -> u64 {
        self.revision
    }

    fn input(&self) -> &InputState {
        &self.input
    }

    fn status(&self) -> ChatStatus {
        self.status
    }

    fn handle_input_change(&mut self, change: InputChange) {
        self.input.apply(&change);
        self.changes.push(change);
    }

    fn handle_submit(&mut self) {
        self.submits += 1;
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Buffer contents row by row, trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..area.width {
                if let Some(cell) = buf.cell((area.x + x, area.y + y)) {
                    line.push_str(cell.symbol());
                }
            }
            line.trim_end().to_owned()
        })
        .collect()
}

pub fn render_shell(
    shell: &mut ChatShell,
    session: &FakeSession,
    width: u16,
    height: u16,
) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            shell.render(f, area, session, 0);
        })
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

pub fn render_line(line: Line<'static>, width: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    terminal.draw(|f| f.render_widget(Paragraph::new(line), f.area())).unwrap();
    buffer_lines(terminal.backend().buffer()).remove(0)
}
