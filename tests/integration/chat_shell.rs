use crate::helpers::{FakeSession, key, render_shell};
use agent_chat_tui::chat::{ChatMessage, ChatStatus, InputChange, InputState, ToolInvocation};
use agent_chat_tui::ui::ChatShell;
use agent_chat_tui::ui::message_input::{
    PLACEHOLDER_DISABLED, PLACEHOLDER_ENABLED, SUBMIT_HINT_DISABLED, SUBMIT_HINT_ENABLED,
};
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn long_transcript(session: &mut FakeSession, count: usize) {
    for i in 0..count {
        session.push(ChatMessage::user(format!("message {i}")));
    }
}

#[test]
fn renders_transcript_and_input_row() {
    let mut session = FakeSession::default();
    session.push(ChatMessage::user("Hello"));
    session.push(ChatMessage::assistant("Hi there!"));
    let screen = render_shell(&mut ChatShell::new(), &session, 60, 16);
    let joined = screen.join("\n");
    assert!(joined.contains("Hello"), "{joined}");
    assert!(joined.contains("Hi there!"), "{joined}");
    assert!(joined.contains(PLACEHOLDER_ENABLED), "{joined}");
    assert!(joined.contains("2 messages"), "{joined}");
}

#[test]
fn renders_draft_text_in_input_row() {
    let mut session = FakeSession::default();
    session.input = InputState::from_text("Test input");
    let screen = render_shell(&mut ChatShell::new(), &session, 60, 12);
    assert!(screen.iter().any(|l| l.contains("❯ Test input")), "{screen:#?}");
}

#[test]
fn renders_tool_pills_inside_assistant_message() {
    let mut session = FakeSession::default();
    let mut reply = ChatMessage::assistant("Working on it");
    reply.tool_invocations.push(ToolInvocation::call(
        "t1",
        "file_manager",
        json!({ "command": "delete", "path": "/old.css" }),
    ));
    session.push(reply);
    let screen = render_shell(&mut ChatShell::new(), &session, 60, 12);
    assert!(screen.iter().any(|l| l.contains("Deleting old.css")), "{screen:#?}");
}

#[test]
fn idle_status_enables_input_and_submit() {
    let mut session = FakeSession::with_status(ChatStatus::Idle);
    let mut shell = ChatShell::new();
    let screen = render_shell(&mut shell, &session, 100, 12);
    assert!(screen.iter().any(|l| l.contains(SUBMIT_HINT_ENABLED)), "{screen:#?}");

    assert!(shell.handle_key(&mut session, key(KeyCode::Char('a'))));
    assert!(shell.handle_key(&mut session, key(KeyCode::Enter)));
    assert_eq!(session.changes, vec![InputChange::Insert('a')]);
    assert_eq!(session.submits, 1);
}

#[test]
fn submitted_and_streaming_disable_input_and_submit() {
    for status in [ChatStatus::Submitted, ChatStatus::Streaming] {
        let mut session = FakeSession::with_status(status);
        let mut shell = ChatShell::new();
        let screen = render_shell(&mut shell, &session, 100, 12);
        let joined = screen.join("\n");
        assert!(joined.contains(SUBMIT_HINT_DISABLED), "{status:?}: {joined}");
        assert!(joined.contains(PLACEHOLDER_DISABLED), "{status:?}: {joined}");

        assert!(!shell.handle_key(&mut session, key(KeyCode::Char('a'))));
        assert!(!shell.handle_key(&mut session, key(KeyCode::Enter)));
        assert!(!shell.handle_paste(&mut session, "pasted".to_owned()));
        assert!(session.changes.is_empty());
        assert_eq!(session.submits, 0);
    }
}

#[test]
fn error_status_is_not_loading() {
    let mut session = FakeSession::with_status(ChatStatus::Error);
    let mut shell = ChatShell::new();
    assert!(shell.handle_key(&mut session, key(KeyCode::Enter)));
    assert_eq!(session.submits, 1);
}

#[test]
fn loading_shows_thinking_line() {
    let mut session = FakeSession::with_status(ChatStatus::Streaming);
    session.push(ChatMessage::user("hi"));
    let screen = render_shell(&mut ChatShell::new(), &session, 60, 12);
    assert!(screen.iter().any(|l| l.contains("Thinking...")), "{screen:#?}");
}

#[test]
fn first_render_lands_at_bottom() {
    let mut session = FakeSession::default();
    long_transcript(&mut session, 20);
    let mut shell = ChatShell::new();
    let screen = render_shell(&mut shell, &session, 40, 12);
    assert!(shell.max_scroll() > 0);
    assert_eq!(shell.scroll_offset(), shell.max_scroll());
    assert_eq!(shell.scroll_effect_runs(), 1);
    assert!(screen.iter().any(|l| l.contains("message 19")), "{screen:#?}");
    assert!(!screen.iter().any(|l| l.contains("message 0")), "{screen:#?}");
}

#[test]
fn appending_a_message_scrolls_once() {
    let mut session = FakeSession::default();
    long_transcript(&mut session, 20);
    let mut shell = ChatShell::new();
    render_shell(&mut shell, &session, 40, 12);
    shell.scroll_up(10);

    session.push(ChatMessage::assistant("newest reply"));
    let screen = render_shell(&mut shell, &session, 40, 12);
    assert_eq!(shell.scroll_effect_runs(), 2);
    assert_eq!(shell.scroll_offset(), shell.max_scroll());
    assert!(screen.iter().any(|l| l.contains("newest reply")), "{screen:#?}");

    // Re-rendering the same messages does not fire again
    render_shell(&mut shell, &session, 40, 12);
    assert_eq!(shell.scroll_effect_runs(), 2);
}

#[test]
fn unrelated_changes_do_not_rescroll() {
    let mut session = FakeSession::default();
    long_transcript(&mut session, 20);
    let mut shell = ChatShell::new();
    render_shell(&mut shell, &session, 40, 12);
    shell.scroll_up(4);
    let parked = shell.scroll_offset();

    shell.handle_key(&mut session, key(KeyCode::Char('x')));
    render_shell(&mut shell, &session, 40, 12);
    session.status = ChatStatus::Submitted;
    render_shell(&mut shell, &session, 40, 12);

    assert_eq!(shell.scroll_effect_runs(), 1);
    assert_eq!(shell.scroll_offset(), parked);
}

#[test]
fn page_keys_scroll_even_while_loading() {
    let mut session = FakeSession::with_status(ChatStatus::Streaming);
    long_transcript(&mut session, 20);
    let mut shell = ChatShell::new();
    render_shell(&mut shell, &session, 40, 12);
    let bottom = shell.scroll_offset();

    assert!(shell.handle_key(&mut session, key(KeyCode::PageUp)));
    assert!(shell.scroll_offset() < bottom);
    assert!(shell.handle_key(&mut session, key(KeyCode::PageDown)));
    assert_eq!(shell.scroll_offset(), bottom);
}
