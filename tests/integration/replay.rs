use agent_chat_tui::app::{
    App, ReplayEvent, ScriptedSession, ScriptedTurn, Transcript, handle_replay_event,
};
use agent_chat_tui::chat::{ChatSession, ChatStatus, InputChange};
use agent_chat_tui::error::AppError;
use pretty_assertions::assert_eq;
use std::io::Write as _;
use std::time::Duration;

#[test]
fn load_missing_transcript_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Transcript::load(&path).unwrap_err();
    assert_eq!(err, AppError::TranscriptNotFound { path });
    assert_eq!(err.exit_code(), AppError::TRANSCRIPT_NOT_FOUND_EXIT_CODE);
}

#[test]
fn load_invalid_transcript_reports_reason() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"turns\": 3}}").unwrap();
    let err = Transcript::load(file.path()).unwrap_err();
    assert!(matches!(err, AppError::TranscriptInvalid { .. }), "{err:?}");
}

#[test]
fn load_valid_transcript() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"turns": [{{"reply": "hi", "tools": [{{"toolCallId": "1", "toolName": "file_manager",
            "args": {{"command": "rename", "path": "/a.ts", "new_path": "/b/a.ts"}}}}]}}]}}"#
    )
    .unwrap();
    let transcript = Transcript::load(file.path()).unwrap();
    assert_eq!(transcript.turns.len(), 1);
    assert!(!transcript.turns[0].tools[0].is_complete());
}

#[test]
fn shipped_demo_transcript_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/transcript.json");
    let transcript = Transcript::load(&path).unwrap();
    assert_eq!(transcript.turns.len(), 3);
    assert!(transcript.turns[0].tools.iter().all(|inv| inv.is_complete()));
    // An empty result stays pending.
    assert!(transcript.turns[1].tools.iter().all(|inv| !inv.is_complete()));
    let statuses: Vec<ChatStatus> =
        transcript.turns.iter().map(ScriptedTurn::end_status).collect();
    assert_eq!(statuses, vec![ChatStatus::Idle, ChatStatus::Idle, ChatStatus::Error]);
}

#[tokio::test]
async fn submitted_turn_streams_into_app() {
    let session = ScriptedSession::new(Transcript::demo(), Duration::ZERO);
    let mut app = App::new(session);
    app.session.handle_input_change(InputChange::InsertText("make a button".to_owned()));
    app.session.handle_submit();
    assert_eq!(app.session.status(), ChatStatus::Submitted);
    assert!(app.is_animating());

    let mut saw_streaming = false;
    while let Some(event) = app.session.event_rx.recv().await {
        let finished = matches!(event, ReplayEvent::Finished(_));
        handle_replay_event(&mut app, event);
        saw_streaming |= app.session.status() == ChatStatus::Streaming;
        if finished {
            break;
        }
    }

    assert!(saw_streaming);
    assert_eq!(app.session.status(), ChatStatus::Idle);
    assert!(!app.is_animating());
    let reply = &app.session.messages()[1];
    assert_eq!(reply.content, Transcript::demo().turns[0].reply);
    assert!(reply.tool_invocations.iter().all(|inv| inv.is_complete()));
}

#[tokio::test]
async fn submit_while_streaming_is_ignored() {
    let session = ScriptedSession::new(Transcript::demo(), Duration::from_secs(60));
    let mut app = App::new(session);
    app.session.handle_input_change(InputChange::InsertText("first".to_owned()));
    app.session.handle_submit();
    app.session.handle_input_change(InputChange::InsertText("second".to_owned()));
    app.session.handle_submit();
    assert_eq!(app.session.messages().len(), 1);
    assert_eq!(app.session.input().text(), "second");
}
