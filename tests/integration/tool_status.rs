use crate::helpers::render_line;
use agent_chat_tui::chat::ToolInvocation;
use agent_chat_tui::ui::theme;
use agent_chat_tui::ui::tool_status::render_tool_status;
use serde_json::{Value, json};

fn invocation(tool_name: &str, args: Value, state: &str, result: Option<Value>) -> ToolInvocation {
    serde_json::from_value(json!({
        "toolCallId": "1",
        "toolName": tool_name,
        "args": args,
        "state": state,
        "result": result,
    }))
    .unwrap()
}

fn pill(inv: &ToolInvocation) -> String {
    render_line(render_tool_status(inv, 0, 80), 80)
}

#[test]
fn shows_created_for_completed_create() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
        "result",
        Some(json!("Success")),
    );
    assert!(pill(&inv).contains("Created App.jsx"));
}

#[test]
fn shows_creating_for_in_progress_create() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/components/Button.tsx" }),
        "call",
        None,
    );
    assert!(pill(&inv).contains("Creating Button.tsx"));
}

#[test]
fn shows_edited_and_editing_for_str_replace() {
    let done = invocation(
        "str_replace_editor",
        json!({ "command": "str_replace", "path": "/App.jsx", "old_str": "foo", "new_str": "bar" }),
        "result",
        Some(json!("Success")),
    );
    assert!(pill(&done).contains("Edited App.jsx"));

    let pending = invocation(
        "str_replace_editor",
        json!({ "command": "str_replace", "path": "/Card.jsx" }),
        "call",
        None,
    );
    assert!(pill(&pending).contains("Editing Card.jsx"));
}

#[test]
fn shows_updated_for_completed_insert() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "insert", "path": "/App.jsx", "insert_line": 5 }),
        "result",
        Some(json!("Success")),
    );
    assert!(pill(&inv).contains("Updated App.jsx"));
}

#[test]
fn shows_viewed_for_completed_view() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "view", "path": "/App.jsx" }),
        "result",
        Some(json!("file contents")),
    );
    assert!(pill(&inv).contains("Viewed App.jsx"));
}

#[test]
fn shows_renamed_for_completed_rename() {
    let inv = invocation(
        "file_manager",
        json!({ "command": "rename", "path": "/Button.jsx", "new_path": "/components/Button.jsx" }),
        "result",
        Some(json!({ "success": true })),
    );
    assert!(pill(&inv).contains("Renamed Button.jsx to Button.jsx"));
}

#[test]
fn shows_deleted_and_deleting_for_delete() {
    let args = json!({ "command": "delete", "path": "/old-file.tsx" });
    let done = invocation("file_manager", args.clone(), "result", Some(json!({ "success": true })));
    assert!(pill(&done).contains("Deleted old-file.tsx"));
    let pending = invocation("file_manager", args, "call", None);
    assert!(pill(&pending).contains("Deleting old-file.tsx"));
}

#[test]
fn completed_invocation_shows_dot_not_spinner() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
        "result",
        Some(json!("Success")),
    );
    let text = pill(&inv);
    assert!(text.contains(theme::PILL_DONE_DOT), "{text}");
    assert!(!text.contains(theme::spinner(0)), "{text}");
}

#[test]
fn in_progress_invocation_shows_spinner() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
        "call",
        None,
    );
    let text = pill(&inv);
    assert!(text.contains(theme::spinner(0)), "{text}");
    assert!(!text.contains(theme::PILL_DONE_DOT), "{text}");
}

#[test]
fn result_state_with_empty_result_renders_pending() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
        "result",
        Some(json!("")),
    );
    let text = pill(&inv);
    assert!(text.contains("Creating App.jsx"), "{text}");
    assert!(text.contains(theme::spinner(0)), "{text}");
}

#[test]
fn falls_back_to_tool_name_for_unknown_tools() {
    let done = invocation("unknown_tool", json!({}), "result", Some(json!("done")));
    assert!(pill(&done).contains("unknown_tool"));
    let pending = invocation("unknown_tool", json!({}), "call", None);
    assert!(pill(&pending).contains("unknown_tool"));
}

#[test]
fn handles_missing_path_gracefully() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create" }),
        "result",
        Some(json!("Success")),
    );
    assert!(pill(&inv).contains("Created file"));
}

#[test]
fn extracts_file_name_from_nested_path() {
    let inv = invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/components/ui/Card.tsx" }),
        "result",
        Some(json!("Success")),
    );
    assert!(pill(&inv).contains("Created Card.tsx"));
}
