mod chat_shell;
mod helpers;
mod replay;
mod tool_status;
