// Slash command handling

use crate::session::{ChatRole, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Drop the loaded repository and its transcript
    Change,
    /// Reprint the transcript
    History,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "/help" => Some(Command::Help),
            "/quit" | "/exit" => Some(Command::Quit),
            "/change" => Some(Command::Change),
            "/history" => Some(Command::History),
            _ => None,
        }
    }
}

pub fn format_help() -> String {
    r#"Available commands:
  /help      - Show this help message
  /change    - Load a different repository (clears the conversation)
  /history   - Show the conversation so far
  /quit      - Exit

Paste a GitHub URL to load a repository, then ask anything about it."#
        .to_string()
}

pub fn format_history(session: &Session) -> String {
    if session.messages().is_empty() {
        return "(no messages yet)".to_string();
    }

    session
        .messages()
        .iter()
        .map(|m| match m.role {
            ChatRole::User => format!("> {}", m.content),
            ChatRole::Assistant => m.content.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
