// CLI module
// Terminal client for a running repochat server

mod commands;
mod repl;

pub use commands::{format_help, format_history, Command};
pub use repl::Repl;
