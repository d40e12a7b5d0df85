// Interactive terminal client
//
// The thin UI over a `Session`: asks for a repository URL until one loads,
// then relays questions until the user changes repository or quits.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, IsTerminal};

use crate::session::{RepoBackend, Session, SessionError};

use super::commands::{format_help, format_history, Command};

pub struct Repl<B: RepoBackend> {
    backend: B,
    session: Session,
    editor: DefaultEditor,
    is_interactive: bool,
}

impl<B: RepoBackend> Repl<B> {
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self {
            backend,
            session: Session::new(),
            editor: DefaultEditor::new()?,
            is_interactive: io::stdout().is_terminal(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.is_interactive {
            println!("repochat v{} - chat with any repository", env!("CARGO_PKG_VERSION"));
            println!("Type /help for commands.");
        }

        loop {
            let prompt = if self.session.is_loaded() { "> " } else { "repo url> " };
            let line = match self.editor.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input);

            if let Some(command) = Command::parse(input) {
                match command {
                    Command::Quit => break,
                    Command::Help => println!("{}", format_help()),
                    Command::History => println!("{}", format_history(&self.session)),
                    Command::Change => {
                        self.session.change_repo();
                        println!("Repository cleared. Paste a new GitHub URL.");
                    }
                }
                continue;
            }

            if self.session.is_loaded() {
                self.ask(input).await;
            } else {
                self.load(input).await;
            }
        }

        if self.is_interactive {
            println!("Goodbye!");
        }
        Ok(())
    }

    async fn load(&mut self, url: &str) {
        println!("Loading repository...");
        let loaded = self.session.load_repo(&self.backend, url).await.map(|_| ());
        match loaded {
            Ok(()) => {
                if let Some(message) = self.session.messages().last() {
                    println!("{}", message.content);
                }
            }
            Err(SessionError::EmptyInput) => {}
            Err(e) => {
                tracing::debug!("Load failed: {:?}", e);
                eprintln!("{}", e);
            }
        }
    }

    async fn ask(&mut self, question: &str) {
        match self.session.ask(&self.backend, question).await {
            Ok(outcome) => {
                println!();
                println!("{}", outcome.reply.content);
                println!();
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
