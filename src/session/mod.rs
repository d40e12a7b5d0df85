// Chat session
//
// Client-side state for one user: which repository is loaded and the
// transcript so far. Lives only in memory.
//
//   NoRepoLoaded --load_repo ok--> RepoLoaded --ask--> RepoLoaded
//   NoRepoLoaded --load_repo err--> NoRepoLoaded
//   RepoLoaded --change_repo--> NoRepoLoaded
//
// Every operation takes `&mut self` across its request, so a session can
// never have two requests outstanding.

mod backend;

pub use backend::{HttpBackend, RepoBackend};

use serde::{Deserialize, Serialize};

use crate::github::RepoContext;

/// Assistant text appended when a question fails
pub const ASK_FAILED_MESSAGE: &str = "Sorry, I encountered an error processing your question.";

/// A chat message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoRepoLoaded,
    RepoLoaded(RepoContext),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("a repository is already loaded; change repository first")]
    AlreadyLoaded,

    #[error("no repository loaded")]
    NoRepoLoaded,

    #[error("Error loading repository. Please check the URL and try again.")]
    LoadFailed(anyhow::Error),
}

/// Outcome of one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    /// Assistant message appended to the transcript
    pub reply: ChatMessage,
    /// False when the reply is the failure notice
    pub answered: bool,
}

pub struct Session {
    state: SessionState,
    messages: Vec<ChatMessage>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoRepoLoaded,
            messages: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SessionState::RepoLoaded(_))
    }

    pub fn context(&self) -> Option<&RepoContext> {
        match &self.state {
            SessionState::RepoLoaded(context) => Some(context),
            SessionState::NoRepoLoaded => None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Load a repository. On failure the session stays unloaded.
    pub async fn load_repo(
        &mut self,
        backend: &dyn RepoBackend,
        repo_url: &str,
    ) -> Result<&RepoContext, SessionError> {
        let repo_url = repo_url.trim();
        if repo_url.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.is_loaded() {
            return Err(SessionError::AlreadyLoaded);
        }

        let context = backend
            .load_repo(repo_url)
            .await
            .map_err(SessionError::LoadFailed)?;

        tracing::info!(
            "Loaded {} with {} files",
            context.full_name(),
            context.files.len()
        );

        self.messages = vec![ChatMessage::assistant(format!(
            "Repository loaded! I can now answer questions about {}. It has {} files.",
            context.full_name(),
            context.files.len()
        ))];
        self.state = SessionState::RepoLoaded(context);

        self.context().ok_or(SessionError::NoRepoLoaded)
    }

    /// Ask a question about the loaded repository.
    ///
    /// A backend failure does not fail the call: the failure notice is
    /// appended as the assistant's reply so the transcript is kept.
    pub async fn ask(
        &mut self,
        backend: &dyn RepoBackend,
        question: &str,
    ) -> Result<AskOutcome, SessionError> {
        if question.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        let SessionState::RepoLoaded(context) = &self.state else {
            return Err(SessionError::NoRepoLoaded);
        };

        self.messages.push(ChatMessage::user(question));

        let (reply, answered) = match backend.ask(question, context).await {
            Ok(text) => (ChatMessage::assistant(text), true),
            Err(e) => {
                tracing::warn!("Question failed: {:#}", e);
                (ChatMessage::assistant(ASK_FAILED_MESSAGE), false)
            }
        };

        self.messages.push(reply.clone());
        Ok(AskOutcome { reply, answered })
    }

    /// Discard the loaded repository and the transcript
    pub fn change_repo(&mut self) {
        self.state = SessionState::NoRepoLoaded;
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepoFile;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeBackend {
        fail_load: bool,
        fail_ask: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RepoBackend for FakeBackend {
        async fn load_repo(&self, _repo_url: &str) -> Result<RepoContext> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                anyhow::bail!("Failed to fetch repository");
            }
            Ok(RepoContext {
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
                files: vec![RepoFile::file("README.md", "# Widgets")],
            })
        }

        async fn ask(&self, message: &str, context: &RepoContext) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_ask {
                anyhow::bail!("Failed to get response from Claude");
            }
            Ok(format!("{} about {}", message, context.full_name()))
        }
    }

    #[tokio::test]
    async fn test_load_then_ask() {
        let backend = FakeBackend::default();
        let mut session = Session::new();

        let context = session
            .load_repo(&backend, "https://github.com/acme/widgets")
            .await
            .unwrap();
        assert_eq!(context.files.len(), 1);
        assert!(session.is_loaded());
        assert_eq!(
            session.messages(),
            &[ChatMessage::assistant(
                "Repository loaded! I can now answer questions about acme/widgets. It has 1 files."
            )]
        );

        let outcome = session.ask(&backend, "Why?").await.unwrap();
        assert!(outcome.answered);
        assert_eq!(outcome.reply.content, "Why? about acme/widgets");
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1], ChatMessage::user("Why?"));
    }

    #[tokio::test]
    async fn test_failed_load_stays_unloaded() {
        let backend = FakeBackend {
            fail_load: true,
            ..Default::default()
        };
        let mut session = Session::new();

        let err = session.load_repo(&backend, "https://github.com/acme/widgets").await;
        assert!(matches!(err, Err(SessionError::LoadFailed(_))));
        assert_eq!(session.state(), &SessionState::NoRepoLoaded);
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_failed_ask_appends_notice_and_keeps_history() {
        let backend = FakeBackend {
            fail_ask: true,
            ..Default::default()
        };
        let mut session = Session::new();
        session.load_repo(&backend, "github.com/acme/widgets").await.unwrap();

        let outcome = session.ask(&backend, "Hello?").await.unwrap();
        assert!(!outcome.answered);
        assert_eq!(outcome.reply, ChatMessage::assistant(ASK_FAILED_MESSAGE));
        assert_eq!(session.messages().len(), 3);
        assert!(session.is_loaded());
    }

    #[tokio::test]
    async fn test_blank_input_and_wrong_state_make_no_calls() {
        let backend = FakeBackend::default();
        let mut session = Session::new();

        assert!(matches!(
            session.load_repo(&backend, "   ").await,
            Err(SessionError::EmptyInput)
        ));
        assert!(matches!(
            session.ask(&backend, "anything").await,
            Err(SessionError::NoRepoLoaded)
        ));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);

        session.load_repo(&backend, "github.com/acme/widgets").await.unwrap();
        assert!(matches!(
            session.ask(&backend, "  ").await,
            Err(SessionError::EmptyInput)
        ));
        assert!(matches!(
            session.load_repo(&backend, "github.com/acme/other").await,
            Err(SessionError::AlreadyLoaded)
        ));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_change_repo_discards_context_and_history() {
        let backend = FakeBackend::default();
        let mut session = Session::new();
        session.load_repo(&backend, "github.com/acme/widgets").await.unwrap();
        session.ask(&backend, "q").await.unwrap();

        session.change_repo();
        assert_eq!(session.state(), &SessionState::NoRepoLoaded);
        assert!(session.context().is_none());
        assert!(session.messages().is_empty());
    }
}
