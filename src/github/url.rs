// Repository URL parsing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

static REPO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("repository URL pattern is valid")
});

/// Owner/repository pair named by a GitHub URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Extract `owner` and `repo` from anything containing `github.com/<owner>/<repo>`.
    ///
    /// A trailing `.git` is stripped from the repository name. Anything after
    /// the repository segment (`/tree/main/...`) is ignored.
    pub fn parse(url: &str) -> Result<Self, AppError> {
        let caps = REPO_URL
            .captures(url.trim())
            .ok_or_else(|| AppError::invalid_input("Invalid GitHub URL"))?;

        let owner = caps[1].to_string();
        let repo = caps[2].strip_suffix(".git").unwrap_or(&caps[2]).to_string();

        if repo.is_empty() {
            return Err(AppError::invalid_input("Invalid GitHub URL"));
        }

        Ok(Self { owner, repo })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
