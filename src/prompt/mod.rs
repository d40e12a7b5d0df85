// Prompt assembly
//
// Builds the single user turn sent to Claude: a header naming the
// repository, the first files of the context (truncated), an omission note
// when the context holds more files than fit, and the user's question.
//
// File content is embedded verbatim. A file that itself contains a ``` fence
// will close the surrounding block early; that is accepted as-is.

use std::fmt::Write;

use crate::config::Limits;
use crate::github::RepoContext;

/// Build the prompt for `question` against `context`.
///
/// Only the first `limits.prompt_max_files` entries are considered; entries in
/// that window with absent or empty content are skipped, not replaced.
pub fn build_prompt(context: &RepoContext, question: &str, limits: &Limits) -> String {
    let mut prompt = format!(
        "You are analyzing the GitHub repository: {}/{}\n\n",
        context.owner, context.repo
    );
    prompt.push_str("Repository contents:\n\n");

    let total = context.files.len();
    for file in context.files.iter().take(limits.prompt_max_files) {
        if let Some(content) = file.text() {
            let _ = write!(
                prompt,
                "File: {}\n```\n{}\n```\n\n",
                file.path,
                truncate_chars(content, limits.prompt_max_chars)
            );
        }
    }

    if total > limits.prompt_max_files {
        let _ = write!(
            prompt,
            "\n(Note: Only showing {} of {} files to stay within limits)\n\n",
            limits.prompt_max_files, total
        );
    }

    let _ = write!(
        prompt,
        "\nUser question: {}\n\nPlease provide a helpful answer based on the repository contents above.",
        question
    );

    prompt
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
