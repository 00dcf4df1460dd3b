use super::response::CommitResponse;
use serde::{Deserialize, Serialize};

const SHORT_SHA_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub message: String,
    pub sha: String,
}

impl CommitSummary {
    pub fn new(message: impl Into<String>, sha: impl Into<String>) -> Self {
        CommitSummary {
            message: message.into(),
            sha: sha.into(),
        }
    }

    /// `#<short sha> <first line>`, as listed for a pull request.
    pub(crate) fn tagged(commit: CommitResponse) -> Self {
        let message = format!(
            "#{} {}",
            short_sha(&commit.sha),
            first_line(&commit.commit.message)
        );

        CommitSummary::new(message, commit.sha)
    }

    /// First line of the message only.
    pub(crate) fn headline(commit: CommitResponse) -> Self {
        CommitSummary::new(first_line(&commit.commit.message), commit.sha)
    }

    /// The message exactly as recorded.
    pub(crate) fn full(commit: CommitResponse) -> Self {
        CommitSummary::new(commit.commit.message, commit.sha)
    }
}

/// Text before the first line break, trimmed.
pub fn first_line(message: &str) -> &str {
    message
        .split_once('\n')
        .map_or(message, |(line, _)| line)
        .trim()
}

/// The first 8 characters of `sha`, or all of it when shorter.
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LENGTH) {
        Some((end, _)) => &sha[..end],
        None => sha,
    }
}
