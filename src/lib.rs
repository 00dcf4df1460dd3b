//! Thin client for the handful of GitHub REST calls a backport tool needs:
//! listing pull requests and commits, creating pull requests and labelling them.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use backport_github::{Config, GithubClient};
//!
//! let client = GithubClient::new(Config::new(Some("ghp_token")))?;
//! let commits = client.repo("sqren", "backport").commits(Some("sqren")).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod github;
pub mod http;
pub mod logger;

pub use config::{Config, TokenPlacement};
pub use github::{
    first_line, AccessToken, CommitSummary, GithubClient, LabelsRequest, PullRequestRequest,
    RepositoryHandler,
};
pub use http::{Error, Response};
