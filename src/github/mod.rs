mod access_token;
pub mod commit;
mod endpoint;
pub mod github_client;
mod handler;
pub mod request;
mod response;

pub use access_token::AccessToken;
pub use commit::{first_line, short_sha, CommitSummary};
pub use endpoint::Endpoint;
pub use github_client::GithubClient;
pub use handler::repository_handler::RepositoryHandler;
pub use request::{LabelsRequest, PullRequestRequest};
