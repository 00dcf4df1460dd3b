mod commit_response;
mod pull_request_response;
mod search_response;

pub use commit_response::CommitResponse;
pub use pull_request_response::PullRequest;
pub use search_response::SearchIssuesResponse;
