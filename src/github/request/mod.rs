mod labels_request;
mod pull_request_request;

pub use labels_request::LabelsRequest;
pub use pull_request_request::PullRequestRequest;
