use crate::{
    github::{
        commit::CommitSummary,
        endpoint::Endpoint,
        github_client::GithubClient,
        response::{CommitResponse, PullRequest, SearchIssuesResponse},
    },
    http::{Error, Response},
};
use serde::Serialize;
use std::fmt::Display;

const PULL_REQUEST_COMMITS_PAGE_SIZE: u32 = 20;
const PULL_REQUESTS_PAGE_SIZE: u32 = 25;
const COMMITS_PAGE_SIZE: u32 = 20;
const AUTHOR_COMMITS_PAGE_SIZE: u32 = 5;

/// Operations on a single `owner/repo`.
pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Up to 20 commits of a pull request, each message tagged with its short sha.
    pub async fn pull_request_commits(
        &self,
        number: impl Display,
    ) -> Result<Vec<CommitSummary>, Error> {
        let endpoint = Endpoint::PullRequestCommits {
            owner: &self.owner,
            repo: &self.repo,
            number: number.to_string(),
        };

        let commits = self
            .client
            .get(&endpoint)
            .query("per_page", PULL_REQUEST_COMMITS_PAGE_SIZE)
            .send::<Vec<CommitResponse>>()
            .await?
            .collect();

        Ok(commits.into_iter().map(CommitSummary::tagged).collect())
    }

    /// Numbers of up to 25 pull requests, sorted as strings ("10" before "2").
    pub async fn pull_request_numbers(&self) -> Result<Vec<String>, Error> {
        let endpoint = Endpoint::PullRequests {
            owner: &self.owner,
            repo: &self.repo,
        };

        let pull_requests = self
            .client
            .get(&endpoint)
            .query("per_page", PULL_REQUESTS_PAGE_SIZE)
            .log_level(log::Level::Info)
            .send::<Vec<PullRequest>>()
            .await?
            .collect();

        let mut numbers: Vec<String> = pull_requests
            .iter()
            .map(|pull_request| pull_request.number.to_string())
            .collect();
        numbers.sort();

        Ok(numbers)
    }

    /// Latest commits of the repository: 20 of them, or 5 when filtered by `author`.
    /// Messages are reduced to their first line.
    pub async fn commits(&self, author: Option<&str>) -> Result<Vec<CommitSummary>, Error> {
        let endpoint = Endpoint::Commits {
            owner: &self.owner,
            repo: &self.repo,
        };

        let request = self.client.get(&endpoint);
        let request = match author.filter(|author| !author.is_empty()) {
            Some(author) => request
                .query("per_page", AUTHOR_COMMITS_PAGE_SIZE)
                .query("author", author),
            None => request.query("per_page", COMMITS_PAGE_SIZE),
        };

        let commits = request.send::<Vec<CommitResponse>>().await?.collect();

        Ok(commits.into_iter().map(CommitSummary::headline).collect())
    }

    /// A single commit with its full message.
    pub async fn commit(&self, sha: &str) -> Result<CommitSummary, Error> {
        let endpoint = Endpoint::Commit {
            owner: &self.owner,
            repo: &self.repo,
            sha,
        };

        let commit = self
            .client
            .get(&endpoint)
            .send::<CommitResponse>()
            .await?
            .collect();

        Ok(CommitSummary::full(commit))
    }

    /// Sends `payload` as is and returns the created pull request as is.
    pub async fn create_pull_request<B>(
        &self,
        payload: &B,
    ) -> Result<Response<serde_json::Value>, Error>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = Endpoint::PullRequests {
            owner: &self.owner,
            repo: &self.repo,
        };

        self.client.post(&endpoint).json(payload).send().await
    }

    pub async fn add_labels<B>(
        &self,
        number: impl Display,
        labels: &B,
    ) -> Result<Response<serde_json::Value>, Error>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = Endpoint::IssueLabels {
            owner: &self.owner,
            repo: &self.repo,
            number: number.to_string(),
        };

        self.client.post(&endpoint).json(labels).send().await
    }

    /// Number of the first issue search hit for `sha` in this repository, if any.
    pub async fn pull_request_by_commit(&self, sha: &str) -> Result<Option<u64>, Error> {
        let query = format!("repo:{}/{} {}", self.owner, self.repo, sha);

        let search = self
            .client
            .get(&Endpoint::SearchIssues)
            .query("q", query)
            .send::<SearchIssuesResponse>()
            .await?
            .collect();

        Ok(search.items.into_iter().next().and_then(|item| item.number))
    }
}
