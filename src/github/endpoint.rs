use reqwest::Url;

/// A GitHub REST resource together with the path segments it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    PullRequests {
        owner: &'a str,
        repo: &'a str,
    },
    PullRequestCommits {
        owner: &'a str,
        repo: &'a str,
        number: String,
    },
    Commits {
        owner: &'a str,
        repo: &'a str,
    },
    Commit {
        owner: &'a str,
        repo: &'a str,
        sha: &'a str,
    },
    IssueLabels {
        owner: &'a str,
        repo: &'a str,
        number: String,
    },
    SearchIssues,
}

impl<'a> Endpoint<'a> {
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::PullRequests { owner, repo } => vec!["repos", *owner, *repo, "pulls"],
            Endpoint::PullRequestCommits {
                owner,
                repo,
                number,
            } => vec!["repos", *owner, *repo, "pulls", number.as_str(), "commits"],
            Endpoint::Commits { owner, repo } => vec!["repos", *owner, *repo, "commits"],
            Endpoint::Commit { owner, repo, sha } => {
                vec!["repos", *owner, *repo, "commits", *sha]
            }
            Endpoint::IssueLabels {
                owner,
                repo,
                number,
            } => vec!["repos", *owner, *repo, "issues", number.as_str(), "labels"],
            Endpoint::SearchIssues => vec!["search", "issues"],
        }
    }

    /// Appends the endpoint to `base`. Each segment is percent-encoded on its own, so a
    /// value containing `/` stays a single segment.
    ///
    /// Returns `None` when a segment is empty, `.` or `..`: those would be collapsed
    /// by URL normalization and address another resource.
    ///
    /// `base` must be able to carry a path; `GithubClient::new` rejects URLs that cannot.
    pub fn url(&self, base: &Url) -> Option<Url> {
        let segments = self.segments();

        if segments
            .iter()
            .any(|segment| matches!(*segment, "" | "." | ".."))
        {
            return None;
        }

        let mut url = base.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        Some(url)
    }

    /// Relative path of the endpoint, unencoded.
    pub fn path(&self) -> String {
        self.segments().join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.github.com").unwrap()
    }

    #[test]
    fn should_build_pull_request_commits_url() {
        let endpoint = Endpoint::PullRequestCommits {
            owner: "sqren",
            repo: "backport",
            number: 42.to_string(),
        };

        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "https://api.github.com/repos/sqren/backport/pulls/42/commits"
        );
    }

    #[test]
    fn should_build_issue_labels_url() {
        let endpoint = Endpoint::IssueLabels {
            owner: "sqren",
            repo: "backport",
            number: "7".to_owned(),
        };

        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "https://api.github.com/repos/sqren/backport/issues/7/labels"
        );
    }

    #[test]
    fn should_build_search_url() {
        assert_eq!(
            Endpoint::SearchIssues.url(&base()).unwrap().as_str(),
            "https://api.github.com/search/issues"
        );
    }

    #[test]
    fn should_keep_the_base_path_prefix() {
        let base = Url::parse("https://ghe.example.com/api/v3/").unwrap();
        let endpoint = Endpoint::Commit {
            owner: "o",
            repo: "r",
            sha: "abc",
        };

        assert_eq!(
            endpoint.url(&base).unwrap().as_str(),
            "https://ghe.example.com/api/v3/repos/o/r/commits/abc"
        );
    }

    #[test]
    fn should_encode_slashes_inside_a_segment() {
        let endpoint = Endpoint::Commits {
            owner: "o",
            repo: "../r",
        };

        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "https://api.github.com/repos/o/..%2Fr/commits"
        );
    }

    #[test]
    fn should_reject_dot_and_empty_segments() {
        let dot_sha = Endpoint::Commit {
            owner: "o",
            repo: "r",
            sha: ".",
        };
        let parent_owner = Endpoint::Commits {
            owner: "..",
            repo: "r",
        };
        let empty_number = Endpoint::IssueLabels {
            owner: "o",
            repo: "r",
            number: String::new(),
        };

        assert_eq!(dot_sha.url(&base()), None);
        assert_eq!(parent_owner.url(&base()), None);
        assert_eq!(empty_number.url(&base()), None);
    }

    #[test]
    fn should_accept_dots_inside_a_segment() {
        let endpoint = Endpoint::Commits {
            owner: "o",
            repo: "my.repo",
        };

        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "https://api.github.com/repos/o/my.repo/commits"
        );
    }

    #[test]
    fn should_join_the_relative_path() {
        let endpoint = Endpoint::Commit {
            owner: "o",
            repo: "r",
            sha: "abc",
        };

        assert_eq!(endpoint.path(), "repos/o/r/commits/abc");
    }
}
