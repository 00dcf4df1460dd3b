pub mod client;
pub mod request_builder;
pub mod response;

pub use client::{Client, ClientRequestBuilder};
pub use request_builder::{Get, Post, RequestBuilder, RequestType};
pub use response::Response;

use reqwest::Url;
use thiserror::Error;

/// Query parameter that carries the credential when it travels in the URL.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

const REDACTED: &str = "***";

#[derive(Debug, Error)]
pub enum Error {
    /// The remote service answered with an error status and a body.
    #[error("Github API error ({status}): {payload}")]
    RemoteApi {
        status: u16,
        payload: serde_json::Value,
    },
    /// Anything else: connection failures, malformed requests, error statuses
    /// without a body and success bodies that could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Error::RemoteApi { payload, .. } => Some(payload),
            Error::Transport(_) => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Error::RemoteApi { .. })
    }
}

/// Copy of `url` safe to log: the credential value is masked.
pub fn redacted(url: &Url) -> Url {
    if !url.query_pairs().any(|(key, _)| key == ACCESS_TOKEN_PARAM) {
        return url.clone();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == ACCESS_TOKEN_PARAM {
                (key.into_owned(), REDACTED.to_owned())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut url = url.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mask_the_access_token() {
        let url = Url::parse("https://api.github.com/repos/o/r/pulls?per_page=25&access_token=secret")
            .unwrap();

        let redacted = redacted(&url);

        assert_eq!(
            redacted.as_str(),
            "https://api.github.com/repos/o/r/pulls?per_page=25&access_token=***"
        );
        assert!(!redacted.as_str().contains("secret"));
    }

    #[test]
    fn should_leave_urls_without_token_untouched() {
        let url = Url::parse("https://api.github.com/repos/o/r/pulls?per_page=25").unwrap();

        assert_eq!(redacted(&url), url);
    }

    #[test]
    fn should_only_expose_the_payload_of_remote_errors() {
        let error = Error::RemoteApi {
            status: 404,
            payload: serde_json::json!({ "message": "Not Found" }),
        };

        assert!(error.is_remote());
        assert_eq!(
            error.payload(),
            Some(&serde_json::json!({ "message": "Not Found" }))
        );
        assert_eq!(
            error.to_string(),
            r#"Github API error (404): {"message":"Not Found"}"#
        );
    }
}
