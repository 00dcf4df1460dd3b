use super::{endpoint::Endpoint, AccessToken};
use crate::{
    config::{Config, TokenPlacement},
    http::{Client, ClientRequestBuilder, Get, Post, RequestBuilder, RequestType, ACCESS_TOKEN_PARAM},
};
use anyhow::{bail, Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Url,
};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Immutable GitHub REST client. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: Client,
    api_url: Url,
    headers: HeaderMap,
    access_token: Option<AccessToken>,
    token_placement: TokenPlacement,
}

impl GithubClient {
    pub fn new(config: Config) -> Result<GithubClient> {
        let api_url = Url::parse(&config.api_url)
            .with_context(|| format!("Invalid Github API url {}", config.api_url))?;

        if api_url.cannot_be_a_base() {
            bail!("Github API url {} cannot carry a path", api_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            GITHUB_API_VERSION_HEADER,
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .with_context(|| format!("Invalid user agent {}", config.user_agent))?,
        );

        let http = reqwest::Client::builder()
            .build()
            .context("Cannot build the http client")?;

        log::debug!("Github client for {}", api_url);

        Ok(GithubClient {
            http: http.into(),
            api_url,
            headers,
            access_token: config.access_token,
            token_placement: config.token_placement,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub(crate) fn get(&self, endpoint: &Endpoint) -> RequestBuilder<Get> {
        let request = match endpoint.url(&self.api_url) {
            Some(url) => self.http.get(url),
            None => self.http.get(rejected(endpoint)),
        };

        self.authorize(request)
    }

    pub(crate) fn post(&self, endpoint: &Endpoint) -> RequestBuilder<Post> {
        let request = match endpoint.url(&self.api_url) {
            Some(url) => self.http.post(url),
            None => self.http.post(rejected(endpoint)),
        };

        self.authorize(request)
    }

    fn authorize<T: RequestType>(&self, request: RequestBuilder<T>) -> RequestBuilder<T> {
        let request = request.headers(self.headers.clone());

        match (&self.access_token, self.token_placement) {
            (None, _) => request,
            (Some(token), TokenPlacement::Query) => {
                request.query(ACCESS_TOKEN_PARAM, token.expose())
            }
            (Some(token), TokenPlacement::Header) => request.bearer_auth(token.expose()),
        }
    }
}

/// Relative path of an endpoint that cannot be addressed. It has no base, so sending
/// it fails with a builder error before anything reaches the network.
fn rejected(endpoint: &Endpoint) -> String {
    let path = endpoint.path();
    log::error!("{} has an empty or dot path segment", path);

    path
}
