use crate::github::AccessToken;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "backport-github";

/// Settings a [`GithubClient`](crate::GithubClient) is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access_token: Option<AccessToken>,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub token_placement: TokenPlacement,
}

/// Where the access token travels in each request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPlacement {
    /// `access_token` query parameter.
    #[default]
    Query,
    /// `Authorization: Bearer` header.
    Header,
}

impl Config {
    pub fn new(access_token: Option<impl Into<AccessToken>>) -> Self {
        Config {
            access_token: access_token.map(Into::into),
            api_url: Config::default_api_url(),
            user_agent: Config::default_user_agent(),
            token_placement: TokenPlacement::default(),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        let config = serde_yaml::from_str::<Config>(&config_string)
            .with_context(|| format!("Cannot parse config file {}", path.display()))?;

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_token_placement(mut self, token_placement: TokenPlacement) -> Self {
        self.token_placement = token_placement;
        self
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(None::<AccessToken>)
    }
}
