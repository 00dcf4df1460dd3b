use super::request_builder::{Get, InitBuilder, Post, RequestBuilder};
use reqwest::IntoUrl;
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Deref for Client {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<reqwest::Client> for Client {
    fn from(client: reqwest::Client) -> Self {
        Client(client)
    }
}

/// Urls that fail to parse are reported by `send` as transport errors.
pub trait ClientRequestBuilder {
    fn get(&self, url: impl IntoUrl) -> RequestBuilder<Get>;
    fn post(&self, url: impl IntoUrl) -> RequestBuilder<Post>;
}

impl ClientRequestBuilder for Client {
    fn get(&self, url: impl IntoUrl) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), url)
    }

    fn post(&self, url: impl IntoUrl) -> RequestBuilder<Post> {
        InitBuilder::post(self.clone(), url)
    }
}
