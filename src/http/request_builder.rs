use super::{client::Client, redacted, response::Response, Error};
use reqwest::{header::HeaderMap, IntoUrl, Method, Request};
use serde::{de::DeserializeOwned, Serialize};

pub trait RequestType {
    const METHOD: Method;
}
pub struct Get;
pub struct Post;

impl RequestType for Get {
    const METHOD: Method = Method::GET;
}
impl RequestType for Post {
    const METHOD: Method = Method::POST;
}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl IntoUrl) -> RequestBuilder<Get> {
        RequestBuilder::new(client, url)
    }

    pub fn post(client: Client, url: impl IntoUrl) -> RequestBuilder<Post> {
        RequestBuilder::new(client, url)
    }
}

/// A request whose method is fixed by its type: only `Post` requests can carry a body.
///
/// Bodies that fail to serialize are reported by `send`.
pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    inner: reqwest::RequestBuilder,
    log_level: log::Level,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    fn new(client: Client, url: impl IntoUrl) -> Self {
        let inner = client.request(T::METHOD, url);

        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            inner,
            log_level: log::Level::Debug,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.inner = self.inner.query(&[(key, value.to_string())]);
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.inner = self.inner.headers(headers);
        self
    }

    pub fn bearer_auth(mut self, token: impl std::fmt::Display) -> Self {
        self.inner = self.inner.bearer_auth(token);
        self
    }

    /// Level at which the request line is logged when sent.
    pub fn log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    pub async fn send<R>(self) -> Result<Response<R>, Error>
    where
        R: DeserializeOwned,
    {
        let request = self.inner.build()?;

        log::log!(self.log_level, "{}", request_line(&request));

        let response = self.client.execute(request).await?;

        Response::read(response).await
    }
}

impl RequestBuilder<Post> {
    pub fn json<B>(mut self, body: &B) -> Self
    where
        B: Serialize + ?Sized,
    {
        self.inner = self.inner.json(body);
        self
    }
}

/// `METHOD url` with the credential masked.
fn request_line(request: &Request) -> String {
    format!("{} {}", request.method(), redacted(request.url()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ACCESS_TOKEN_PARAM;

    fn client() -> Client {
        reqwest::Client::new().into()
    }

    #[test]
    fn should_log_the_request_line_without_the_token() {
        let request = InitBuilder::get(client(), "https://api.github.com/repos/o/r/pulls")
            .query(ACCESS_TOKEN_PARAM, "ghp_secret")
            .query("per_page", 25)
            .inner
            .build()
            .unwrap();

        let line = request_line(&request);

        assert_eq!(
            line,
            "GET https://api.github.com/repos/o/r/pulls?access_token=***&per_page=25"
        );
        assert!(!line.contains("ghp_secret"));
    }

    #[test]
    fn should_log_post_requests_with_their_method() {
        let request = InitBuilder::post(client(), "https://api.github.com/repos/o/r/pulls")
            .json(&serde_json::json!({ "title": "t" }))
            .inner
            .build()
            .unwrap();

        assert_eq!(
            request_line(&request),
            "POST https://api.github.com/repos/o/r/pulls"
        );
    }

    #[tokio::test]
    async fn should_report_an_unparsable_url_when_sending() {
        let error = InitBuilder::get(client(), "repos/o/r/commits/.")
            .send::<serde_json::Value>()
            .await
            .unwrap_err();

        match error {
            Error::Transport(cause) => assert!(cause.is_builder()),
            other => panic!("expected a transport error, got {:?}", other),
        }
    }
}
