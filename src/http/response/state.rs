use crate::http::Error;

use serde::de::DeserializeOwned;
use std::ops::Deref;

/// A successful remote response: its status and decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status: u16,
    pub payload: T,
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    /// Classifies a raw response.
    ///
    /// Error statuses with a body become [`Error::RemoteApi`], carrying the body as JSON
    /// (or as a JSON string when it is not JSON). Error statuses without a body keep the
    /// transport's own status error.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status().as_u16();

        if let Some(status_error) = response.error_for_status_ref().err() {
            let text = response.text().await?;

            if text.trim().is_empty() {
                log::debug!("remote error {} without body", status);
                return Err(Error::Transport(status_error));
            }

            let payload = serde_json::from_str::<serde_json::Value>(&text)
                .unwrap_or(serde_json::Value::String(text));

            log::debug!("remote error {}: {}", status, payload);
            return Err(Error::RemoteApi { status, payload });
        }

        let payload = response.json::<T>().await?;

        Ok(Response { status, payload })
    }
}

impl<T> Response<T> {
    pub fn collect(self) -> T {
        self.payload
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.payload
    }
}
