//! Low-level HTTP client — `MintpressHttp`.
//!
//! A thin wrapper around `reqwest` owning the service base URL. Non-2xx
//! POST responses are read as text and surfaced as [`HttpError::Status`]
//! with the body as the message; GET responses are parsed as JSON
//! regardless of status (the service reports GET failures in-band).
//!
//! No retries and no implicit deadline: every call is a single round trip,
//! and timeout/retry policy belongs to the caller.

use crate::error::HttpError;

use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Mintpress REST surface.
#[derive(Clone)]
pub struct MintpressHttp {
    base_url: String,
    client: Client,
}

impl MintpressHttp {
    /// Build a client for `base_url`. `timeout` is opt-in: requests have no
    /// deadline unless the caller sets one.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL; absolute URLs pass through.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).send().await?;
        Ok(resp.json::<T>().await?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = self.client.post(&url).json(body).send().await?;
        Self::read_json(resp).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        let resp = self.client.post(&url).multipart(form).send().await?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
