//! Fs sub-client — the `/fs/*` content-addressed storage surface.

use super::{FileSource, FsResponse};
use crate::client::MintpressClient;
use crate::error::{HttpError, SdkError};
use crate::shared::Cid;

use reqwest::multipart::{Form, Part};
use std::collections::HashMap;

pub struct Fs<'a> {
    pub(crate) client: &'a MintpressClient,
}

impl<'a> Fs<'a> {
    /// Store a file payload, dispatching on its kind: remote URLs are
    /// imported server-side, everything else is uploaded.
    pub async fn add(&self, source: FileSource) -> Result<Cid, SdkError> {
        match source {
            FileSource::Bytes(bytes) => self.upload(Part::bytes(bytes)).await,
            FileSource::Stream(body) => self.upload(Part::stream(body)).await,
            FileSource::RemoteUrl(url) => self.import(&url).await,
            FileSource::Text(text) => {
                let part = Part::text(text)
                    .mime_str("text/plain")
                    .map_err(HttpError::from)?;
                self.upload(part).await
            }
        }
    }

    /// Upload one multipart `file` part to `/fs/add` and return its
    /// content id.
    pub async fn upload(&self, part: Part) -> Result<Cid, SdkError> {
        let form = Form::new().part("file", part);
        let resp: FsResponse = self.client.http.post_multipart("/fs/add", form).await?;
        Self::into_cid(resp)
    }

    /// Have the service fetch and store a remote URL.
    pub async fn import(&self, url: &str) -> Result<Cid, SdkError> {
        let resp: FsResponse = self
            .client
            .http
            .post("/fs/import", &serde_json::json!({ "url": url }))
            .await?;
        Self::into_cid(resp)
    }

    /// Pin an already-stored object to the public network.
    pub async fn push(&self, cid: &Cid) -> Result<Cid, SdkError> {
        let resp: FsResponse = self
            .client
            .http
            .post("/fs/push", &serde_json::json!({ "cid": cid }))
            .await?;
        Self::into_cid(resp)
    }

    /// Assemble a folder from a path → content-id mapping; returns the
    /// folder's own content id.
    pub async fn folder(&self, mapping: &HashMap<String, Cid>) -> Result<Cid, SdkError> {
        let resp: FsResponse = self.client.http.post("/fs/folder", mapping).await?;
        Self::into_cid(resp)
    }

    fn into_cid(resp: FsResponse) -> Result<Cid, SdkError> {
        if let Some(err) = resp.error {
            return Err(SdkError::Service(err));
        }
        resp.cid
            .ok_or_else(|| SdkError::Service("response carried neither cid nor error".into()))
    }
}
