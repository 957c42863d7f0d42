//! File-store domain — content-addressed uploads and imports.

pub mod client;

use crate::shared::Cid;

use serde::Deserialize;

/// A file payload for [`client::Fs::add`].
///
/// A closed set: the caller names the payload kind instead of the SDK
/// inspecting it at runtime. `RemoteUrl` is imported server-side; the
/// other kinds are uploaded as one multipart `file` part.
pub enum FileSource {
    /// In-memory bytes.
    Bytes(Vec<u8>),
    /// A caller-supplied byte stream.
    Stream(reqwest::Body),
    /// A remote URL for the service to fetch and store itself.
    RemoteUrl(String),
    /// Plain text, uploaded as `text/plain`.
    Text(String),
}

/// Response shape shared by the file-store endpoints. Failures arrive as a
/// populated `error` field rather than an HTTP status.
#[derive(Debug, Deserialize)]
pub(crate) struct FsResponse {
    pub cid: Option<Cid>,
    pub error: Option<String>,
}
