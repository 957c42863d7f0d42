//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    /// Collaborator-reported failure: a response whose body carries a
    /// populated `error` field (the file-store endpoints report failures
    /// in-band rather than via HTTP status).
    #[error("Service error: {0}")]
    Service(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx POST response. The display message is the response body
    /// text, verbatim.
    #[error("{body}")]
    Status { status: u16, body: String },
}

/// Errors from the injected signing capability.
#[derive(Error, Debug)]
pub enum SignError {
    /// The signer refused to produce a signature.
    #[error("Signing declined: {0}")]
    Declined(String),

    /// The signing provider itself failed.
    #[error("Signer error: {0}")]
    Provider(String),
}
