//! Error types for the API client.
//!
//! # Design
//! Every failure is handed back to the caller through the `Result`; nothing
//! is retried or swallowed, and no variant is fatal to the client.
//! `Transport` carries the underlying error unmodified, `Encode` is
//! returned before any network call is made, and `EmptyResponse` covers the
//! success-without-body case.

use thiserror::Error;

use crate::transport::BoxError;

/// Errors returned by `ApiClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before a response was produced.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response carried no body.
    #[error("no data returned")]
    EmptyResponse,

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be deserialized into the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
