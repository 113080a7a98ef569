//! Stateless request executor: one-shot GET and POST with JSON decode.
//!
//! # Design
//! `ApiClient` holds only the transport handed to it at construction and
//! carries no other state between calls. `fetch` and `submit` build an
//! [`HttpRequest`], let the transport execute the round-trip, and decode
//! the response body into the caller's type. Status codes are not
//! inspected: a response with a decodable body is a success regardless of
//! status, and a response without a body is `ApiError::EmptyResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Asynchronous executor for one-shot JSON requests.
///
/// Each call is independent: the client performs exactly one outbound
/// request per invocation and reports every failure through the returned
/// `Result`. Concurrent calls share the transport read-only, so no
/// ordering is imposed between them.
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create an executor around `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// GET `url` and decode the JSON response body into `R`.
    pub async fn fetch<R>(&self, url: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        debug!(url, "issuing GET request");
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        };
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        decode_body(response)
    }

    /// Encode `body` as JSON, POST it to `url`, and decode the response
    /// body into `R`.
    ///
    /// Encoding failures are returned before the transport is invoked, so
    /// no network call happens for an unencodable payload.
    pub async fn submit<B, R>(&self, url: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_string(body).map_err(ApiError::Encode)?;
        debug!(url, bytes = payload.len(), "issuing POST request");
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(payload),
        };
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        decode_body(response)
    }
}

/// Decode a response body into the caller's type.
///
/// Absent and zero-length bodies both count as "no data returned".
fn decode_body<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    match response.body {
        Some(bytes) if !bytes.is_empty() => {
            serde_json::from_slice(&bytes).map_err(ApiError::Decode)
        }
        _ => Err(ApiError::EmptyResponse),
    }
}
