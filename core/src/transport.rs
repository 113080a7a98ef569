//! Transport capability and the reqwest-backed implementation.
//!
//! # Design
//! The client never touches the network itself; it hands an [`HttpRequest`]
//! to whatever [`Transport`] it was constructed with and gets back an
//! [`HttpResponse`] or a transport error. Connection handling, TLS, and
//! timeouts all live behind the trait, so tests can swap in stubs and the
//! client stays deterministic.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Boxed error type for transport failures.
///
/// Implementations surface their native error unmodified; the client wraps
/// it into `ApiError::Transport` without inspecting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Capability to execute one HTTP round-trip.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and return the raw response.
    ///
    /// An `Err` means the request never produced a response (connect
    /// failure, timeout, protocol error). A response with any HTTP status
    /// is a successful execution.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// The wrapped client is shared read-only across concurrent calls; reqwest
/// handles scheduling and connection reuse internally.
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport with default request/connect timeouts and a
    /// crate-versioned user agent.
    pub fn new() -> Result<Self, BoxError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("api-core/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let bytes = response.bytes().await?;
        debug!(url = %request.url, status, bytes = bytes.len(), "request completed");

        Ok(HttpResponse {
            status,
            headers,
            body: if bytes.is_empty() {
                None
            } else {
                Some(bytes.to_vec())
            },
        })
    }
}
