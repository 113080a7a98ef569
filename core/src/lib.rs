//! Asynchronous REST helper for a JSON API.
//!
//! # Overview
//! [`ApiClient`] issues one-shot GET and POST requests through an injected
//! [`Transport`] and decodes JSON response bodies into caller-chosen types.
//! Only the transport touches the network, so the client itself stays
//! deterministic and testable with stubs.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only the transport handed to it at
//!   construction and never mutates it.
//! - Requests and responses cross the transport boundary as plain data
//!   (`HttpRequest` / `HttpResponse`).
//! - Every failure is returned to the caller as an [`ApiError`]; nothing is
//!   retried or swallowed.
//! - The `User` DTO is defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{BoxError, ReqwestTransport, Transport};
pub use types::User;
