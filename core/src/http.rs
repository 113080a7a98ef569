//! HTTP request and response data exchanged with the transport.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! client builds `HttpRequest` values and interprets `HttpResponse` values;
//! the [`Transport`](crate::transport::Transport) implementation executes
//! the round-trip in between. All fields use owned types so values can move
//! freely across task boundaries.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient` and handed to the transport for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Full URL of the remote endpoint.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON text to send as the request body, if any.
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`. `status`
/// is reported as response metadata but not interpreted by the client; only
/// body presence drives the decode path.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Raw body bytes; `None` when the response carried no body.
    pub body: Option<Vec<u8>>,
}
