//! Domain DTOs for the API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application user.
///
/// All fields are required; there is no partially constructed state and no
/// mutation API. Values are produced by decoding a server response or
/// built directly by caller code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; not validated by this layer.
    pub email: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}
