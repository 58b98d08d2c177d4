//! Link Directory HTTP Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) exchanged with HTTP
//! clients. Stored entries themselves are serialized as `store::Link`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: list (`GET`) and create (`POST`).
pub const ENDPOINT_LINKS: &str = "/links";
/// Single resource endpoint: read (`GET`), update (`PATCH`), delete (`DELETE`).
pub const ENDPOINT_LINK: &str = "/links/:alias";

// --- Data Transfer Objects ---

/// Query string for the collection listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Restricts the listing to aliases starting with this prefix.
    pub prefix: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// Desired alias. Omitted or empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
    /// Target URL; must be an absolute http(s) URL.
    #[serde(default)]
    pub url: String,
}

/// Body of an update request.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub url: String,
}

/// Error body returned with every non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
