//! HTTP API Module
//!
//! Thin axum adapter in front of `ConcurrentStore`. Handlers validate input, call
//! exactly one store operation, and map its outcome onto a status code.
//!
//! ## Routes
//! - `GET /links[?prefix=P]`: ordered listing, optionally restricted to a prefix.
//! - `POST /links`: create; the alias is generated when omitted.
//! - `GET /links/:alias`: single link.
//! - `PATCH /links/:alias`: point an alias at a new URL.
//! - `DELETE /links/:alias`: remove.
//!
//! ## Submodules
//! - **`error`**: `ApiError` and its status/body mapping.
//! - **`handlers`**: Request handlers.
//! - **`protocol`**: Endpoints and DTOs.
//! - **`router`**: Router construction.
//! - **`validate`**: URL checks.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod router;
pub mod validate;

pub use router::build_router;
