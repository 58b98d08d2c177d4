//! Link Directory Library
//!
//! A key-value directory of short aliases mapping to target URLs, read and mutated
//! concurrently by many HTTP clients. The binary (`main.rs`) is only wiring; all
//! behavior lives here.
//!
//! ## Architecture Modules
//! - **`tree`**: The ordered map. An AVL tree keyed by strings with point operations,
//!   ordered traversal and half-open range scans.
//! - **`store`**: `ConcurrentStore`, the single shared handle. Wraps the map in a
//!   writer-priority readers-writer protocol and adds alias generation and prefix queries.
//! - **`api`**: The axum HTTP adapter: DTOs, URL validation, handlers, router.
//! - **`config`**: Command-line / environment configuration.

pub mod api;
pub mod config;
pub mod store;
pub mod tree;
