//! Concurrent Link Store Module
//!
//! Wraps the `OrderedMap` with a synchronization protocol and the two operations
//! derived from it: alias generation and prefix queries.
//!
//! ## Core Concepts
//! - **Admission**: Readers run concurrently with each other, writers run alone, and a
//!   writer that has merely registered already blocks newly arriving readers
//!   (writer priority, no writer starvation).
//! - **Alias generation**: Missing aliases are derived from the current maximum alias
//!   in shortest-first order (`"a"`, `"b"`, ..., `"z"`, `"za"`, ...).
//! - **Prefix queries**: `prefix` is translated to the half-open range
//!   `[prefix, prefix with its last byte incremented)`.
//!
//! ## Submodules
//! - **`admission`**: The readers-writer lock plus pending-writer gate.
//! - **`alias`**: Shortest-first alias successor.
//! - **`concurrent`**: `ConcurrentStore`, the handle shared by request handlers.
//! - **`prefix`**: Prefix to exclusive upper bound translation.
//! - **`types`**: The `Link` entry type.

pub mod admission;
pub mod alias;
pub mod concurrent;
pub mod prefix;
pub mod types;

pub use concurrent::ConcurrentStore;
pub use types::Link;
