//! Ordered Map Module
//!
//! A self-balancing binary search tree keyed by strings. This is the single data
//! structure behind the link directory; everything else wraps it.
//!
//! ## Guarantees
//! - **Ordering**: Keys are compared byte-lexicographically (no locale, no case folding).
//!   In-order traversal yields strictly increasing keys.
//! - **Balance**: The tree follows the AVL discipline, so height stays logarithmic
//!   in the number of entries regardless of insertion/deletion order.
//! - **No silent overwrite**: `insert` refuses existing keys, `assign` refuses missing ones.
//!
//! ## Submodules
//! - **`avl`**: The `OrderedMap` itself (point operations, traversal, range scans).
//! - **`error`**: The error kinds returned by map operations.

pub mod avl;
pub mod error;

pub use avl::OrderedMap;
pub use error::MapError;
