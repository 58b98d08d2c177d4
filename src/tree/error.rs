use thiserror::Error;

/// Failure kinds for map and store operations.
///
/// All of them are recoverable and reported straight to the caller; the HTTP layer
/// decides how each one is presented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The referenced alias is not present (lookup, delete, assign).
    #[error("alias not found: {0}")]
    NotFound(String),
    /// Insert of an alias that is already present.
    #[error("alias already exists: {0}")]
    AlreadyExists(String),
    /// Min/max query on a map with no entries.
    #[error("map is empty")]
    Empty,
}
