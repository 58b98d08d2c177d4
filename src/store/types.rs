use serde::{Deserialize, Serialize};

/// A stored entry: a unique alias and the URL it points to.
///
/// The URL is opaque to the store; validity is checked by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub alias: String,
    pub url: String,
}

impl Link {
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
        }
    }
}

impl From<(String, String)> for Link {
    fn from((alias, url): (String, String)) -> Self {
        Self { alias, url }
    }
}
