use thiserror::Error;
use url::Url;

/// Reasons a submitted URL is refused before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL is required")]
    Missing,
    #[error("Invalid URL")]
    Invalid,
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_url(raw: &str) -> Result<(), UrlError> {
    if raw.is_empty() {
        return Err(UrlError::Missing);
    }

    let parsed = Url::parse(raw).map_err(|_| UrlError::Invalid)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlError::Invalid),
    }
}
