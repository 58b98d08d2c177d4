use super::admission::AdmissionController;
use super::alias::next_alias;
use super::prefix::scan_prefix;
use super::types::Link;
use crate::tree::{MapError, OrderedMap};

/// The shared link directory.
///
/// Owns the only `OrderedMap` of the process. Every read goes through
/// `AdmissionController::acquire_read` and every mutation through a writer
/// registration, so readers always see a fully applied state and queued writers are
/// never starved by a stream of readers.
///
/// Constructed once by the composition root and handed to request handlers as
/// `Arc<ConcurrentStore>`.
pub struct ConcurrentStore {
    links: AdmissionController<OrderedMap<String>>,
}

impl ConcurrentStore {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            links: AdmissionController::new(OrderedMap::new()),
        }
    }

    /// Creates a directory pre-populated with `entries`.
    ///
    /// Runs before the store is shared, so no admission is needed. Duplicate aliases
    /// keep their first URL.
    pub fn with_seed<I, A, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, U)>,
        A: Into<String>,
        U: Into<String>,
    {
        let mut store = Self::new();
        let map = store.links.get_mut();
        for (alias, url) in entries {
            if let Err(e) = map.insert(alias, url.into()) {
                tracing::warn!("Skipping seed entry: {}", e);
            }
        }
        tracing::debug!("Seeded store with {} link(s)", map.len());
        store
    }

    /// Lists links in ascending alias order, optionally restricted to aliases
    /// starting with `prefix`. An empty prefix lists everything.
    pub async fn list(&self, prefix: Option<&str>) -> Vec<Link> {
        let prefix = prefix.unwrap_or_default();
        let map = self.links.acquire_read().await;

        scan_prefix(&map, prefix.as_bytes())
            .into_iter()
            .map(Link::from)
            .collect()
    }

    pub async fn get(&self, alias: &str) -> Result<Link, MapError> {
        let map = self.links.acquire_read().await;
        let url = map.lookup(alias)?;
        Ok(Link::new(alias, url.clone()))
    }

    /// Inserts a new link.
    ///
    /// A missing or empty alias is generated from the current maximum alias while the
    /// write lock is held, so generation and insertion are atomic.
    pub async fn create(&self, alias: Option<String>, url: String) -> Result<Link, MapError> {
        let registration = self.links.register_writer();
        let mut map = self.links.acquire_write(registration).await;

        let alias = match alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => alias,
            None => {
                let max = match map.max() {
                    Ok((key, _)) => key,
                    Err(MapError::Empty) => "",
                    Err(e) => return Err(e),
                };
                next_alias(max)
            }
        };

        if let Err(e) = map.insert(alias.clone(), url.clone()) {
            tracing::warn!("Create refused: {}", e);
            return Err(e);
        }

        tracing::debug!("Created link {} -> {}", alias, url);
        Ok(Link { alias, url })
    }

    /// Points an existing alias at a new URL.
    pub async fn update(&self, alias: &str, url: String) -> Result<Link, MapError> {
        let registration = self.links.register_writer();
        let mut map = self.links.acquire_write(registration).await;

        match map.assign(alias, url.clone()) {
            Ok(previous) => {
                tracing::debug!("Updated link {}: {} -> {}", alias, previous, url);
                Ok(Link::new(alias, url))
            }
            Err(e) => {
                tracing::warn!("Update refused: {}", e);
                Err(e)
            }
        }
    }

    pub async fn remove(&self, alias: &str) -> Result<(), MapError> {
        let registration = self.links.register_writer();
        let mut map = self.links.acquire_write(registration).await;

        match map.delete(alias) {
            Ok(url) => {
                tracing::debug!("Removed link {} -> {}", alias, url);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Remove refused: {}", e);
                Err(e)
            }
        }
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.acquire_read().await.len()
    }

    /// Writers currently registered but not yet finished.
    pub fn pending_writers(&self) -> usize {
        self.links.pending_writers()
    }

    #[cfg(test)]
    pub(crate) fn admission(&self) -> &AdmissionController<OrderedMap<String>> {
        &self.links
    }
}

impl Default for ConcurrentStore {
    fn default() -> Self {
        Self::new()
    }
}
