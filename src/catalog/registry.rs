//! Catalog registry implementation

use crate::{ParkFedError, Result};
use std::collections::HashMap;

/// Registry of known dataset endpoints and their fast-path entry points.
///
/// Entries are unique by URL and keep insertion order. This is an owned
/// object handed to the aggregation layer by reference; there is no
/// process-wide catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Dataset endpoint URLs, insertion-ordered, no duplicates
    entries: Vec<String>,

    /// Dataset endpoint URL → alternate entry-point URL
    fast_paths: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset endpoint. Idempotent; adding a URL already present is
    /// a no-op.
    pub fn add_dataset(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.entries.contains(&url) {
            tracing::debug!(dataset = %url, "Dataset already cataloged, skipping");
            return;
        }
        tracing::debug!(dataset = %url, "Cataloged dataset endpoint");
        self.entries.push(url);
    }

    /// Register a fast-path entry point for a cataloged dataset, overwriting
    /// any prior registration for that URL.
    ///
    /// # Errors
    /// Returns `NotFound` when `dataset_url` is not in the catalog.
    pub fn add_fast_path(
        &mut self,
        dataset_url: impl Into<String>,
        fast_path_url: impl Into<String>,
    ) -> Result<()> {
        let dataset_url = dataset_url.into();
        if !self.contains(&dataset_url) {
            return Err(ParkFedError::NotFound(dataset_url));
        }
        self.fast_paths.insert(dataset_url, fast_path_url.into());
        Ok(())
    }

    /// Record a fast-path entry without the catalog-membership check.
    ///
    /// Resolution keys fast paths by the dataset's subject identifier, which
    /// is not itself a cataloged endpoint URL, so the `NotFound` guard of
    /// [`add_fast_path`](Self::add_fast_path) does not apply there.
    pub(crate) fn record_fast_path(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.fast_paths.insert(key.into(), url.into());
    }

    /// The fast-path entry point registered under a key, if any
    pub fn fast_path_for(&self, key: &str) -> Option<&str> {
        self.fast_paths.get(key).map(String::as_str)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e == url)
    }

    /// Ordered snapshot of cataloged endpoint URLs (not a live view)
    pub fn list(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
