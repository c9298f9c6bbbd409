//! In-memory resolution context
//!
//! Serves file content from a map. Useful for tests and for embedding
//! packages that never exist on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::resolution::{ResolutionContext, ResolutionError};
use crate::utils::path::normalize_path;

/// Resolution context backed by an in-memory map of normalized path to content
#[derive(Debug, Default)]
pub struct MemoryResolutionContext {
    files: RwLock<HashMap<String, String>>,
    reads: AtomicUsize,
}

impl MemoryResolutionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a file
    pub fn with_file(mut self, path: impl AsRef<str>, content: impl Into<String>) -> Self {
        self.files
            .get_mut()
            .insert(normalize_path(path.as_ref()), content.into());
        self
    }

    /// Register or replace a file
    pub async fn insert(&self, path: impl AsRef<str>, content: impl Into<String>) {
        self.files
            .write()
            .await
            .insert(normalize_path(path.as_ref()), content.into());
    }

    /// Remove a file, returning its previous content
    pub async fn remove(&self, path: impl AsRef<str>) -> Option<String> {
        self.files
            .write()
            .await
            .remove(&normalize_path(path.as_ref()))
    }

    /// Number of fetches served so far (successful or not)
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResolutionContext for MemoryResolutionContext {
    async fn get_file_content(&self, path: &str) -> Result<String, ResolutionError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.files
            .read()
            .await
            .get(&normalize_path(path))
            .cloned()
            .ok_or_else(|| ResolutionError::NotFound(path.to_string()))
    }
}
