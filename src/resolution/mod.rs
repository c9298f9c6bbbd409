//! Resolution context
//!
//! A resolution context turns a location string into text. The package
//! loader never touches storage directly; it asks an injected
//! [`ResolutionContext`] instead, so packages can be served from disk, from
//! memory, or from any other backing store.

pub mod filesystem;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use filesystem::FileSystemResolutionContext;
pub use memory::MemoryResolutionContext;

/// Capability for fetching file content by path
///
/// Implementations are responsible for their own thread safety. The loader
/// holds them as `Arc<dyn ResolutionContext>` and may call them from many
/// tasks at once.
#[async_trait]
pub trait ResolutionContext: Send + Sync {
    /// Return the full text content stored at `path`
    async fn get_file_content(&self, path: &str) -> Result<String, ResolutionError>;
}

/// Content fetch errors
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {path} is {size} bytes (limit {limit})")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl ResolutionError {
    /// Path the failed fetch was for
    pub fn path(&self) -> &str {
        match self {
            ResolutionError::NotFound(path)
            | ResolutionError::InvalidUtf8(path)
            | ResolutionError::Io { path, .. }
            | ResolutionError::TooLarge { path, .. } => path.as_str(),
        }
    }
}
