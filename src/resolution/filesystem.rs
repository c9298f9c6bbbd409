//! File system backed resolution context

use async_trait::async_trait;
use std::io::ErrorKind;
use tracing::{debug, trace};

use crate::config::{ResolutionConfig, DEFAULT_MAX_FILE_SIZE};
use crate::resolution::{ResolutionContext, ResolutionError};
use crate::utils::path::{is_absolute, join_path};

/// Reads files from the local file system with `tokio::fs`
#[derive(Debug, Clone)]
pub struct FileSystemResolutionContext {
    /// Directory relative paths are resolved against
    base_dir: Option<String>,
    /// Maximum accepted file size (bytes)
    max_file_size: u64,
}

impl FileSystemResolutionContext {
    /// Create a context that resolves relative paths against the working directory
    pub fn new() -> Self {
        Self {
            base_dir: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Create a context from configuration
    pub fn from_config(config: &ResolutionConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            max_file_size: config.max_file_size,
        }
    }

    /// Resolve relative paths against `base_dir`
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Override the maximum accepted file size
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Location that will actually be opened for `path`
    pub fn resolve(&self, path: &str) -> String {
        match self.base_dir {
            Some(ref base_dir) if !is_absolute(path) => join_path(base_dir, path),
            _ => path.to_string(),
        }
    }

    fn io_error(path: &str, source: std::io::Error) -> ResolutionError {
        if source.kind() == ErrorKind::NotFound {
            ResolutionError::NotFound(path.to_string())
        } else {
            ResolutionError::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

impl Default for FileSystemResolutionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolutionContext for FileSystemResolutionContext {
    async fn get_file_content(&self, path: &str) -> Result<String, ResolutionError> {
        let resolved = self.resolve(path);
        trace!("Reading {} (requested as {})", resolved, path);

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(|e| Self::io_error(&resolved, e))?;

        if metadata.len() > self.max_file_size {
            return Err(ResolutionError::TooLarge {
                path: resolved,
                size: metadata.len(),
                limit: self.max_file_size,
            });
        }

        let bytes = tokio::fs::read(&resolved)
            .await
            .map_err(|e| Self::io_error(&resolved, e))?;

        let content =
            String::from_utf8(bytes).map_err(|_| ResolutionError::InvalidUtf8(resolved.clone()))?;

        debug!("Read {} bytes from {}", content.len(), resolved);
        Ok(content)
    }
}
