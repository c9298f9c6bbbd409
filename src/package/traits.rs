//! Package loading errors

use thiserror::Error;

use crate::resolution::ResolutionError;

/// Package metadata loading errors
///
/// Fetch failures pass through untouched; every other variant names the
/// descriptor file it was raised for.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Invalid package: Syntax error in {path}: {message}")]
    Syntax { path: String, message: String },

    #[error("Invalid package: Missing 'lsd:module' IRI in {path}")]
    MissingModule { path: String },

    #[error("Invalid package: Missing 'lsd:components' in {path}")]
    MissingComponents { path: String },

    #[error("Invalid package: Missing 'lsd:contexts' in {path}")]
    MissingContexts { path: String },

    #[error("Invalid package: Expected '{key}' to be {expected} in {path}")]
    InvalidField {
        key: String,
        expected: &'static str,
        path: String,
    },
}

impl PackageError {
    /// Descriptor file the error refers to (None for pass-through fetch errors)
    pub fn descriptor_path(&self) -> Option<&str> {
        match self {
            PackageError::Resolution(_) => None,
            PackageError::Syntax { path, .. }
            | PackageError::MissingModule { path }
            | PackageError::MissingComponents { path }
            | PackageError::MissingContexts { path }
            | PackageError::InvalidField { path, .. } => Some(path.as_str()),
        }
    }

    /// True if the descriptor was read but rejected
    pub fn is_invalid_package(&self) -> bool {
        !matches!(self, PackageError::Resolution(_))
    }
}
