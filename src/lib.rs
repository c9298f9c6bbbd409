//! lsd-metadata - package descriptor loading for Linked Software Dependencies
//!
//! This crate provides the descriptor-loading step of a module-resolution
//! engine: given a package root it reads the package's `package.json`,
//! checks the required `lsd:module`, `lsd:components` and `lsd:contexts`
//! fields, and joins every declared location onto the package root.
//!
//! ## Layout
//!
//! - [`package`]: descriptor parsing, validation and the metadata loader
//! - [`resolution`]: the injected content-fetch capability and its file
//!   system and in-memory implementations
//! - [`config`]: resolution and logging configuration for binaries
//! - [`utils`]: path joining and logging setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lsd_metadata::package::PackageMetadataLoader;
//! use lsd_metadata::resolution::FileSystemResolutionContext;
//!
//! # async fn run() -> Result<(), lsd_metadata::package::PackageError> {
//! let loader = PackageMetadataLoader::new(Arc::new(FileSystemResolutionContext::new()));
//! let metadata = loader.load("/srv/packages/foo").await?;
//! println!("{} -> {}", metadata.module_iri, metadata.components_path);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod package;
pub mod resolution;
pub mod utils;

pub use config::{LoaderConfig, LoggingConfig, ResolutionConfig};
pub use package::{PackageError, PackageMetadata, PackageMetadataLoader};
pub use resolution::{ResolutionContext, ResolutionError};
