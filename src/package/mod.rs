//! Package metadata loading
//!
//! A package describes itself in a `package.json` at its root. Besides the
//! usual `name`, the descriptor declares three Linked Software Dependencies
//! fields that downstream module resolution needs:
//!
//! - `lsd:module`: IRI of the package's primary module
//! - `lsd:components`: relative path to the package's components file
//! - `lsd:contexts`: map of context IRI to relative context file path
//!
//! [`PackageMetadataLoader`] reads that descriptor through an injected
//! [`ResolutionContext`](crate::resolution::ResolutionContext), validates it
//! and returns a [`PackageMetadata`] with every location joined onto the
//! package root.

pub mod descriptor;
pub mod loader;
pub mod metadata;
pub mod traits;

pub use descriptor::{DescriptorDocument, PACKAGE_DESCRIPTOR_FILE};
pub use loader::{descriptor_path, PackageMetadataLoader};
pub use metadata::PackageMetadata;
pub use traits::PackageError;
