//! Package metadata loader
//!
//! Reads a package's `package.json` through a resolution context, checks the
//! required `lsd:*` fields and joins every declared location onto the
//! package root.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

use crate::package::descriptor::{
    DescriptorDocument, LSD_COMPONENTS, LSD_CONTEXTS, LSD_MODULE, NAME, PACKAGE_DESCRIPTOR_FILE,
};
use crate::package::metadata::PackageMetadata;
use crate::package::traits::PackageError;
use crate::resolution::ResolutionContext;
use crate::utils::path::join_path;

/// Location of the descriptor file for a package root
pub fn descriptor_path(package_root_directory: &str) -> String {
    join_path(package_root_directory, PACKAGE_DESCRIPTOR_FILE)
}

/// Loads metadata from packages
///
/// Stateless apart from the injected resolution context; clones share it.
#[derive(Clone)]
pub struct PackageMetadataLoader {
    resolution_context: Arc<dyn ResolutionContext>,
}

impl PackageMetadataLoader {
    /// Create a loader that fetches descriptors through `resolution_context`
    pub fn new(resolution_context: Arc<dyn ResolutionContext>) -> Self {
        Self { resolution_context }
    }

    /// Resolution context this loader reads through
    pub fn resolution_context(&self) -> &Arc<dyn ResolutionContext> {
        &self.resolution_context
    }

    /// Load the metadata of the package rooted at `package_root_directory`
    ///
    /// Fetch failures are returned unchanged. Syntax and validation failures
    /// name the descriptor file.
    pub async fn load(&self, package_root_directory: &str) -> Result<PackageMetadata, PackageError> {
        let path = descriptor_path(package_root_directory);
        debug!("Loading package descriptor {}", path);

        let text = self.resolution_context.get_file_content(&path).await?;
        let document = DescriptorDocument::parse(&path, &text)?;

        let metadata = Self::extract(package_root_directory, &document)?;
        debug!(
            "Loaded package {} ({} contexts) from {}",
            metadata.module_iri,
            metadata.contexts.len(),
            path
        );
        Ok(metadata)
    }

    /// Load several packages concurrently
    ///
    /// Results are returned in input order; one failing package does not
    /// affect the others.
    pub async fn load_many<S: AsRef<str>>(
        &self,
        package_root_directories: &[S],
    ) -> Vec<Result<PackageMetadata, PackageError>> {
        info!("Loading {} packages", package_root_directories.len());

        join_all(
            package_root_directories
                .iter()
                .map(|root| self.load(root.as_ref())),
        )
        .await
    }

    /// Validate a parsed descriptor and normalize its declared locations
    fn extract(
        package_root_directory: &str,
        document: &DescriptorDocument,
    ) -> Result<PackageMetadata, PackageError> {
        // Presence first, in declaration order
        let module = document.require(LSD_MODULE, |path| PackageError::MissingModule { path })?;
        let components =
            document.require(LSD_COMPONENTS, |path| PackageError::MissingComponents { path })?;
        let contexts =
            document.require(LSD_CONTEXTS, |path| PackageError::MissingContexts { path })?;

        let module_iri = document.expect_str(LSD_MODULE, module)?.to_string();
        let components_path =
            join_path(package_root_directory, document.expect_str(LSD_COMPONENTS, components)?);
        let contexts = document
            .expect_string_map(LSD_CONTEXTS, contexts)?
            .into_iter()
            .map(|(iri, relative)| (iri, join_path(package_root_directory, &relative)))
            .collect();

        let name = document.optional_str(NAME).map(str::to_string);
        if name.is_none() && document.contains(NAME) {
            debug!("Ignoring non-string 'name' in {}", document.path());
        }

        Ok(PackageMetadata {
            name,
            module_iri,
            components_path,
            contexts,
        })
    }
}

impl std::fmt::Debug for PackageMetadataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageMetadataLoader").finish_non_exhaustive()
    }
}
