//! Package metadata record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized metadata declared by one package
///
/// Produced by [`PackageMetadataLoader::load`](crate::package::PackageMetadataLoader::load).
/// All locations are already joined onto the package root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    /// Package name, if the descriptor declares one
    pub name: Option<String>,
    /// IRI of the package's primary module (`lsd:module`)
    pub module_iri: String,
    /// Location of the components file (`lsd:components` joined onto the root)
    pub components_path: String,
    /// Context IRI to context file location (`lsd:contexts` values joined onto the root)
    pub contexts: HashMap<String, String>,
}

impl PackageMetadata {
    /// Location of the context file declared for `iri`
    pub fn context_path(&self, iri: &str) -> Option<&str> {
        self.contexts.get(iri).map(String::as_str)
    }
}
