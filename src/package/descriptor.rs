//! Package descriptor document
//!
//! The descriptor (`package.json`) is parsed into a generic JSON object first
//! and then probed explicitly for the keys the loader needs. Each missing key
//! maps to its own [`PackageError`] variant.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::package::traits::PackageError;

/// Descriptor file name under a package root
pub const PACKAGE_DESCRIPTOR_FILE: &str = "package.json";

/// Package name key (optional)
pub const NAME: &str = "name";
/// Primary module IRI key (required)
pub const LSD_MODULE: &str = "lsd:module";
/// Relative path to the components file (required)
pub const LSD_COMPONENTS: &str = "lsd:components";
/// Context IRI to relative path mapping (required)
pub const LSD_CONTEXTS: &str = "lsd:contexts";

/// Parsed descriptor, keyed by top-level field name
#[derive(Debug, Clone)]
pub struct DescriptorDocument {
    path: String,
    fields: Map<String, Value>,
}

impl DescriptorDocument {
    /// Parse descriptor text read from `path`
    ///
    /// The top level must be a JSON object. Duplicate keys keep the last value.
    pub fn parse(path: &str, text: &str) -> Result<Self, PackageError> {
        let fields: Map<String, Value> =
            serde_json::from_str(text).map_err(|e| PackageError::Syntax {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_string(),
            fields,
        })
    }

    /// Location the descriptor was read from
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Probe for a required key, building the caller's error if it is absent
    pub fn require<F>(&self, key: &str, missing: F) -> Result<&Value, PackageError>
    where
        F: FnOnce(String) -> PackageError,
    {
        self.fields
            .get(key)
            .ok_or_else(|| missing(self.path.clone()))
    }

    /// Interpret a present value as a string
    pub fn expect_str<'a>(&self, key: &str, value: &'a Value) -> Result<&'a str, PackageError> {
        value.as_str().ok_or_else(|| self.invalid(key, "a string"))
    }

    /// Interpret a present value as an object of string values
    pub fn expect_string_map(
        &self,
        key: &str,
        value: &Value,
    ) -> Result<HashMap<String, String>, PackageError> {
        let object = value
            .as_object()
            .ok_or_else(|| self.invalid(key, "an object of strings"))?;

        object
            .iter()
            .map(|(entry_key, entry_value)| {
                entry_value
                    .as_str()
                    .map(|s| (entry_key.clone(), s.to_string()))
                    .ok_or_else(|| self.invalid(key, "an object of strings"))
            })
            .collect()
    }

    /// Optional string field; present values of another type count as absent
    pub fn optional_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn invalid(&self, key: &str, expected: &'static str) -> PackageError {
        PackageError::InvalidField {
            key: key.to_string(),
            expected,
            path: self.path.clone(),
        }
    }
}
