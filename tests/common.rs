#![allow(dead_code)]
//! Shared fixtures for package loader integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Descriptor used by most tests
pub const FOO_DESCRIPTOR: &str = r#"{
    "name": "foo",
    "version": "1.0.0",
    "lsd:module": "http://ex.org/foo",
    "lsd:components": "components/index.jsonld",
    "lsd:contexts": {
        "http://ex.org/ctx": "contexts/foo.jsonld",
        "http://ex.org/ctx-extra": "./contexts/../contexts/extra.jsonld"
    }
}"#;

/// Temporary directory holding package roots
pub struct PackageFixture {
    pub temp_dir: TempDir,
    pub packages_dir: PathBuf,
}

impl PackageFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let packages_dir = temp_dir.path().join("packages");
        std::fs::create_dir_all(&packages_dir)?;

        Ok(Self {
            temp_dir,
            packages_dir,
        })
    }

    /// Write `package.json` for a package and return its root
    pub fn create_package(
        &self,
        name: &str,
        descriptor: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let root = self.packages_dir.join(name);
        std::fs::create_dir_all(&root)?;
        std::fs::write(root.join("package.json"), descriptor)?;
        Ok(root)
    }

    /// Root of a package that has no descriptor
    pub fn create_empty_package(&self, name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let root = self.packages_dir.join(name);
        std::fs::create_dir_all(&root)?;
        Ok(root)
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}
