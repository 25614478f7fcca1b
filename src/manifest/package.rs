//! PackageManifest struct for whole manifest documents
//!
//! The manifest is plain structured data around the content entries:
//! id, build name, dependency and trigger lists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PackfoldError, Result};
use crate::manifest::content::PackageContent;

/// A package manifest document
///
/// Content entries accept both the bare-string shorthand and the
/// expanded object form, and serialize back to the most compact shape.
/// Null content slots are dropped on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package identifier
    #[serde(default)]
    pub id: String,

    /// Name of the build that produces this package
    #[serde(default)]
    pub build_name: String,

    /// Ids of packages this package depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Build names that trigger a rebuild of this package
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,

    /// Copy rules describing the package contents
    #[serde(
        default,
        deserialize_with = "deserialize_contents",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub contents: Vec<PackageContent>,
}

/// Drop null content slots, keeping declaration order for the rest
fn deserialize_contents<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<PackageContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots: Vec<Option<PackageContent>> = Vec::deserialize(deserializer)?;
    Ok(slots.into_iter().flatten().collect())
}

impl PackageManifest {
    /// Create a manifest with the given id and build name
    pub fn new(id: impl Into<String>, build_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            build_name: build_name.into(),
            dependencies: Vec::new(),
            triggers: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PackfoldError::ManifestDecodeFailed {
            reason: e.to_string(),
        })
    }

    /// Serialize the manifest to JSON (pretty-printed)
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PackfoldError::ManifestEncodeFailed {
            reason: e.to_string(),
        })
    }

    /// Load a manifest from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PackfoldError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }

        let json =
            fs::read_to_string(path).map_err(|e| PackfoldError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&json).map_err(|e| PackfoldError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the manifest to a file
    ///
    /// Uses an atomic write (temp file + rename) so that readers never
    /// observe a partially written manifest.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = format!("{}\n", self.to_json()?);

        // Write to a temporary file next to the target first, then
        // atomically rename it into place.
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, &content).map_err(|e| PackfoldError::ManifestWriteFailed {
            path: tmp_path.display().to_string(),
            reason: e.to_string(),
        })?;

        fs::rename(&tmp_path, path).map_err(|e| PackfoldError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate manifest
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(PackfoldError::ManifestInvalid {
                message: "package id cannot be empty".to_string(),
            });
        }

        if self.build_name.is_empty() {
            return Err(PackfoldError::ManifestInvalid {
                message: format!("package '{}' must have a build name", self.id),
            });
        }

        for content in &self.contents {
            content.validate()?;
        }

        Ok(())
    }
}
