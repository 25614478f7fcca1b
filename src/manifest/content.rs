//! PackageContent struct for package manifests
//!
//! A content entry is one copy rule: where files come from, where they
//! land, and which files match.

use thiserror::Error;

use crate::error::{PackfoldError, Result};

/// Canonical default target directory
pub const DEFAULT_TARGET: &str = ".";

/// Canonical default filter pattern (matches everything under source)
pub const DEFAULT_FILTER: &str = "**/*";

/// A content entry in a package manifest
///
/// Always fully explicit in memory: decoding fills in the default
/// target and filter, so downstream code never has to re-apply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageContent {
    /// Input path or glob root the files come from
    pub source: String,

    /// Destination directory, `"."` when not specified
    pub target: String,

    /// Match patterns in declaration order, `["**/*"]` when not specified
    pub filter: Vec<String>,
}

impl PackageContent {
    /// Create a content entry with default target and filter
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: DEFAULT_TARGET.to_string(),
            filter: vec![DEFAULT_FILTER.to_string()],
        }
    }

    /// Check whether the target means the package root
    pub fn has_default_target(&self) -> bool {
        is_default_target(&self.target)
    }

    /// Check whether the filter matches everything
    pub fn has_default_filter(&self) -> bool {
        is_default_filter(&self.filter)
    }

    /// The bare-string form of this entry, if target and filter are both
    /// at their defaults
    pub fn shorthand(&self) -> Option<&str> {
        if self.has_default_target() && self.has_default_filter() {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Validate content entry
    pub fn validate(&self) -> Result<()> {
        if self.source.is_empty() {
            return Err(PackfoldError::ContentInvalid {
                message: "content source cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Check whether a target string means the package root
///
/// Empty, ".", "./" and ".\" all decode to the same place, so every
/// variant elides on encode.
pub fn is_default_target(target: &str) -> bool {
    matches!(target, "" | "." | "./" | ".\\")
}

/// Check whether a filter list matches everything
///
/// An empty list and a single catch-all pattern (either separator) are
/// equivalent to the default.
pub fn is_default_filter(filter: &[String]) -> bool {
    match filter {
        [] => true,
        [only] => matches!(only.as_str(), "**/*" | "**\\*"),
        _ => false,
    }
}

/// Raw member values collected while scanning an expanded content object
///
/// Source and target overwrite on repeat, filters accumulate.
/// [`ContentData::into_content`] applies the defaults.
#[derive(Debug, Default)]
pub(crate) struct ContentData {
    pub source: Option<String>,
    pub target: Option<String>,
    pub filters: Vec<String>,
}

impl ContentData {
    /// Apply defaults and produce the normalized entry
    pub fn into_content(self) -> std::result::Result<PackageContent, ContentDataError> {
        let source = self.source.ok_or(ContentDataError::MissingSource)?;
        if source.is_empty() {
            return Err(ContentDataError::EmptySource);
        }

        Ok(PackageContent {
            source,
            target: self.target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            filter: if self.filters.is_empty() {
                vec![DEFAULT_FILTER.to_string()]
            } else {
                self.filters
            },
        })
    }
}

/// Why a scanned content object could not be normalized
#[derive(Debug, Error)]
pub(crate) enum ContentDataError {
    #[error("missing required property \"source\" in package content")]
    MissingSource,

    #[error("property \"source\" of package content cannot be empty")]
    EmptySource,
}
