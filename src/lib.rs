//! Packfold - package manifest toolkit
//!
//! A command line tool and library for build-pipeline package manifests,
//! built around a compact codec for content entries (copy rules). Each
//! entry names a `source`, a `target` and a `filter` list; entries with
//! default target and filter are written as a bare source string, and
//! reading expands either shape into a fully explicit value.
//!
//! Packfold can be used in two ways:
//! - **CLI**: `packfold check|fmt|show` over manifest files
//! - **Library**: parse and emit manifests and single content entries
//!
//! # Quick Start (Library)
//!
//! ```
//! use packfold::manifest::PackageManifest;
//!
//! let manifest = PackageManifest::from_json(
//!     r#"{
//!         "id": "app.docs",
//!         "buildName": "DocsBuild",
//!         "contents": ["guide", {"source": "assets", "target": "static"}]
//!     }"#,
//! )?;
//!
//! // Shorthand entries expand to explicit defaults.
//! assert_eq!(manifest.contents[0].source, "guide");
//! assert_eq!(manifest.contents[0].target, ".");
//! assert_eq!(manifest.contents[0].filter, vec!["**/*".to_string()]);
//!
//! // Writing collapses back to the most compact shape.
//! let json = manifest.to_json()?;
//! assert!(json.contains("\"guide\""));
//! # Ok::<(), packfold::error::PackfoldError>(())
//! ```
//!
//! Single entries can be decoded and encoded directly, under either
//! member-name convention:
//!
//! ```
//! use packfold::manifest::{CodecOptions, ContentDecoder, ContentEncoder, NameStyle};
//!
//! let options = CodecOptions {
//!     name_style: NameStyle::Pascal,
//!     case_insensitive: false,
//! };
//!
//! let decoded = ContentDecoder::new(options)
//!     .from_json(r#"{"Source": "bin", "Filter": "*.dll"}"#)?
//!     .ok_or_else(|| packfold::error::PackfoldError::ContentInvalid {
//!         message: "entry was null".to_string(),
//!     })?;
//! assert_eq!(decoded.filter, vec!["*.dll".to_string()]);
//!
//! let json = ContentEncoder::new(&decoded, options).to_json()?;
//! assert_eq!(json, r#"{"Source":"bin","Filter":"*.dll"}"#);
//! # Ok::<(), packfold::error::PackfoldError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod manifest;

// Re-export commonly used types
pub use error::{PackfoldError, Result};
pub use manifest::{
    CodecOptions, ContentDecoder, ContentEncoder, NameStyle, PackageContent, PackageManifest,
};
