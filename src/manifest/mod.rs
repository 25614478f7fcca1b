//! Package manifest handling for Packfold
//!
//! This module contains data structures for:
//! - `PackageManifest` - A whole manifest document
//! - `PackageContent` - One copy rule (source, target, filter)
//! - The content codec - shorthand/expanded shapes with default elision

pub mod content;
pub mod package;
pub mod serialization;

// Re-export commonly used types
pub use content::{DEFAULT_FILTER, DEFAULT_TARGET, PackageContent};
pub use package::PackageManifest;
pub use serialization::{CodecOptions, ContentDecoder, ContentEncoder, NameStyle};
