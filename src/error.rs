//! Error types and handling for Packfold
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Packfold operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackfoldError {
    // Manifest errors
    #[error("Manifest file not found: {path}")]
    #[diagnostic(
        code(packfold::manifest::not_found),
        help("Check that the path points to a package manifest file")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(packfold::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(packfold::manifest::parse_failed),
        help(
            "Content entries must be a source string or an object with source, target and filter"
        )
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to decode manifest: {reason}")]
    #[diagnostic(
        code(packfold::manifest::decode_failed),
        help(
            "Content entries must be a source string or an object with source, target and filter"
        )
    )]
    ManifestDecodeFailed { reason: String },

    #[error("Failed to write manifest: {path}: {reason}")]
    #[diagnostic(code(packfold::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    #[error("Failed to encode manifest: {reason}")]
    #[diagnostic(code(packfold::manifest::encode_failed))]
    ManifestEncodeFailed { reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(packfold::manifest::invalid))]
    ManifestInvalid { message: String },

    // Content entry errors
    #[error("Failed to decode package content: {reason}")]
    #[diagnostic(code(packfold::content::decode_failed))]
    ContentDecodeFailed { reason: String },

    #[error("Failed to encode package content: {reason}")]
    #[diagnostic(code(packfold::content::encode_failed))]
    ContentEncodeFailed { reason: String },

    #[error("Invalid package content: {message}")]
    #[diagnostic(
        code(packfold::content::invalid),
        help("Every content entry needs a non-empty source")
    )]
    ContentInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(packfold::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PackfoldError {
    fn from(err: std::io::Error) -> Self {
        PackfoldError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackfoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PackfoldError::ManifestNotFound {
            path: "pkg/manifest.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Manifest file not found: pkg/manifest.json"
        );
    }

    #[test]
    fn test_error_code() {
        let err = PackfoldError::ManifestNotFound {
            path: "manifest.json".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("packfold::manifest::not_found".to_string())
        );
    }

    #[test]
    fn test_parse_failed_error() {
        let err = PackfoldError::ManifestParseFailed {
            path: "manifest.json".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().contains("Failed to parse manifest"));
        assert!(err.to_string().contains("manifest.json"));
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn test_content_decode_failed_error() {
        let err = PackfoldError::ContentDecodeFailed {
            reason: "missing required property \"source\"".to_string(),
        };
        assert!(err.to_string().contains("Failed to decode package content"));
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn test_manifest_invalid_error() {
        let err = PackfoldError::ManifestInvalid {
            message: "package id cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("Invalid manifest"));
        assert!(err.to_string().contains("package id cannot be empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let packfold_err: PackfoldError = io_err.into();
        assert!(matches!(packfold_err, PackfoldError::IoError { .. }));
    }
}
