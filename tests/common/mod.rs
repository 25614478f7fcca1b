//! Common test utilities for Packfold integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test directory holding manifest files
#[allow(dead_code)]
pub struct TestDir {
    /// Temporary directory, kept so the files outlive the test body
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDir {
    /// Create a new test directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a manifest file and return its path
    pub fn write_manifest(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, content).expect("Failed to write manifest");
        file_path
    }

    /// Read a file back from the directory
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in the directory
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }
}
