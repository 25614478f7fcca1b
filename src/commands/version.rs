//! Version command implementation

use crate::error::Result;
use crate::manifest::{DEFAULT_FILTER, DEFAULT_TARGET};

/// Run version command
pub fn run() -> Result<()> {
    println!("packfold {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Manifest defaults:");
    println!("  Target: {DEFAULT_TARGET}");
    println!("  Filter: {DEFAULT_FILTER}");
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
