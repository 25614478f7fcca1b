//! Check command implementation
//!
//! Parses and validates a manifest, then reports a one-line summary of
//! what it declares.

use console::Style;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::manifest::PackageManifest;

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    let manifest = PackageManifest::from_file(&args.manifest)?;
    manifest.validate()?;

    println!(
        "{} {} (build {}): {}, {}, {}",
        Style::new().green().bold().apply_to("OK"),
        Style::new().bold().apply_to(&manifest.id),
        manifest.build_name,
        count_label(manifest.contents.len(), "content rule", "content rules"),
        count_label(manifest.dependencies.len(), "dependency", "dependencies"),
        count_label(manifest.triggers.len(), "trigger", "triggers"),
    );

    Ok(())
}

fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
