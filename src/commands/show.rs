//! Show command implementation
//!
//! Prints a manifest with every content entry fully expanded, marking
//! values that sit at their defaults.

use console::Style;

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::manifest::{PackageContent, PackageManifest};

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let manifest = PackageManifest::from_file(&args.manifest)?;

    println!();
    println!("  {}", Style::new().bold().yellow().apply_to(&manifest.id));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Build:"),
        manifest.build_name
    );

    if !manifest.dependencies.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Dependencies:"));
        for dependency in &manifest.dependencies {
            println!("      - {}", Style::new().cyan().apply_to(dependency));
        }
    }

    if !manifest.triggers.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Triggers:"));
        for trigger in &manifest.triggers {
            println!("      - {}", Style::new().cyan().apply_to(trigger));
        }
    }

    if manifest.contents.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Contents:"),
            Style::new().dim().apply_to("none")
        );
        return Ok(());
    }

    println!("    {}", Style::new().bold().apply_to("Contents:"));
    for content in &manifest.contents {
        display_content(content);
    }

    Ok(())
}

/// Display one content entry, with defaults marked
fn display_content(content: &PackageContent) {
    println!("      - {}", Style::new().cyan().apply_to(&content.source));

    let target_label = Style::new().bold().apply_to("Target:");
    if content.has_default_target() {
        println!(
            "        {} {} {}",
            target_label,
            content.target,
            Style::new().dim().apply_to("(default)")
        );
    } else {
        println!("        {} {}", target_label, content.target);
    }

    let filter_label = Style::new().bold().apply_to("Filter:");
    let patterns = content.filter.join(", ");
    if content.has_default_filter() {
        println!(
            "        {} {} {}",
            filter_label,
            patterns,
            Style::new().dim().apply_to("(default)")
        );
    } else {
        println!("        {} {}", filter_label, patterns);
    }
}
