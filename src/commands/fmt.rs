//! Fmt command implementation
//!
//! Rewrites a manifest into canonical form: content entries collapse to
//! the bare source string where target and filter are at their
//! defaults, everything else becomes an expanded object with defaults
//! elided. Formatting never changes what the manifest means.

use console::Style;

use crate::cli::FmtArgs;
use crate::error::Result;
use crate::manifest::PackageManifest;

/// Run fmt command
pub fn run(args: FmtArgs) -> Result<()> {
    let manifest = PackageManifest::from_file(&args.manifest)?;

    if args.write {
        manifest.to_file(&args.manifest)?;
        println!(
            "{} {}",
            Style::new().green().bold().apply_to("Formatted"),
            args.manifest.display()
        );
    } else {
        println!("{}", manifest.to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_write_canonicalizes_entries() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{
                "id": "app.web",
                "buildName": "WebBuild",
                "contents": [
                    {"source": "bin", "target": ".", "filter": ["**/*"]},
                    {"source": "assets", "target": "static", "filter": ["*.css"]}
                ]
            }"#,
        )
        .unwrap();

        run(FmtArgs {
            manifest: path.clone(),
            write: true,
        })
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"bin\""));
        assert!(!written.contains("\"**/*\""));
        assert!(written.contains("\"filter\": \"*.css\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_run_write_is_idempotent() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"id":"p","buildName":"B","contents":["one",{"source":"two","target":"out"}]}"#,
        )
        .unwrap();

        run(FmtArgs {
            manifest: path.clone(),
            write: true,
        })
        .unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        run(FmtArgs {
            manifest: path.clone(),
            write: true,
        })
        .unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_rejects_broken_manifest() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(&path, r#"{"contents":[3]}"#).unwrap();

        let result = run(FmtArgs {
            manifest: path,
            write: false,
        });
        assert!(result.is_err());
    }
}
