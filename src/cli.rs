//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Packfold - package manifest toolkit
///
/// Check, format and inspect package manifests used by build pipelines.
#[derive(Parser, Debug)]
#[command(
    name = "packfold",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package manifest toolkit for build pipelines",
    long_about = "Packfold checks, formats and inspects package manifests. Manifest content \
                  entries accept a bare source string or an expanded object with source, \
                  target and filter; formatting rewrites every entry to its most compact \
                  shape without changing meaning.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  packfold check dist/manifest.json\n    \
                  packfold fmt dist/manifest.json\n    \
                  packfold fmt --write dist/manifest.json\n    \
                  packfold show dist/manifest.json\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/packfold/packfold"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate a manifest
    Check(CheckArgs),

    /// Rewrite a manifest into canonical form
    Fmt(FmtArgs),

    /// Show manifest contents
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a manifest:\n    packfold check dist/manifest.json")]
pub struct CheckArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,
}

/// Arguments for the fmt command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the canonical form:\n    packfold fmt dist/manifest.json\n\n\
                  Rewrite the file in place:\n    packfold fmt --write dist/manifest.json")]
pub struct FmtArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,

    /// Rewrite the file instead of printing to stdout
    #[arg(long, short = 'w')]
    pub write: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show manifest contents:\n    packfold show dist/manifest.json")]
pub struct ShowArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    packfold completions --shell bash > ~/.bash_completion.d/packfold\n\n\
                  Generate zsh completions:\n    packfold completions --shell zsh > ~/.zfunc/_packfold\n\n\
                  Generate fish completions:\n    packfold completions --shell fish > ~/.config/fish/completions/packfold.fish\n\n\
                  Generate PowerShell completions:\n    packfold completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
