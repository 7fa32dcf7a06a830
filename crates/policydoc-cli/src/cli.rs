use std::path::PathBuf;

use clap::Parser;

/// Convert privacy-policy draft.md files to JSON.
#[derive(Debug, Parser)]
#[command(name = "policydoc", disable_version_flag = true)]
pub struct Args {
    /// Path(s) or glob patterns of draft Markdown files.
    #[arg(required = true)]
    pub drafts: Vec<String>,

    /// Metadata version [default: from config, else 1.0.0]
    #[arg(long)]
    pub version: Option<String>,

    /// Metadata locale [default: from config, else en-GB]
    #[arg(long)]
    pub locale: Option<String>,

    /// Print JSON to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Write JSON files into this directory instead of next to each draft.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
