use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI arguments for the overcheck binary.
#[derive(Parser, Debug)]
#[command(
    name = "overcheck",
    version,
    about = "Checks that @overload groups end in a compatible implementation"
)]
pub struct CliArgs {
    /// Path to overcheck.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Print names of manifests that would be checked and then stop processing.
    #[arg(long = "listFilesOnly", alias = "list-files-only")]
    pub list_files_only: bool,

    // ==================== Output Formatting ====================
    /// Enable color and formatting in the output.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Declaration manifests (`*.decls.json`) or directories containing them.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `file:line:col - warning OVL1001: message` with source snippets.
    #[default]
    Text,
    /// A JSON array of diagnostics.
    Json,
}
