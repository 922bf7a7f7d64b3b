use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pbxpatch_core::BlockSpec;

#[derive(Parser)]
#[command(
    name = "pbxpatch",
    about = "Surgical line-level edits for Xcode project.pbxproj files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Remove a key/value line from one record of the project file
    RemoveField(RemoveFieldArgs),
    /// Rewrite a value on the line carrying a given object identifier
    ReplaceValue(ReplaceValueArgs),
    /// Report whether file references (and their paths) are present
    Check(CheckArgs),
    /// Mint fresh 24-character object identifiers
    NewId(NewIdArgs),
}

#[derive(Args)]
pub struct RemoveFieldArgs {
    /// Path to the project.pbxproj file
    pub file: PathBuf,

    /// Substring marking the record to edit, e.g. `6AA1C217 /* Settings */`
    #[arg(long)]
    pub block: String,

    /// Substring of the field line to drop, e.g. `path = Settings;`
    #[arg(long)]
    pub field: String,

    /// Substring that closes the record
    #[arg(long, default_value = BlockSpec::DEFAULT_TERMINATOR)]
    pub terminator: String,

    /// Compute and report without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ReplaceValueArgs {
    /// Path to the project.pbxproj file
    pub file: PathBuf,

    /// Object identifier of the line to rewrite
    #[arg(long)]
    pub id: String,

    /// Value to replace, e.g. `path = ShortcutSettings.swift;`
    #[arg(long)]
    pub old: String,

    /// Replacement value, e.g. `path = Domain/Models/ShortcutSettings.swift;`
    #[arg(long)]
    pub new: String,

    /// Compute and report without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the project.pbxproj file
    pub file: PathBuf,

    /// File names whose presence to check
    pub names: Vec<String>,

    /// Full paths expected to appear in the project
    #[arg(long = "path")]
    pub paths: Vec<String>,
}

#[derive(Args)]
pub struct NewIdArgs {
    /// How many identifiers to mint
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}
