//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report key conflicts, redundant values and extraction problems
//! - `preview`: Show the keys that would be exported, grouped by prefix
//! - `export`: Write one CSV translation sheet per key prefix
//! - `init`: Initialize rosetta configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Preview(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory or single file to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extensions to scan (overrides config file)
    /// Repeat the flag or separate with commas: -e vue -e ts, -e vue,ts
    #[arg(short, long, value_name = "EXT", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory to write the CSV files into (overrides config file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Target language codes, one empty column each (overrides config file)
    /// Repeat the flag or separate with commas: --languages fr,de
    #[arg(short, long, value_name = "CODE", value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Abort without writing anything when issues are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation calls for conflicts, redundancy and malformed calls
    Check(CheckCommand),
    /// Preview the translations that would be exported, grouped by key prefix
    Preview(PreviewCommand),
    /// Export one CSV translation sheet per key prefix
    Export(ExportCommand),
    /// Initialize a new .rosettarc.json configuration file
    Init,
}
