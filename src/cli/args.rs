//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source files and write the extracted key catalog
//! - `init`: Initialize a harvest configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Project root; the config file is searched upward from here
    #[arg(long, env = "HARVEST_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory to scan for source files (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Catalog output file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also merge keys into <DIR>/<locale>.json (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Number of entries shown in the preview (overrides config file)
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Report what would be extracted without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hard-coded text into a keyed catalog with draft translations
    Extract(ExtractArgs),
    /// Initialize a new .harvestrc.json configuration file
    Init,
}
