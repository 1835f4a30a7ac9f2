//! CLI argument parsing using clap.

use anyhow::Context;
use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use dirpack_core::PackConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Package a directory into a ZIP archive
    Create(CreateArgs),
    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Directory to archive
    #[arg(value_name = "SOURCE_DIR", required_unless_present = "params")]
    pub source: Option<PathBuf>,

    /// Archive to create
    #[arg(value_name = "DESTINATION", required_unless_present = "params")]
    pub destination: Option<PathBuf>,

    /// Read task parameters from a JSON file (flags override its values)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Delete an existing destination before writing
    #[arg(short = 'f', long)]
    pub overwrite: bool,

    /// Prefix entries with the source directory's name (ignored with --exclude)
    #[arg(long)]
    pub include_base_directory: bool,

    /// Leave out files whose full path matches this case-insensitive regex
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// DEFLATE compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Skip symlinks instead of archiving what they point to
    #[arg(long)]
    pub no_follow_symlinks: bool,
}

impl CreateArgs {
    /// Builds task parameters from the params file, if any, and the flags.
    ///
    /// Boolean flags can only switch a setting on; exclusion patterns given
    /// on the command line are appended to those from the file.
    pub fn to_config(&self) -> Result<PackConfig> {
        let mut config = match &self.params {
            Some(path) => PackConfig::from_json_file(path).with_context(|| {
                format!("Failed to read task parameters from '{}'", path.display())
            })?,
            None => PackConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_directory.clone_from(source);
        }
        if let Some(destination) = &self.destination {
            config.destination_archive.clone_from(destination);
        }

        config.overwrite_destination |= self.overwrite;
        config.include_base_directory |= self.include_base_directory;

        if !self.exclude.is_empty() {
            config
                .exclude_patterns
                .get_or_insert_with(Vec::new)
                .extend(self.exclude.iter().cloned());
        }
        if let Some(level) = self.compression_level {
            config.compression_level = level;
        }
        if self.no_follow_symlinks {
            config.follow_symlinks = false;
        }

        Ok(config)
    }
}
