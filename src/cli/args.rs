//! Command-line argument parsing for Hub Fetcher
//!
//! This module defines the CLI structure using clap derive macros. The
//! tool has a single operation (fetch one repository), so there are no
//! subcommands: the repository id is positional and everything else is a
//! flag.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::constants::files;

/// Hub Fetcher - download a Hugging Face repository
#[derive(Parser, Debug)]
#[command(
    name = "hub_fetcher",
    version,
    about = "Download all files of a Hugging Face model or dataset repository",
    long_about = "Downloads every file belonging to a Hugging Face Hub repository into a local \
directory named after the repository, reporting aggregate byte progress. Files are transferred \
one at a time, in the order the Hub lists them."
)]
pub struct Cli {
    /// Fetch options
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Arguments describing what to fetch and where to put it
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// The Hugging Face repository ID (e.g. 'google/flan-t5-xxl')
    #[arg(value_name = "REPO_ID")]
    pub repo_id: String,

    /// The type of repository (model or dataset)
    ///
    /// Accepted as a raw string and validated before any I/O so an
    /// unsupported value produces the canonical error message rather
    /// than a clap usage dump.
    #[arg(long = "type", value_name = "TYPE", default_value = "model")]
    pub repo_type: String,

    /// Base output directory; the repository directory is created inside it
    #[arg(short, long, value_name = "DIR", default_value = files::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Global arguments
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_repo_id_is_required() {
        assert!(parse(&["hub_fetcher"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["hub_fetcher", "google/flan-t5-xxl"]).unwrap();
        assert_eq!(cli.fetch.repo_id, "google/flan-t5-xxl");
        assert_eq!(cli.fetch.repo_type, "model");
        assert_eq!(cli.fetch.output, PathBuf::from(files::DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_type_flag_is_passed_through_unvalidated() {
        // Validation happens in the orchestrator, not in clap, so the
        // canonical error message can be printed
        let cli = parse(&["hub_fetcher", "squad", "--type", "dataset"]).unwrap();
        assert_eq!(cli.fetch.repo_type, "dataset");

        let cli = parse(&["hub_fetcher", "squad", "--type", "repo"]).unwrap();
        assert_eq!(cli.fetch.repo_type, "repo");
    }

    #[test]
    fn test_output_flag() {
        let cli = parse(&["hub_fetcher", "gpt2", "--output", "out"]).unwrap();
        assert_eq!(cli.fetch.output, PathBuf::from("out"));
    }

    #[test]
    fn test_log_level() {
        let quiet = parse(&["hub_fetcher", "gpt2", "--quiet"]).unwrap();
        assert_eq!(quiet.log_level(), tracing::Level::ERROR);

        let verbose = parse(&["hub_fetcher", "gpt2", "--verbose"]).unwrap();
        assert_eq!(verbose.log_level(), tracing::Level::INFO);

        let default = parse(&["hub_fetcher", "gpt2"]).unwrap();
        assert_eq!(default.log_level(), tracing::Level::WARN);
    }
}
