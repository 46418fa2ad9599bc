//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file (overrides the config file)
    #[arg(short, long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to the JSON configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Do not insert demonstration rows into an empty database
    #[arg(long, default_value_t = false, global = true)]
    pub no_seed: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for non-interactive commands
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Command to run; the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_no_subcommand_defaults() {
        let args = Args::try_parse_from(["customer_tracker"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.db, None);
        assert_eq!(args.config, PathBuf::from(".customer_tracker.json"));
        assert!(!args.no_seed);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[rstest]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "customer_tracker",
            "stats",
            "--db",
            "shop.db",
            "--format",
            "json",
            "-vv",
            "--no-seed",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(Command::Stats(_))));
        assert_eq!(args.db, Some(PathBuf::from("shop.db")));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert!(args.no_seed);
    }

    #[rstest]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["customer_tracker", "--format", "xml"]).is_err());
    }
}
