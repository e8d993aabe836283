//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tui: interactive table (default)
//! - export: fetch everything, then write the CSV
//! - list: print the catalog without fetching

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tooldex - a directory of AI tools with generated descriptions
#[derive(Parser, Debug)]
#[command(name = "tooldex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the interactive directory (default)
    Tui,

    /// Fetch every description, then write ai_tools_directory.csv
    Export {
        /// Directory to write into (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the tool catalog without contacting the provider
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["tooldex"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_export_with_output() {
        let cli = Cli::parse_from(["tooldex", "export", "--output", "/tmp/csv"]);
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                output: Some(PathBuf::from("/tmp/csv"))
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tooldex", "list", "-v", "--config", "x.yml"]);
        assert_eq!(cli.command, Some(Commands::List));
        assert!(cli.is_verbose());
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }
}
