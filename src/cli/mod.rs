//! CLI module for tooldex - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for the interactive table,
//! headless CSV export, and catalog listing.

pub mod commands;

pub use commands::Cli;
