//! Command-line interface for kintree.
//!
//! This module provides the CLI structure for the `kintr` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, ShowCommand, StatusCommand};

/// kintr - Keep a family tree, one record at a time
///
/// Appends person records to a JSON family tree document and keeps the
/// reciprocal parent/child and spouse links in sync where the referenced
/// records already exist.
#[derive(Debug, Parser)]
#[command(name = "kintr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the family tree document (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; running with no command starts `add`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a person to the tree interactively (the default)
    Add,

    /// List every person in the tree
    List(ListCommand),

    /// Show a single person by id
    Show(ShowCommand),

    /// Show document status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
