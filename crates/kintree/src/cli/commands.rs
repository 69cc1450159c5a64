//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list people marked alive
    #[arg(long)]
    pub alive: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the person to show (first match on duplicate ids)
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate (defaults to the standard location)
        #[arg(value_name = "FILE")]
        config_file: Option<PathBuf>,
    },
}
