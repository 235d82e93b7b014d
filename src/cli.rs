//! Command-line interface definitions.

use crate::env::BuildEnv;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration resolver for the MCP Hub documentation site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Resolve as a production build (otherwise SITE_ENV decides)
    #[arg(short, long, global = true)]
    pub production: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the configuration and emit the renderer-facing record
    #[command(visible_alias = "r")]
    Resolve {
        /// Write the record to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Pretty-print the emitted JSON
        #[arg(long)]
        pretty: bool,

        /// Repository to read version tags from (default: current directory)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        repo: Option<PathBuf>,
    },

    /// Validate the authored navigation tree and settings
    #[command(visible_alias = "c")]
    Check,
}

impl Cli {
    /// Environment for this invocation: the CLI flag wins, then `SITE_ENV`.
    pub fn env(&self) -> BuildEnv {
        if self.production {
            BuildEnv::Production
        } else {
            BuildEnv::from_env()
        }
    }
}
