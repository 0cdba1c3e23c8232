//! CLI argument definitions using clap
//!
//! Commands:
//! - release-intake validate [--organization] [--config <path>] [<file>]
//! - release-intake serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// release-intake - validation of release creation payloads
#[derive(Parser, Debug)]
#[command(name = "release-intake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a release payload and print its normalized form
    Validate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use the organization-scoped schema (adds headCommits and refs)
        #[arg(long)]
        organization: bool,

        /// Payload file; read from stdin when omitted
        input: Option<PathBuf>,
    },

    /// Serve the validation endpoints over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
