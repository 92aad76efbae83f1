//! CLI for the ordhash inscription content hash fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ordhash_core::config;
use std::path::Path;

use commands::{run_checksum, run_completions, run_gateways, run_hash};

/// Top-level CLI for ordhash.
#[derive(Debug, Parser)]
#[command(name = "ordhash")]
#[command(about = "Fetch inscription content from ordinals gateways and print its SHA-256", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch an inscription's content and print its SHA-256 digest.
    Hash {
        /// Full inscription ID (with the index suffix, e.g. "...i0").
        inscription_id: String,
    },

    /// Show the configured gateways in fallback order.
    Gateways,

    /// Compute SHA-256 of a local file (e.g. to compare with a fetched digest).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Hash { inscription_id } => run_hash(&cfg, &inscription_id).await?,
            CliCommand::Gateways => run_gateways(&cfg),
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
