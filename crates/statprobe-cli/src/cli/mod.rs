//! CLI for statprobe.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use statprobe_core::config;

use commands::{run_probe, run_show_config};

/// Top-level CLI for the stats endpoint probe.
#[derive(Debug, Parser)]
#[command(name = "statprobe")]
#[command(about = "statprobe: probe a diary /api/stats endpoint and print the result", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// GET https://<HOST>/api/stats and print status, timing and body.
    Probe {
        /// Target domain, e.g. your-domain.pages.dev. Prompted for when omitted.
        host: Option<String>,

        /// API key sent in the X-API-Key header.
        #[arg(long, env = "STATPROBE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Request timeout in seconds (overrides timeout_secs from config).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Probe {
                host,
                api_key,
                timeout,
            } => {
                // Probing never writes the config file.
                let cfg = config::load_or_default();
                tracing::debug!("loaded config: {:?}", cfg);
                run_probe(cfg, host, api_key, timeout).await?
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                run_show_config(&cfg)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
