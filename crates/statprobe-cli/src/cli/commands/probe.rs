//! `statprobe probe [HOST]` – query the stats endpoint once and print the report.

use anyhow::{Context, Result};
use statprobe_core::config::ProbeSettings;
use statprobe_core::{probe_and_report, CurlTransport, ProbeConfig, ProbeStatus};
use std::io::{self, Write};

use crate::cli::prompt;

pub async fn run_probe(
    mut settings: ProbeSettings,
    host: Option<String>,
    api_key: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    if let Some(secs) = timeout {
        settings.timeout_secs = secs;
    }

    // Prompts and the curl call both block; keep them off the runtime threads.
    let status = tokio::task::spawn_blocking(move || -> Result<ProbeStatus> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let (target, credential) =
            prompt::resolve_inputs(host, api_key, &mut stdin.lock(), &mut stdout.lock())?;
        let config = ProbeConfig::new(target, credential).with_settings(settings);

        let mut out = stdout.lock();
        let status = probe_and_report(&CurlTransport, &config, &mut out)?;
        out.flush()?;
        Ok(status)
    })
    .await
    .context("probe task join")??;

    tracing::debug!(?status, "probe finished");
    Ok(())
}
