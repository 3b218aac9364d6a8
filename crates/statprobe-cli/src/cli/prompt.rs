//! Interactive prompts for probe inputs missing from the command line.

use anyhow::{Context, Result};
use statprobe_core::{Credential, Target};
use std::io::{BufRead, Write};

const HOST_PROMPT: &str = "Enter domain (e.g. your-domain.pages.dev): ";
const KEY_PROMPT: &str = "Enter API key (optional, press Enter to skip): ";

/// Prints `label` and reads one trimmed line; EOF yields an empty string.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read from stdin")?;
    Ok(line.trim().to_string())
}

/// Turns CLI arguments into probe inputs, prompting for what is missing.
///
/// The credential is only prompted for when the host was prompted too, so a
/// fully scripted `statprobe probe <host>` never blocks on stdin. An empty
/// host fails with `ProbeError::EmptyHost` before anything touches the network.
pub fn resolve_inputs<R, W>(
    host: Option<String>,
    api_key: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<(Target, Option<Credential>)>
where
    R: BufRead,
    W: Write,
{
    let (host, api_key) = match host {
        Some(host) => (host, api_key),
        None => {
            let host = prompt_line(input, output, HOST_PROMPT)?;
            let api_key = match api_key {
                Some(key) => Some(key),
                None => Some(prompt_line(input, output, KEY_PROMPT)?),
            };
            (host, api_key)
        }
    };

    let target = Target::parse(&host)?;
    let credential = api_key.as_deref().and_then(Credential::from_input);
    Ok((target, credential))
}
