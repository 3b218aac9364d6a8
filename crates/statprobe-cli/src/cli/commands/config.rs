//! `statprobe config` – show where settings live and what they are.

use anyhow::Result;
use statprobe_core::config::{self, ProbeSettings};

pub fn run_show_config(cfg: &ProbeSettings) -> Result<()> {
    println!("Config file: {}", config::config_path()?.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
