//! CLI command handlers.

mod config;
mod probe;

pub use config::run_show_config;
pub use probe::run_probe;
