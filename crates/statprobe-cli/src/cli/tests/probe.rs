//! Tests for the probe and config subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_probe_without_host() {
    match parse(&["statprobe", "probe"]) {
        CliCommand::Probe { host, timeout, .. } => {
            assert!(host.is_none());
            assert!(timeout.is_none());
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_with_host() {
    match parse(&["statprobe", "probe", "https://diary.example.com"]) {
        CliCommand::Probe { host, .. } => {
            assert_eq!(host.as_deref(), Some("https://diary.example.com"));
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_api_key_and_timeout() {
    match parse(&[
        "statprobe",
        "probe",
        "diary.example.com",
        "--api-key",
        "abc123def456",
        "--timeout",
        "3",
    ]) {
        CliCommand::Probe {
            host,
            api_key,
            timeout,
        } => {
            assert_eq!(host.as_deref(), Some("diary.example.com"));
            assert_eq!(api_key.as_deref(), Some("abc123def456"));
            assert_eq!(timeout, Some(3));
        }
        _ => panic!("expected Probe with --api-key and --timeout"),
    }
}

#[test]
fn cli_parse_probe_rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["statprobe", "probe", "h", "--timeout", "0"]).is_err());
}

#[test]
fn cli_parse_config() {
    match parse(&["statprobe", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["statprobe"]).is_err());
}
