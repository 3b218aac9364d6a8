//! Console rendering of a probe.

use std::io::{self, Write};

use crate::credential::Credential;
use crate::error::ProbeError;
use crate::probe::{ProbeResponse, ResponseBody};
use crate::stats::{ApiFailure, StatsSummary};

pub fn write_preamble<W: Write + ?Sized>(
    out: &mut W,
    url: &str,
    credential: Option<&Credential>,
) -> io::Result<()> {
    writeln!(out, "Probing API: {url}")?;
    if let Some(cred) = credential {
        writeln!(out, "Using API key: {}", cred.masked())?;
    }
    Ok(())
}

pub fn write_request_failed<W: Write + ?Sized>(out: &mut W, err: &ProbeError) -> io::Result<()> {
    writeln!(out, "Request failed: {}", root_message(err))
}

// `ProbeError::Request` already prefixes "request failed"; print the cause.
fn root_message(err: &ProbeError) -> String {
    match err {
        ProbeError::Request(e) => e.to_string(),
        other => other.to_string(),
    }
}

/// Status and elapsed time first, then the body by kind.
pub fn write_response<W: Write + ?Sized>(out: &mut W, response: &ProbeResponse) -> io::Result<()> {
    writeln!(out, "Status: {}", response.status)?;
    writeln!(out, "Elapsed: {:.2}s", response.elapsed.as_secs_f64())?;

    match &response.body {
        ResponseBody::Json {
            document,
            summary,
            api_failure,
        } => {
            writeln!(out, "Response data:")?;
            let pretty = serde_json::to_string_pretty(document).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")?;
            if let Some(summary) = summary {
                write_summary(out, summary)?;
            }
            if let Some(failure) = api_failure {
                write_api_failure(out, failure)?;
            }
        }
        ResponseBody::PlainText(text) => {
            writeln!(out, "Response body:")?;
            writeln!(out, "{text}")?;
        }
        ResponseBody::Malformed { error, raw } => {
            writeln!(out, "Malformed response: declared JSON but body did not parse ({error})")?;
            writeln!(out, "Response body:")?;
            writeln!(out, "{raw}")?;
        }
    }
    Ok(())
}

fn write_summary<W: Write + ?Sized>(out: &mut W, s: &StatsSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "   Consecutive days: {} days", s.consecutive_days)?;
    writeln!(out, "   Total days with entries: {} days", s.total_days_with_entries)?;
    writeln!(out, "   Total entries: {} entries", s.total_entries)?;
    if let Some(latest) = &s.latest_entry_date {
        writeln!(out, "   Latest entry: {latest}")?;
    }
    if let Some(first) = &s.first_entry_date {
        writeln!(out, "   First entry: {first}")?;
    }
    if let Some(start) = &s.current_streak_start {
        writeln!(out, "   Current streak since: {start}")?;
    }
    Ok(())
}

fn write_api_failure<W: Write + ?Sized>(out: &mut W, f: &ApiFailure) -> io::Result<()> {
    writeln!(out)?;
    match (&f.error, &f.message) {
        (Some(error), Some(message)) => writeln!(out, "API error: {error}: {message}"),
        (Some(only), None) | (None, Some(only)) => writeln!(out, "API error: {only}"),
        (None, None) => Ok(()),
    }
}
