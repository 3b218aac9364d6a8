//! Target host normalization and request URL construction.

use crate::error::ProbeError;
use url::Url;

/// Path of the stats endpoint when the config does not override it.
pub const DEFAULT_STATS_PATH: &str = "/api/stats";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// A normalized host (optionally with port), without protocol prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
}

impl Target {
    /// Normalizes user input into a target host.
    ///
    /// Trims whitespace, strips one leading `http://` or `https://`
    /// (case-insensitive) and trailing slashes. Fails with `EmptyHost` if
    /// nothing is left.
    pub fn parse(input: &str) -> Result<Self, ProbeError> {
        let host = strip_scheme(input.trim()).trim_end_matches('/').trim();
        if host.is_empty() {
            return Err(ProbeError::EmptyHost);
        }
        Ok(Self {
            host: host.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds `https://<host><path>`; `path` gets a leading `/` if missing.
    /// The scheme is always https, whatever prefix the input carried.
    pub fn request_url(&self, path: &str) -> Result<Url, ProbeError> {
        let path = path.trim();
        let raw = if path.starts_with('/') {
            format!("https://{}{}", self.host, path)
        } else {
            format!("https://{}/{}", self.host, path)
        };
        let url = Url::parse(&raw).map_err(|source| ProbeError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(ProbeError::InvalidHost {
                host: self.host.clone(),
                source: url::ParseError::EmptyHost,
            });
        }
        Ok(url)
    }
}

fn strip_scheme(s: &str) -> &str {
    for scheme in SCHEMES {
        if s.len() >= scheme.len() && s[..scheme.len()].eq_ignore_ascii_case(scheme) {
            return &s[scheme.len()..];
        }
    }
    s
}
