//! Error type for building and performing a probe.

use thiserror::Error;

/// Failure of a probe before a usable response was obtained.
///
/// `EmptyHost` is raised before any network activity so the caller can exit
/// non-zero; `InvalidHost` and `Request` are reported by the probe as a
/// failed request.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Host input was empty after trimming and prefix removal.
    #[error("host must not be empty")]
    EmptyHost,

    /// Host does not form a valid request URL.
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level fault: DNS, TLS, connection refused, timeout, etc.
    #[error("request failed: {0}")]
    Request(#[from] curl::Error),
}

impl ProbeError {
    /// True for the one error that ends a run with a non-zero exit status.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ProbeError::EmptyHost)
    }

    /// True when curl gave up because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Request(e) if e.is_operation_timedout())
    }
}
