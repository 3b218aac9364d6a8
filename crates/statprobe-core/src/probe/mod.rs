//! The stats endpoint probe: build the request, perform it, classify and
//! report the response.

mod parse;
mod transport;

pub use parse::ResponseKind;
pub use transport::{CurlTransport, RawResponse, Transport};

use serde_json::Value;
use std::io::{self, Write};
use std::time::Duration;

use crate::config::ProbeSettings;
use crate::credential::Credential;
use crate::error::ProbeError;
use crate::report;
use crate::stats::{ApiFailure, StatsSummary};
use crate::target::Target;

/// Everything one probe needs, independent of how it was gathered
/// (flags, prompts, or a programmatic caller).
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub target: Target,
    pub credential: Option<Credential>,
    pub settings: ProbeSettings,
}

impl ProbeConfig {
    pub fn new(target: Target, credential: Option<Credential>) -> Self {
        Self {
            target,
            credential,
            settings: ProbeSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ProbeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Builds the GET request: `Accept: application/json` always, the
    /// credential header only when a credential is present.
    pub fn request(&self) -> Result<ProbeRequest, ProbeError> {
        let url = self.target.request_url(&self.settings.stats_path)?;
        let mut req = ProbeRequest::new(url.as_str(), self.settings.timeout());
        req.follow_redirects = self.settings.follow_redirects;
        if let Some(cred) = &self.credential {
            req.headers
                .push((self.settings.api_key_header.clone(), cred.expose().to_string()));
        }
        Ok(req)
    }
}

/// A fully built GET request.
#[derive(Clone)]
pub struct ProbeRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub follow_redirects: bool,
}

impl ProbeRequest {
    /// Request for `url` with only the `Accept: application/json` header.
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            timeout,
            follow_redirects: true,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Header values may hold the credential.
impl std::fmt::Debug for ProbeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("ProbeRequest")
            .field("url", &self.url)
            .field("headers", &names)
            .field("timeout", &self.timeout)
            .field("follow_redirects", &self.follow_redirects)
            .finish()
    }
}

/// Classified response.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u32,
    pub elapsed: Duration,
    pub body: ResponseBody,
}

#[derive(Debug, Clone)]
pub enum ResponseBody {
    Json {
        document: Value,
        summary: Option<StatsSummary>,
        api_failure: Option<ApiFailure>,
    },
    PlainText(String),
    /// Declared JSON but the body did not parse.
    Malformed { error: String, raw: String },
}

impl ProbeResponse {
    pub fn kind(&self) -> ResponseKind {
        match self.body {
            ResponseBody::PlainText(_) => ResponseKind::PlainText,
            ResponseBody::Json { .. } | ResponseBody::Malformed { .. } => ResponseKind::Json,
        }
    }
}

/// Classifies a raw response by its declared content type. Text bodies are
/// decoded per the declared charset (ISO-8859-1 or UTF-8).
pub fn classify(raw: RawResponse) -> ProbeResponse {
    let body = match ResponseKind::classify(raw.content_type.as_deref()) {
        ResponseKind::Json => match serde_json::from_slice::<Value>(&raw.body) {
            Ok(document) => ResponseBody::Json {
                summary: StatsSummary::from_document(&document),
                api_failure: ApiFailure::from_document(&document),
                document,
            },
            Err(e) => ResponseBody::Malformed {
                error: e.to_string(),
                raw: parse::decode_text(&raw.body, raw.content_type.as_deref()),
            },
        },
        ResponseKind::PlainText => ResponseBody::PlainText(parse::decode_text(
            &raw.body,
            raw.content_type.as_deref(),
        )),
    };
    ProbeResponse {
        status: raw.status,
        elapsed: raw.elapsed,
        body,
    }
}

/// Builds and performs the request; no output.
pub fn run<T: Transport + ?Sized>(
    transport: &T,
    config: &ProbeConfig,
) -> Result<ProbeResponse, ProbeError> {
    let request = config.request()?;
    let raw = transport.get(&request)?;
    Ok(classify(raw))
}

/// How a reported probe ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// A response was received and rendered (any HTTP status).
    Completed { status: u32, kind: ResponseKind },
    /// JSON was declared but the body did not parse.
    MalformedResponse { status: u32 },
    /// Invalid host URL or transport-level failure; reported, not propagated.
    RequestFailed,
}

/// Performs the probe and writes the diagnostic report to `out`.
///
/// A host that does not form a URL and any transport failure are printed and
/// end the run with `ProbeStatus::RequestFailed`, without touching the
/// transport in the first case. Only I/O errors on `out` escape.
pub fn probe_and_report<T, W>(
    transport: &T,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ProbeStatus, ProbeReportError>
where
    T: Transport + ?Sized,
    W: Write + ?Sized,
{
    let request = match config.request() {
        Ok(request) => request,
        Err(e @ ProbeError::InvalidHost { .. }) => {
            tracing::warn!(host = config.target.host(), "{}", e);
            report::write_request_failed(out, &e)?;
            return Ok(ProbeStatus::RequestFailed);
        }
        Err(e) => return Err(e.into()),
    };
    report::write_preamble(out, &request.url, config.credential.as_ref())?;
    let masked = config
        .credential
        .as_ref()
        .map(Credential::masked)
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(url = %request.url, credential = %masked, "probing stats endpoint");

    let raw = match transport.get(&request) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(url = %request.url, timeout = e.is_timeout(), "{}", e);
            report::write_request_failed(out, &e)?;
            return Ok(ProbeStatus::RequestFailed);
        }
    };

    let response = classify(raw);
    tracing::info!(
        status = response.status,
        elapsed_ms = response.elapsed.as_millis() as u64,
        kind = ?response.kind(),
        "stats endpoint responded"
    );
    report::write_response(out, &response)?;

    Ok(match &response.body {
        ResponseBody::Malformed { error, .. } => {
            tracing::warn!(status = response.status, "malformed JSON response: {}", error);
            ProbeStatus::MalformedResponse {
                status: response.status,
            }
        }
        _ => ProbeStatus::Completed {
            status: response.status,
            kind: response.kind(),
        },
    })
}

/// Errors that escape `probe_and_report`.
#[derive(Debug, thiserror::Error)]
pub enum ProbeReportError {
    #[error(transparent)]
    Input(#[from] ProbeError),
    #[error("write report: {0}")]
    Output(#[from] io::Error),
}
