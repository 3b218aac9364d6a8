//! HTTP transport for the probe.
//!
//! Uses the curl crate (libcurl) for the single GET. The trait exists so the
//! probe can be driven by an in-memory transport in tests.

use std::str;
use std::time::{Duration, Instant};

use super::parse;
use super::ProbeRequest;
use crate::error::ProbeError;

/// Response as received, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code of the final response.
    pub status: u32,
    /// `Content-Type` of the final response, if any.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
}

/// Performs one GET and returns the raw response.
///
/// Any transport-level fault is returned as `ProbeError::Request`; HTTP
/// error statuses are not errors here.
pub trait Transport {
    fn get(&self, request: &ProbeRequest) -> Result<RawResponse, ProbeError>;
}

/// libcurl-backed transport. Blocks the current thread; call from
/// `spawn_blocking` if used from async code.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, request: &ProbeRequest) -> Result<RawResponse, ProbeError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.get(true)?;
        easy.follow_location(request.follow_redirects)?;
        easy.connect_timeout(request.timeout)?;
        easy.timeout(request.timeout)?;

        // Build curl list for request headers (e.g. "Name: value").
        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        let started = Instant::now();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let elapsed = started.elapsed();

        let status = easy.response_code()?;
        Ok(RawResponse {
            status,
            content_type: parse::content_type(&headers),
            body,
            elapsed,
        })
    }
}
