//! Response header parsing and content-type classification.

/// Closed classification of a response body, decided once from `Content-Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    PlainText,
}

const JSON_MEDIA_TYPE: &str = "application/json";

impl ResponseKind {
    /// `Json` when the content type starts with `application/json`
    /// (ASCII case-insensitive); anything else, or no header, is `PlainText`.
    pub fn classify(content_type: Option<&str>) -> Self {
        match content_type.map(str::trim_start) {
            Some(ct)
                if ct.len() >= JSON_MEDIA_TYPE.len()
                    && ct.as_bytes()[..JSON_MEDIA_TYPE.len()]
                        .eq_ignore_ascii_case(JSON_MEDIA_TYPE.as_bytes()) =>
            {
                ResponseKind::Json
            }
            _ => ResponseKind::PlainText,
        }
    }
}

/// Decodes a text body using the `charset` of its content type.
///
/// ISO-8859-1 (and its aliases) maps each byte to the same code point; every
/// other charset, or none, is read as UTF-8 with invalid sequences replaced.
pub(crate) fn decode_text(body: &[u8], content_type: Option<&str>) -> String {
    match content_type.and_then(charset) {
        Some(cs) if is_latin1(&cs) => body.iter().map(|&b| char::from(b)).collect(),
        _ => String::from_utf8_lossy(body).into_owned(),
    }
}

fn charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    })
}

fn is_latin1(charset: &str) -> bool {
    matches!(charset, "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "l1")
}

/// Extracts `Content-Type` from collected header lines.
///
/// When redirects are followed curl reports headers of every hop; a status
/// line (`HTTP/...`) starts a new block, so only the final response counts.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }
    content_type
}
