//! Optional API credential with masked display.

use std::fmt;

/// Number of leading characters of a credential that may be displayed.
pub const VISIBLE_PREFIX_CHARS: usize = 8;

/// Opaque API key sent verbatim in a request header.
///
/// `Debug` and `masked()` only reveal the first [`VISIBLE_PREFIX_CHARS`]
/// characters; use `expose()` to get the full value for the header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps trimmed input; empty input means no credential.
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.is_empty() {
            None
        } else {
            Some(Self(s.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First 8 characters followed by `...`.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(VISIBLE_PREFIX_CHARS).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}
