//! Best-effort extraction of the diary stats summary from a JSON document.
//!
//! The endpoint answers `{ "success": bool, "data": {...}, "error"?, "message"? }`.
//! Each summary field is read on its own, so a missing field only falls back
//! to its default instead of discarding the whole summary.

use serde_json::Value;
use std::fmt;

/// A counter as the server sent it.
///
/// Only an absent key becomes 0; any present value is kept and displayed
/// unchanged (strings without quotes), so `-3`, `2.5` or `"7"` print as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count(Value);

impl Count {
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Count(Value::from(0u64))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Fields printed in the summary block.
///
/// Counters default to 0 only when absent; date fields are `None` when
/// absent, null, empty or not a string, and their lines are then omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub consecutive_days: Count,
    pub total_days_with_entries: Count,
    pub total_entries: Count,
    pub latest_entry_date: Option<String>,
    pub first_entry_date: Option<String>,
    pub current_streak_start: Option<String>,
}

impl StatsSummary {
    /// Returns a summary when `success` is `true` and `data` is present.
    pub fn from_document(doc: &Value) -> Option<Self> {
        if doc.get("success").and_then(Value::as_bool) != Some(true) {
            return None;
        }
        let data = doc.get("data")?;
        Some(Self {
            consecutive_days: count(data, "consecutive_days"),
            total_days_with_entries: count(data, "total_days_with_entries"),
            total_entries: count(data, "total_entries"),
            latest_entry_date: text(data, "latest_entry_date"),
            first_entry_date: text(data, "first_entry_date"),
            current_streak_start: text(data, "current_streak_start"),
        })
    }
}

/// Error reported by the endpoint itself (`success: false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiFailure {
    /// Returns the failure when `success` is `false` and at least one of
    /// `error` / `message` is a non-empty string.
    pub fn from_document(doc: &Value) -> Option<Self> {
        if doc.get("success").and_then(Value::as_bool) != Some(false) {
            return None;
        }
        let error = text(doc, "error");
        let message = text(doc, "message");
        if error.is_none() && message.is_none() {
            return None;
        }
        Some(Self { error, message })
    }
}

fn count(obj: &Value, key: &str) -> Count {
    obj.get(key).cloned().map(Count).unwrap_or_default()
}

fn text(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
