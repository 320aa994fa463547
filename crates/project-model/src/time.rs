//! Canonical millisecond time codec.
//!
//! Upstream segment timing arrives either as floating-point seconds or as
//! SRT-style `HH:MM:SS,mmm` strings. Everything downstream works in
//! integer milliseconds; conversion happens exactly once, here.
//!
//! Parsing fails soft: segment text is user/LLM-derived and must never
//! abort a batch export, so malformed values collapse to 0 with a warning
//! instead of an error.

use serde::{Deserialize, Serialize};

/// A time value as produced by the upstream segment pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// Seconds since the start of the source media.
    Seconds(f64),
    /// SRT-style timestamp, `H:MM:SS[.,]fff` or `MM:SS[.,]fff`.
    Text(String),
}

/// A contiguous span on a timeline, in integer milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Offset from the timeline origin.
    pub start: u64,

    /// Span length. Always positive in normalized output.
    pub duration: u64,
}

impl TimeRange {
    /// Create a range from start and duration.
    pub fn new(start: u64, duration: u64) -> Self {
        Self { start, duration }
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }
}

/// Convert a heterogeneous time value to canonical integer milliseconds.
///
/// Numeric input is `round(value * 1000)`, clamped at zero. String input
/// accepts `H:MM:SS[.,]fff` and `MM:SS[.,]fff`; the comma separator is
/// normalized to a decimal point first. Malformed input yields 0 with a
/// warning.
pub fn parse_to_ms(value: &TimeValue) -> u64 {
    match value {
        TimeValue::Seconds(secs) => {
            if !secs.is_finite() || *secs < 0.0 {
                tracing::warn!(seconds = *secs, "invalid numeric time, using 0");
                return 0;
            }
            (secs * 1000.0).round() as u64
        }
        TimeValue::Text(text) => parse_text_to_ms(text).unwrap_or_else(|| {
            tracing::warn!(text = %text, "unparseable time string, using 0");
            0
        }),
    }
}

/// Format milliseconds as `HH:MM:SS.mmm` for diagnostics.
///
/// On-disk storage is always integer milliseconds; this form only appears
/// in logs and error messages.
pub fn format_from_ms(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

fn parse_text_to_ms(text: &str) -> Option<u64> {
    let text = text.trim().replace(',', ".");
    let (clock, frac) = match text.split_once('.') {
        Some((clock, frac)) => (clock, Some(frac)),
        None => (text.as_str(), None),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds): (u64, u64, u64) = match fields.as_slice() {
        [h, m, s] => (h.parse().ok()?, m.parse().ok()?, s.parse().ok()?),
        [m, s] => (0, m.parse().ok()?, s.parse().ok()?),
        _ => return None,
    };

    let millis = match frac {
        Some(digits) => fractional_ms(digits)?,
        None => 0,
    };

    Some((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
}

/// Positional interpretation of fractional-second digits, preserved for
/// SRT round-trip compatibility: one digit lands in the hundreds place
/// (`"5"` is 500 ms), two digits in the tens place (`"05"` is 50 ms),
/// three or more digits are read literally with the tail dropped
/// (`"005"` is 5 ms).
fn fractional_ms(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.len() {
        1 => Some(digits.parse::<u64>().ok()? * 100),
        2 => Some(digits.parse::<u64>().ok()? * 10),
        _ => digits[..3].parse::<u64>().ok(),
    }
}
