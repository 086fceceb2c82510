//! Timestamp helpers.
//!
//! Timestamps persist as RFC 3339 UTC text with fixed microsecond
//! precision, so the stored strings sort lexicographically in
//! chronological order and round-trip without losing equality.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

/// Current UTC time truncated to microsecond precision.
pub fn utc_now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000).unwrap_or(now)
}

/// Render a timestamp in the canonical storage/wire form.
pub fn to_rfc3339_micros(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
