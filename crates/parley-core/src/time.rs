use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a timestamp as the store writes it. SQLite's `datetime('now')`
/// produces "YYYY-MM-DD HH:MM:SS" without a timezone, so fall back to a
/// naive parse treated as UTC when RFC 3339 fails.
pub(crate) fn parse_store_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|ndt| ndt.and_utc())
    })
}
