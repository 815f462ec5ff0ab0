use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, Utc};

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, thiserror::Error)]
#[error("invalid time format '{0}'")]
pub struct InvalidTimeFormat(pub String);

/// Renders store timestamps into the time string clients display.
///
/// History replies and live broadcasts go through the same formatter, so a
/// message shows the same time in both.
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    pattern: String,
}

impl TimestampFormat {
    /// Build from a strftime pattern, rejecting patterns chrono can't render.
    pub fn new(pattern: impl Into<String>) -> Result<Self, InvalidTimeFormat> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(InvalidTimeFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format an instant in the server's local time zone.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(&self.pattern).to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Parse a timestamp as written by the store.
///
/// Accepts RFC 3339 and SQLite's bare `YYYY-MM-DD HH:MM:SS[.fff]` form,
/// which carries no zone and is taken as UTC.
pub fn parse_store_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(|ndt| ndt.and_utc())
        })
}
