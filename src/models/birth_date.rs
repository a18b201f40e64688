use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Text shown for a birth date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// A birth date as delivered by the directory endpoint.
///
/// Keeps the raw string alongside the parsed instant so that a malformed
/// value still round-trips and renders as `Invalid Date` instead of failing
/// the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BirthDate {
    raw: String,
    parsed: Option<DateTime<FixedOffset>>,
}

impl BirthDate {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            parsed: parse_instant(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.parsed
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Strictly earlier than `other`. Unparseable dates are never earlier
    /// than anything, and anything parseable is earlier than them.
    pub fn is_before(&self, other: &BirthDate) -> bool {
        match (self.parsed, other.parsed) {
            (Some(a), Some(b)) => a.cmp(&b) == Ordering::Less,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Format as `DD.MM.YYYY`
    pub fn display(&self) -> String {
        match self.parsed {
            Some(dt) => dt.format("%d.%m.%Y").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl From<String> for BirthDate {
    fn from(raw: String) -> Self {
        let parsed = parse_instant(&raw);
        Self { raw, parsed }
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.raw
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Accepts RFC 3339 timestamps, offset-less ISO timestamps and plain
/// `Y-M-D` dates (with or without zero padding). Offset-less values are
/// taken as UTC.
fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
