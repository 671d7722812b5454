//! Request filter normalisation.
//!
//! Every input here arrives as an untyped query-string value. Parsing is
//! permissive: anything that does not look like the expected type is treated
//! as absent rather than rejected, so a malformed `storeId` simply widens the
//! query instead of failing the request.

use chrono::NaiveDate;
use serde::Serialize;

/// Row count used by ranking queries when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Optional inclusive calendar-day bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// A range with both bounds set.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Both bounds, or `None` when either is missing.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn from_raw(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self::new(
            start_date.and_then(parse_date),
            end_date.and_then(parse_date),
        )
    }
}

/// The filter applied to every sales query: a date range plus optional
/// store and channel identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub range: DateRange,
    pub store_id: Option<i64>,
    pub channel_id: Option<i64>,
}

impl SalesFilter {
    pub fn from_raw(
        start_date: Option<&str>,
        end_date: Option<&str>,
        store_id: Option<&str>,
        channel_id: Option<&str>,
    ) -> Self {
        Self {
            range: DateRange::from_raw(start_date, end_date),
            store_id: store_id.and_then(parse_id),
            channel_id: channel_id.and_then(parse_id),
        }
    }

    /// Same store/channel scope over a different window.
    pub fn with_range(&self, range: DateRange) -> Self {
        Self { range, ..*self }
    }

    pub fn is_empty(&self) -> bool {
        self.range.start_date.is_none()
            && self.range.end_date.is_none()
            && self.store_id.is_none()
            && self.channel_id.is_none()
    }
}

/// Parse a `YYYY-MM-DD` date. A full ISO timestamp is accepted and truncated
/// to its calendar day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    trimmed
        .get(..10)
        .filter(|_| trimmed.as_bytes().get(10) == Some(&b'T'))
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// Parse a positive integer identifier. Zero, negatives and non-numeric
/// input are all absent.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Parse a ranking limit, falling back to [`DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(parse_id).unwrap_or(DEFAULT_LIMIT)
}

/// Parse a comma-separated identifier list, dropping invalid entries and
/// repeats while keeping first-seen order.
pub fn parse_id_list(raw: Option<&str>) -> Vec<i64> {
    let mut ids: Vec<i64> = Vec::new();
    for id in raw.unwrap_or_default().split(',').filter_map(parse_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
