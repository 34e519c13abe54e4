//! Comparator building blocks shared by the domain impls.

use std::cmp::Ordering;

use clubhouse_core::SortOrder;
use tracing::debug;

/// Parse a date-like sort key into epoch milliseconds: RFC 3339 first,
/// then a plain ISO date at midnight UTC. Date strings must never be
/// compared lexically; mixed formats diverge from chronological order.
/// Unparseable input sorts as epoch 0.
pub fn parse_instant_ms(s: &str) -> i64 {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc().timestamp_millis())
            .unwrap_or(0);
    }
    debug!(value = s, "unparseable date key; sorting as epoch 0");
    0
}

pub fn by_date(a: &str, b: &str) -> Ordering {
    parse_instant_ms(a).cmp(&parse_instant_ms(b))
}

/// Count keys: an absent counter compares as zero.
pub fn by_count(a: Option<u32>, b: Option<u32>) -> Ordering {
    a.unwrap_or(0).cmp(&b.unwrap_or(0))
}

/// Apply the sort direction: descending negates the natural order.
pub fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}
