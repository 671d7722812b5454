use serde::Deserialize;

use salesboard_core::filter::{parse_id_list, parse_limit, DateRange, SalesFilter};

/// Query-string parameters shared by every analytics endpoint.
///
/// Everything is taken as raw text and normalised by the core filter parsers,
/// so a malformed value never turns into a 400 from the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub store_id: Option<String>,
    pub channel_id: Option<String>,
    pub limit: Option<String>,
    pub store_ids: Option<String>,
}

impl FilterQuery {
    pub fn filter(&self) -> SalesFilter {
        SalesFilter::from_raw(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.store_id.as_deref(),
            self.channel_id.as_deref(),
        )
    }

    pub fn range(&self) -> DateRange {
        DateRange::from_raw(self.start_date.as_deref(), self.end_date.as_deref())
    }

    pub fn limit(&self) -> i64 {
        parse_limit(self.limit.as_deref())
    }

    pub fn store_ids(&self) -> Vec<i64> {
        parse_id_list(self.store_ids.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn malformed_values_are_dropped() {
        let query = FilterQuery {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("not-a-date".to_string()),
            store_id: Some("abc".to_string()),
            channel_id: Some("3".to_string()),
            limit: Some("-5".to_string()),
            store_ids: Some("1,x,2,1".to_string()),
        };
        let filter = query.filter();
        assert_eq!(filter.range.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.range.end_date, None);
        assert_eq!(filter.store_id, None);
        assert_eq!(filter.channel_id, Some(3));
        assert_eq!(query.limit(), 10);
        assert_eq!(query.store_ids(), vec![1, 2]);
    }

    #[test]
    fn range_ignores_store_scope() {
        let query = FilterQuery {
            start_date: Some("2024-02-01".to_string()),
            store_id: Some("7".to_string()),
            ..FilterQuery::default()
        };
        assert_eq!(
            query.range(),
            DateRange::new(NaiveDate::from_ymd_opt(2024, 2, 1), None)
        );
    }
}
