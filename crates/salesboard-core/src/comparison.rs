//! Period-over-period comparison of overview metrics.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analytics::{OverviewMetrics, SalesAnalytics};
use crate::error::ComparisonError;
use crate::filter::{DateRange, SalesFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBounds {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PeriodBounds {
    pub fn to_range(self) -> DateRange {
        DateRange::between(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonPeriod {
    pub current: PeriodBounds,
    pub previous: PeriodBounds,
}

/// Percentage change per headline metric, current vs previous window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewDeltas {
    pub total_revenue_change: f64,
    pub total_sales_change: f64,
    pub avg_ticket_change: f64,
    pub avg_production_time_change: f64,
}

impl OverviewDeltas {
    pub fn between(current: &OverviewMetrics, previous: &OverviewMetrics) -> Self {
        Self {
            total_revenue_change: percentage_change(current.total_revenue, previous.total_revenue),
            total_sales_change: percentage_change(
                current.total_sales as f64,
                previous.total_sales as f64,
            ),
            avg_ticket_change: percentage_change(current.avg_ticket, previous.avg_ticket),
            avg_production_time_change: percentage_change(
                current.avg_production_time,
                previous.avg_production_time,
            ),
        }
    }
}

/// `previous`, `comparison` and `period` are all `None` when the filter lacks
/// either date bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewComparison {
    pub current: OverviewMetrics,
    pub previous: Option<OverviewMetrics>,
    pub comparison: Option<OverviewDeltas>,
    pub period: Option<ComparisonPeriod>,
}

/// Relative change in percent. Zero previous maps to 0 when current is also
/// zero and to +100 otherwise.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// The equal-length window ending the day before `start`.
pub fn previous_period(start: NaiveDate, end: NaiveDate) -> Result<ComparisonPeriod, ComparisonError> {
    if end < start {
        return Err(ComparisonError::InvertedRange { start, end });
    }
    let length = Duration::days((end - start).num_days() + 1);
    let (Some(previous_start), Some(previous_end)) = (
        start.checked_sub_signed(length),
        end.checked_sub_signed(length),
    ) else {
        return Err(ComparisonError::OutOfRange { start, end });
    };
    Ok(ComparisonPeriod {
        current: PeriodBounds {
            start_date: start,
            end_date: end,
        },
        previous: PeriodBounds {
            start_date: previous_start,
            end_date: previous_end,
        },
    })
}

/// Overview for `filter`, plus the preceding window and deltas when both
/// date bounds are present. Store and channel scope carry over unchanged;
/// the two overviews run concurrently.
pub async fn overview_with_comparison(
    backend: &dyn SalesAnalytics,
    filter: &SalesFilter,
) -> Result<OverviewComparison, ComparisonError> {
    let Some((start, end)) = filter.range.bounds() else {
        let current = backend.get_overview(filter).await?;
        return Ok(OverviewComparison {
            current,
            previous: None,
            comparison: None,
            period: None,
        });
    };

    let period = previous_period(start, end)?;
    let previous_filter = filter.with_range(period.previous.to_range());
    let (current, previous) = tokio::try_join!(
        backend.get_overview(filter),
        backend.get_overview(&previous_filter),
    )?;

    Ok(OverviewComparison {
        comparison: Some(OverviewDeltas::between(&current, &previous)),
        current,
        previous: Some(previous),
        period: Some(period),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use super::*;
    use crate::analytics::{
        ChannelBreakdown, ChannelOption, CustomizationRanking, HourlySales, ProductRanking,
        SalesDateBounds, StoreComparison, StoreOption, StoreRanking, TimeSeriesPoint,
        WeekdaySales,
    };
    use crate::filter::parse_date;

    /// Answers `get_overview` only once two calls are in flight together.
    struct RendezvousBackend {
        barrier: Arc<Barrier>,
    }

    #[async_trait]
    impl SalesAnalytics for RendezvousBackend {
        async fn get_overview(&self, filter: &SalesFilter) -> anyhow::Result<OverviewMetrics> {
            self.barrier.wait().await;
            let total_sales = match filter.range.start_date {
                Some(start) if start.format("%Y").to_string() == "2024" => 20,
                _ => 10,
            };
            Ok(OverviewMetrics {
                total_sales,
                ..OverviewMetrics::default()
            })
        }

        async fn get_top_products(
            &self,
            _filter: &SalesFilter,
            _limit: i64,
        ) -> anyhow::Result<Vec<ProductRanking>> {
            anyhow::bail!("not used")
        }

        async fn get_sales_by_channel(
            &self,
            _range: &DateRange,
        ) -> anyhow::Result<Vec<ChannelBreakdown>> {
            anyhow::bail!("not used")
        }

        async fn get_time_series(
            &self,
            _filter: &SalesFilter,
        ) -> anyhow::Result<Vec<TimeSeriesPoint>> {
            anyhow::bail!("not used")
        }

        async fn get_sales_by_hour(&self, _filter: &SalesFilter) -> anyhow::Result<Vec<HourlySales>> {
            anyhow::bail!("not used")
        }

        async fn get_sales_by_weekday(
            &self,
            _filter: &SalesFilter,
        ) -> anyhow::Result<Vec<WeekdaySales>> {
            anyhow::bail!("not used")
        }

        async fn get_top_stores(
            &self,
            _range: &DateRange,
            _limit: i64,
        ) -> anyhow::Result<Vec<StoreRanking>> {
            anyhow::bail!("not used")
        }

        async fn compare_stores(
            &self,
            _range: &DateRange,
            _store_ids: &[i64],
        ) -> anyhow::Result<Vec<StoreComparison>> {
            anyhow::bail!("not used")
        }

        async fn get_top_customizations(
            &self,
            _filter: &SalesFilter,
            _limit: i64,
        ) -> anyhow::Result<Vec<CustomizationRanking>> {
            anyhow::bail!("not used")
        }

        async fn list_stores(&self) -> anyhow::Result<Vec<StoreOption>> {
            anyhow::bail!("not used")
        }

        async fn list_channels(&self) -> anyhow::Result<Vec<ChannelOption>> {
            anyhow::bail!("not used")
        }

        async fn get_date_bounds(&self) -> anyhow::Result<SalesDateBounds> {
            anyhow::bail!("not used")
        }

        async fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn current_and_previous_overviews_run_together() {
        let backend = RendezvousBackend {
            barrier: Arc::new(Barrier::new(2)),
        };
        let filter = SalesFilter {
            range: DateRange::between(date(2024, 1, 1), date(2024, 1, 10)),
            ..SalesFilter::default()
        };
        let report = tokio::time::timeout(
            StdDuration::from_secs(5),
            overview_with_comparison(&backend, &filter),
        )
        .await
        .expect("both overviews in flight at once")
        .expect("report");
        assert_eq!(report.current.total_sales, 20);
        assert_eq!(report.previous.map(|p| p.total_sales), Some(10));
        assert_eq!(report.comparison.map(|c| c.total_sales_change), Some(100.0));
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn ten_day_window_shifts_back_ten_days() {
        let period = previous_period(date(2024, 1, 1), date(2024, 1, 10)).expect("period");
        assert_eq!(period.previous.start_date, date(2023, 12, 22));
        assert_eq!(period.previous.end_date, date(2023, 12, 31));
    }

    #[test]
    fn single_day_compares_to_day_before() {
        let period = previous_period(date(2024, 3, 1), date(2024, 3, 1)).expect("period");
        assert_eq!(period.previous.start_date, date(2024, 2, 29));
        assert_eq!(period.previous.end_date, date(2024, 2, 29));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = previous_period(date(2024, 1, 10), date(2024, 1, 1)).expect_err("inverted");
        assert!(matches!(err, ComparisonError::InvertedRange { .. }));
    }

    #[test]
    fn window_before_calendar_start_is_rejected() {
        let start = parse_date("-262143-01-01").expect("start");
        let end = parse_date("-200000-01-01").expect("end");
        let err = previous_period(start, end).expect_err("out of range");
        assert!(matches!(err, ComparisonError::OutOfRange { .. }));
    }

    #[test]
    fn percentage_change_rules() {
        assert_eq!(percentage_change(150.0, 100.0), 50.0);
        assert_eq!(percentage_change(50.0, 100.0), -50.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
        assert_eq!(percentage_change(5.0, 0.0), 100.0);
        assert_eq!(percentage_change(0.0, 40.0), -100.0);
        assert_eq!(percentage_change(-5.0, 0.0), 100.0);
    }

    #[test]
    fn deltas_cover_headline_metrics() {
        let current = OverviewMetrics {
            total_sales: 30,
            completed_sales: 25,
            cancelled_sales: 5,
            total_revenue: 1500.0,
            avg_ticket: 60.0,
            avg_production_time: 600.0,
            avg_delivery_time: 1200.0,
        };
        let previous = OverviewMetrics {
            total_sales: 20,
            total_revenue: 1000.0,
            avg_ticket: 50.0,
            ..OverviewMetrics::default()
        };
        let deltas = OverviewDeltas::between(&current, &previous);
        assert_eq!(deltas.total_revenue_change, 50.0);
        assert_eq!(deltas.total_sales_change, 50.0);
        assert_eq!(deltas.avg_ticket_change, 20.0);
        assert_eq!(deltas.avg_production_time_change, 100.0);
    }

    #[test]
    fn report_serializes_nulls_without_range() {
        let report = OverviewComparison {
            current: OverviewMetrics::default(),
            previous: None,
            comparison: None,
            period: None,
        };
        let json = serde_json::to_value(&report).expect("json");
        assert!(json["previous"].is_null());
        assert!(json["comparison"].is_null());
        assert!(json["period"].is_null());
        assert_eq!(json["current"]["total_sales"], 0);
    }

    #[test]
    fn period_serializes_camel_case_dates() {
        let period = previous_period(date(2024, 1, 1), date(2024, 1, 10)).expect("period");
        let json = serde_json::to_value(period).expect("json");
        assert_eq!(json["previous"]["startDate"], "2023-12-22");
        assert_eq!(json["current"]["endDate"], "2024-01-10");
    }
}
