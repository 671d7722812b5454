//! Parameterized WHERE-clause construction.
//!
//! Values never enter the SQL text. Each present filter field appends one
//! predicate carrying a positional placeholder (`?1`, `?2`, …) together with
//! its bind value, so the placeholder index is always the number of values
//! bound so far plus one.

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::{DateRange, SalesFilter};

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Date(NaiveDate),
    Int(i64),
}

/// The predicate every condition set starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCondition {
    /// Literal true; the query sees every sale status.
    AllStatuses,
    /// Only completed sales.
    Completed,
}

impl BaseCondition {
    pub fn as_sql(self) -> &'static str {
        match self {
            BaseCondition::AllStatuses => "1=1",
            BaseCondition::Completed => "s.sale_status_desc = 'COMPLETED'",
        }
    }
}

/// The fact table a query aggregates over. The `sales` row is always
/// reachable under the alias `s`, so filter predicates are identical across
/// fact tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactTable {
    Sales,
    ProductSales,
    ItemProductSales,
}

impl FactTable {
    pub fn from_clause(self) -> &'static str {
        match self {
            FactTable::Sales => "sales s",
            FactTable::ProductSales => "product_sales ps\n            JOIN sales s ON s.id = ps.sale_id",
            FactTable::ItemProductSales => {
                "item_product_sales ips\n            JOIN product_sales ps ON ps.id = ips.product_sale_id\n            JOIN sales s ON s.id = ps.sale_id"
            }
        }
    }
}

/// Ordered predicates plus their bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSet {
    predicates: Vec<String>,
    params: Vec<SqlParam>,
}

impl ConditionSet {
    pub fn new(base: BaseCondition) -> Self {
        Self {
            predicates: vec![base.as_sql().to_string()],
            params: Vec::new(),
        }
    }

    /// Base condition followed by the date bounds, then store, then channel.
    pub fn for_filter(base: BaseCondition, filter: &SalesFilter) -> Self {
        let mut set = Self::new(base);
        set.push_range(&filter.range);
        if let Some(store_id) = filter.store_id {
            set.push("s.store_id = {}", SqlParam::Int(store_id));
        }
        if let Some(channel_id) = filter.channel_id {
            set.push("s.channel_id = {}", SqlParam::Int(channel_id));
        }
        set
    }

    /// Base condition followed by the date bounds only.
    pub fn for_range(base: BaseCondition, range: &DateRange) -> Self {
        let mut set = Self::new(base);
        set.push_range(range);
        set
    }

    fn push_range(&mut self, range: &DateRange) {
        if let Some(start) = range.start_date {
            self.push("s.created_at >= CAST({} AS DATE)", SqlParam::Date(start));
        }
        if let Some(end) = range.end_date {
            // Inclusive end day.
            self.push(
                "s.created_at < CAST({} AS DATE) + INTERVAL 1 DAY",
                SqlParam::Date(end),
            );
        }
    }

    fn bind(&mut self, value: SqlParam) -> String {
        self.params.push(value);
        format!("?{}", self.params.len())
    }

    /// Append one predicate; `{}` in `template` is replaced by the placeholder
    /// assigned to `value`.
    pub fn push(&mut self, template: &str, value: SqlParam) {
        let placeholder = self.bind(value);
        self.predicates.push(template.replacen("{}", &placeholder, 1));
    }

    /// Append `column IN (…)` with one placeholder per id. An empty list adds
    /// a predicate that matches nothing.
    pub fn push_in(&mut self, column: &str, ids: &[i64]) {
        if ids.is_empty() {
            self.predicates.push("1=0".to_string());
            return;
        }
        let placeholders: Vec<String> = ids
            .iter()
            .map(|id| self.bind(SqlParam::Int(*id)))
            .collect();
        self.predicates
            .push(format!("{column} IN ({})", placeholders.join(", ")));
    }

    /// Bind a trailing value with no predicate (e.g. `LIMIT`) and return its
    /// placeholder.
    pub fn bind_trailing(&mut self, value: SqlParam) -> String {
        self.bind(value)
    }

    pub fn where_sql(&self) -> String {
        self.predicates.join(" AND ")
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn into_params(self) -> Vec<SqlParam> {
        self.params
    }
}

/// A finished statement: SQL text plus positional bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl MetricQuery {
    /// Highest placeholder index referenced in the SQL text.
    pub fn max_placeholder(&self) -> usize {
        let bytes = self.sql.as_bytes();
        let mut max = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'?' {
                let digits: String = self.sql[i + 1..]
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                if let Ok(n) = digits.parse::<usize>() {
                    max = max.max(n);
                }
                i += 1 + digits.len();
            } else {
                i += 1;
            }
        }
        max
    }
}
