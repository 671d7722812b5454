//! Aggregate query specifications.
//!
//! Each function is a pure mapping from a filter (and optional limit) to a
//! [`MetricQuery`]; executing it is the backend's job. Column order in each
//! SELECT is part of the contract with the row mappers in the engine crate.

use crate::filter::{DateRange, SalesFilter};
use crate::query::{BaseCondition, ConditionSet, FactTable, MetricQuery, SqlParam};

/// Status funnel and completed-only financials in a single scan.
pub fn overview(filter: &SalesFilter) -> MetricQuery {
    let conditions = ConditionSet::for_filter(BaseCondition::AllStatuses, filter);
    let sql = format!(
        r#"
        SELECT
            COUNT(*) AS total_sales,
            COUNT(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN 1 END) AS completed_sales,
            COUNT(CASE WHEN s.sale_status_desc = 'CANCELLED' THEN 1 END) AS cancelled_sales,
            CAST(COALESCE(SUM(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.total_amount ELSE 0 END), 0) AS DOUBLE) AS total_revenue,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.total_amount END), 0) AS DOUBLE) AS avg_ticket,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.production_seconds END), 0) AS DOUBLE) AS avg_production_time,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' AND s.delivery_seconds IS NOT NULL THEN s.delivery_seconds END), 0) AS DOUBLE) AS avg_delivery_time
        FROM {from}
        WHERE {conditions}
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

pub fn top_products(filter: &SalesFilter, limit: i64) -> MetricQuery {
    let mut conditions = ConditionSet::for_filter(BaseCondition::Completed, filter);
    let limit_ph = conditions.bind_trailing(SqlParam::Int(limit));
    let sql = format!(
        r#"
        SELECT
            p.id,
            p.name,
            c.name AS category,
            CAST(COALESCE(SUM(ps.quantity), 0) AS DOUBLE) AS total_quantity,
            CAST(COALESCE(SUM(ps.total_price), 0) AS DOUBLE) AS total_revenue,
            COUNT(DISTINCT ps.sale_id) AS times_sold
        FROM {from}
            JOIN products p ON p.id = ps.product_id
            LEFT JOIN categories c ON c.id = p.category_id
        WHERE {conditions}
        GROUP BY p.id, p.name, c.name
        ORDER BY total_revenue DESC
        LIMIT {limit_ph}
        "#,
        from = FactTable::ProductSales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

pub fn sales_by_channel(range: &DateRange) -> MetricQuery {
    let conditions = ConditionSet::for_range(BaseCondition::Completed, range);
    let sql = format!(
        r#"
        SELECT
            ch.id,
            ch.name,
            ch."type",
            COUNT(*) AS total_sales,
            CAST(COALESCE(SUM(s.total_amount), 0) AS DOUBLE) AS total_revenue,
            CAST(COALESCE(AVG(s.total_amount), 0) AS DOUBLE) AS avg_ticket
        FROM {from}
            JOIN channels ch ON ch.id = s.channel_id
        WHERE {conditions}
        GROUP BY ch.id, ch.name, ch."type"
        ORDER BY total_revenue DESC
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

/// Completed sales grouped by calendar day, oldest first.
pub fn daily_series(filter: &SalesFilter) -> MetricQuery {
    let conditions = ConditionSet::for_filter(BaseCondition::Completed, filter);
    let sql = format!(
        r#"
        SELECT
            strftime(CAST(s.created_at AS DATE), '%Y-%m-%d') AS "date",
            COUNT(*) AS sales_count,
            CAST(COALESCE(SUM(s.total_amount), 0) AS DOUBLE) AS revenue,
            CAST(COALESCE(AVG(s.total_amount), 0) AS DOUBLE) AS avg_ticket
        FROM {from}
        WHERE {conditions}
        GROUP BY 1
        ORDER BY 1 ASC
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

pub fn sales_by_hour(filter: &SalesFilter) -> MetricQuery {
    let conditions = ConditionSet::for_filter(BaseCondition::Completed, filter);
    let sql = format!(
        r#"
        SELECT
            CAST(EXTRACT(HOUR FROM s.created_at) AS BIGINT) AS "hour",
            COUNT(*) AS sales_count,
            CAST(COALESCE(SUM(s.total_amount), 0) AS DOUBLE) AS revenue
        FROM {from}
        WHERE {conditions}
        GROUP BY 1
        ORDER BY 1 ASC
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

/// Day of week uses the engine's `dayofweek`, where Sunday is 0.
pub fn sales_by_weekday(filter: &SalesFilter) -> MetricQuery {
    let conditions = ConditionSet::for_filter(BaseCondition::Completed, filter);
    let sql = format!(
        r#"
        SELECT
            CAST(dayofweek(s.created_at) AS BIGINT) AS day_of_week,
            COUNT(*) AS sales_count,
            CAST(COALESCE(SUM(s.total_amount), 0) AS DOUBLE) AS revenue,
            CAST(COALESCE(AVG(s.total_amount), 0) AS DOUBLE) AS avg_ticket
        FROM {from}
        WHERE {conditions}
        GROUP BY 1
        ORDER BY 1 ASC
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

pub fn top_stores(range: &DateRange, limit: i64) -> MetricQuery {
    let mut conditions = ConditionSet::for_range(BaseCondition::Completed, range);
    let limit_ph = conditions.bind_trailing(SqlParam::Int(limit));
    let sql = format!(
        r#"
        SELECT
            st.id,
            st.name,
            st.city,
            st.state,
            COUNT(*) AS total_sales,
            CAST(COALESCE(SUM(s.total_amount), 0) AS DOUBLE) AS total_revenue,
            CAST(COALESCE(AVG(s.total_amount), 0) AS DOUBLE) AS avg_ticket
        FROM {from}
            JOIN stores st ON st.id = s.store_id
        WHERE {conditions}
        GROUP BY st.id, st.name, st.city, st.state
        ORDER BY total_revenue DESC
        LIMIT {limit_ph}
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

/// Overview-style metrics for each requested store. Stores with no sales in
/// the window are omitted.
pub fn compare_stores(range: &DateRange, store_ids: &[i64]) -> MetricQuery {
    let mut conditions = ConditionSet::for_range(BaseCondition::AllStatuses, range);
    conditions.push_in("s.store_id", store_ids);
    let sql = format!(
        r#"
        SELECT
            st.id,
            st.name,
            st.city,
            st.state,
            COUNT(*) AS total_sales,
            COUNT(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN 1 END) AS completed_sales,
            CAST(COALESCE(SUM(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.total_amount ELSE 0 END), 0) AS DOUBLE) AS total_revenue,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.total_amount END), 0) AS DOUBLE) AS avg_ticket,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' THEN s.production_seconds END), 0) AS DOUBLE) AS avg_production_time,
            CAST(COALESCE(AVG(CASE WHEN s.sale_status_desc = 'COMPLETED' AND s.delivery_seconds IS NOT NULL THEN s.delivery_seconds END), 0) AS DOUBLE) AS avg_delivery_time
        FROM {from}
            JOIN stores st ON st.id = s.store_id
        WHERE {conditions}
        GROUP BY st.id, st.name, st.city, st.state
        ORDER BY total_revenue DESC
        "#,
        from = FactTable::Sales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}

/// Items added to products, ranked by how often they were added.
pub fn top_customizations(filter: &SalesFilter, limit: i64) -> MetricQuery {
    let mut conditions = ConditionSet::for_filter(BaseCondition::Completed, filter);
    let limit_ph = conditions.bind_trailing(SqlParam::Int(limit));
    let sql = format!(
        r#"
        SELECT
            i.id,
            i.name,
            COUNT(*) AS times_added,
            CAST(COALESCE(SUM(ips.additional_price), 0) AS DOUBLE) AS revenue_generated
        FROM {from}
            JOIN items i ON i.id = ips.item_id
        WHERE {conditions}
        GROUP BY i.id, i.name
        ORDER BY times_added DESC
        LIMIT {limit_ph}
        "#,
        from = FactTable::ItemProductSales.from_clause(),
        conditions = conditions.where_sql(),
    );
    MetricQuery {
        sql,
        params: conditions.into_params(),
    }
}
