use std::path::Path;

use duckdb::types::FromSql;
use duckdb::Connection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shopgen_core::TABLES;

use crate::errors::EvalError;

const ORDER_DATE_RANGE_SQL: &str =
    "SELECT CAST(MIN(order_date) AS VARCHAR), CAST(MAX(order_date) AS VARCHAR) FROM orders";

const COMPLETED_REVENUE_SQL: &str = "SELECT CAST(COALESCE(ROUND(SUM(total_amount), 2), 0) AS DOUBLE) \
     FROM orders WHERE status = 'completed'";

const COMPLETED_ORDERS_SQL: &str = "SELECT COUNT(*) FROM orders WHERE status = 'completed'";

const NON_COMPLETED_RATE_SQL: &str = "SELECT CAST(COALESCE(ROUND(100.0 * SUM(CASE WHEN status != 'completed' THEN 1 ELSE 0 END) \
     / NULLIF(COUNT(*), 0), 1), 0) AS DOUBLE) FROM orders";

const NULL_CITIES_SQL: &str = "SELECT COUNT(*) FROM customers WHERE city IS NULL";

const MISPRICED_PRODUCTS_SQL: &str = "SELECT COUNT(*) FROM products WHERE list_price < cost_price";

const DUPLICATE_ORDERS_SQL: &str = "SELECT COUNT(*) - COUNT(DISTINCT order_id) FROM orders";

const FUNNEL_SQL: &str = "SELECT event_type, COUNT(*) AS cnt FROM events \
     GROUP BY event_type ORDER BY cnt DESC, event_type";

const QUARTERLY_REVENUE_SQL: &str = "SELECT CAST(year(order_date) AS INTEGER) AS y, \
            CAST(quarter(order_date) AS INTEGER) AS q, \
            CAST(ROUND(SUM(total_amount), 2) AS DOUBLE) \
     FROM orders WHERE status = 'completed' \
     GROUP BY y, q ORDER BY y, q";

// Each session holds at most one event per stage, so MIN picks that event.
const FUNNEL_VIOLATIONS_SQL: &str = "WITH stages AS ( \
        SELECT session_id, \
               MIN(CASE WHEN event_type = 'add_to_cart' THEN event_date END) AS cart_at, \
               MIN(CASE WHEN event_type = 'checkout_start' THEN event_date END) AS checkout_at, \
               MIN(CASE WHEN event_type = 'purchase' THEN event_date END) AS purchase_at \
        FROM events GROUP BY session_id) \
     SELECT \
        COUNT(*) FILTER (WHERE checkout_at IS NOT NULL AND (cart_at IS NULL OR cart_at >= checkout_at)), \
        COUNT(*) FILTER (WHERE purchase_at IS NOT NULL AND (checkout_at IS NULL OR checkout_at >= purchase_at)) \
     FROM stages";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCount {
    pub table: String,
    pub rows: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelCount {
    pub event_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterRevenue {
    pub year: i32,
    pub quarter: i32,
    pub revenue: f64,
}

/// Sessions whose later funnel stage lacks an earlier predecessor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunnelViolations {
    pub checkout_without_cart: i64,
    pub purchase_without_checkout: i64,
}

impl FunnelViolations {
    pub fn total(&self) -> i64 {
        self.checkout_without_cart + self.purchase_without_checkout
    }
}

/// Machine-readable summary of a loaded database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub tables: Vec<TableCount>,
    pub order_date_min: Option<String>,
    pub order_date_max: Option<String>,
    pub completed_revenue: f64,
    pub completed_orders: i64,
    /// Share of order rows that are cancelled or returned, in percent (1 dp).
    pub non_completed_rate_pct: f64,
    pub null_cities: i64,
    pub mispriced_products: i64,
    pub duplicate_orders: i64,
    pub funnel: Vec<FunnelCount>,
    pub quarterly_revenue: Vec<QuarterRevenue>,
    pub funnel_violations: FunnelViolations,
}

impl SummaryMetrics {
    pub fn rows(&self, table: &str) -> Option<i64> {
        self.tables
            .iter()
            .find(|count| count.table == table)
            .map(|count| count.rows)
    }

    pub fn funnel_count(&self, event_type: &str) -> i64 {
        self.funnel
            .iter()
            .find(|stage| stage.event_type == event_type)
            .map(|stage| stage.count)
            .unwrap_or(0)
    }
}

/// Run every summary query against a loaded database.
pub fn collect_summary(conn: &Connection) -> Result<SummaryMetrics, EvalError> {
    let mut tables = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let rows: i64 = scalar(conn, &format!("SELECT COUNT(*) FROM {}", table.name))?;
        tables.push(TableCount {
            table: table.name.to_string(),
            rows,
        });
    }

    let (order_date_min, order_date_max): (Option<String>, Option<String>) =
        conn.query_row(ORDER_DATE_RANGE_SQL, [], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let quarterly_revenue = conn
        .prepare(QUARTERLY_REVENUE_SQL)?
        .query_map([], |row| {
            Ok(QuarterRevenue {
                year: row.get(0)?,
                quarter: row.get(1)?,
                revenue: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let funnel = conn
        .prepare(FUNNEL_SQL)?
        .query_map([], |row| {
            Ok(FunnelCount {
                event_type: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let funnel_violations = conn.query_row(FUNNEL_VIOLATIONS_SQL, [], |row| {
        Ok(FunnelViolations {
            checkout_without_cart: row.get(0)?,
            purchase_without_checkout: row.get(1)?,
        })
    })?;

    let metrics = SummaryMetrics {
        tables,
        order_date_min,
        order_date_max,
        completed_revenue: scalar(conn, COMPLETED_REVENUE_SQL)?,
        completed_orders: scalar(conn, COMPLETED_ORDERS_SQL)?,
        non_completed_rate_pct: scalar(conn, NON_COMPLETED_RATE_SQL)?,
        null_cities: scalar(conn, NULL_CITIES_SQL)?,
        mispriced_products: scalar(conn, MISPRICED_PRODUCTS_SQL)?,
        duplicate_orders: scalar(conn, DUPLICATE_ORDERS_SQL)?,
        funnel,
        quarterly_revenue,
        funnel_violations,
    };
    debug!(
        duplicate_orders = metrics.duplicate_orders,
        funnel_violations = metrics.funnel_violations.total(),
        "summary collected"
    );
    Ok(metrics)
}

pub fn write_summary_json(path: &Path, metrics: &SummaryMetrics) -> Result<(), EvalError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_vec_pretty(metrics)?)?;
    Ok(())
}

fn scalar<T: FromSql>(conn: &Connection, sql: &str) -> Result<T, EvalError> {
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}
