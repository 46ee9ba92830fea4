use crate::metrics::SummaryMetrics;

const RULE_WIDTH: usize = 60;

/// Render the fixed-format console summary.
pub fn render_summary(metrics: &SummaryMetrics, database: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("  DEMO DATABASE READY".to_string());
    lines.push(rule);

    for count in &metrics.tables {
        lines.push(format!(
            "  {:<12}  {:>8} rows",
            count.table,
            group_thousands(count.rows)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Order date range: {} to {}",
        metrics.order_date_min.as_deref().unwrap_or("-"),
        metrics.order_date_max.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "  Total completed revenue: ${}",
        format_money(metrics.completed_revenue)
    ));
    lines.push(format!(
        "  Cancellation/return rate: {:.1}%",
        metrics.non_completed_rate_pct
    ));
    lines.push(format!("  Customers with null city: {}", metrics.null_cities));
    lines.push(format!(
        "  Products with list < cost: {}",
        metrics.mispriced_products
    ));
    lines.push(format!("  Duplicate order rows: {}", metrics.duplicate_orders));

    lines.push(String::new());
    lines.push("  Funnel breakdown:".to_string());
    for stage in &metrics.funnel {
        lines.push(format!(
            "    {:<20}  {:>8}",
            stage.event_type,
            group_thousands(stage.count)
        ));
    }
    let violations = metrics.funnel_violations.total();
    if violations > 0 {
        lines.push(format!("    out-of-order sessions: {violations}"));
    }

    if !metrics.quarterly_revenue.is_empty() {
        lines.push(String::new());
        lines.push("  Completed revenue by quarter:".to_string());
        for quarter in &metrics.quarterly_revenue {
            lines.push(format!(
                "    {}-Q{}  {:>16}",
                quarter.year,
                quarter.quarter,
                format!("${}", format_money(quarter.revenue))
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("  Database file: {database}"));
    lines.push(String::new());
    lines.join("\n")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = group_thousands(cents / 100);
    let frac = (cents % 100).unsigned_abs();
    if cents < 0 && cents / 100 == 0 {
        format!("-{whole}.{frac:02}")
    } else {
        format!("{whole}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FunnelCount, FunnelViolations, TableCount};

    #[test]
    fn groups_digits_by_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(10005), "10,005");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4200), "-4,200");
    }

    #[test]
    fn money_keeps_two_decimals() {
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.5), "0.50");
        assert_eq!(format_money(-0.25), "-0.25");
    }

    #[test]
    fn summary_lists_tables_and_funnel() {
        let metrics = SummaryMetrics {
            tables: vec![TableCount {
                table: "orders".to_string(),
                rows: 10005,
            }],
            order_date_min: Some("2024-01-01".to_string()),
            order_date_max: Some("2025-12-31".to_string()),
            completed_revenue: 1500.0,
            completed_orders: 8,
            non_completed_rate_pct: 14.9,
            null_cities: 61,
            mispriced_products: 5,
            duplicate_orders: 5,
            funnel: vec![FunnelCount {
                event_type: "page_view".to_string(),
                count: 41000,
            }],
            quarterly_revenue: Vec::new(),
            funnel_violations: FunnelViolations::default(),
        };

        let text = render_summary(&metrics, "data/analytics_demo.duckdb");
        assert!(text.contains("  orders          10,005 rows"));
        assert!(text.contains("Order date range: 2024-01-01 to 2025-12-31"));
        assert!(text.contains("Total completed revenue: $1,500.00"));
        assert!(text.contains("Cancellation/return rate: 14.9%"));
        assert!(text.contains("    page_view               41,000"));
        assert!(!text.contains("out-of-order"));
        assert!(text.contains("Database file: data/analytics_demo.duckdb"));
    }
}
