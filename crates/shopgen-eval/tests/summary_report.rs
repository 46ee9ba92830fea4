use std::fs;
use std::path::PathBuf;

use shopgen_eval::{collect_summary, render_summary, write_summary_json, SummaryMetrics};
use shopgen_generate::{GenerateOptions, GenerationEngine};
use shopgen_load::Warehouse;

#[test]
fn seed_42_defaults_end_to_end() {
    let result = GenerationEngine::new(GenerateOptions::default())
        .run()
        .expect("run generation");
    let path = temp_dir("e2e").join("analytics_demo.duckdb");

    let mut warehouse = Warehouse::open(&path).expect("open warehouse");
    warehouse
        .load_dataset(&result.dataset)
        .expect("load dataset");
    let metrics = collect_summary(warehouse.connection()).expect("collect summary");
    warehouse.close().expect("close warehouse");

    assert_eq!(metrics.rows("customers"), Some(2000));
    assert_eq!(metrics.rows("products"), Some(200));
    assert_eq!(metrics.rows("orders"), Some(10005));
    assert_eq!(metrics.rows("events"), Some(result.dataset.events.len() as i64));

    let completed_share = metrics.completed_orders as f64 / 10005.0;
    assert!(
        (0.83..=0.87).contains(&completed_share),
        "completed share {completed_share}"
    );
    assert!((13.0..=17.0).contains(&metrics.non_completed_rate_pct));

    assert_eq!(metrics.duplicate_orders, 5);
    assert_eq!(
        metrics.null_cities as u64,
        result.report.defects.null_cities
    );
    assert_eq!(
        metrics.mispriced_products as u64,
        result.report.defects.mispriced_products
    );
    assert_eq!(metrics.funnel_violations.total(), 0);
    assert_eq!(
        metrics.funnel_count("page_view") as u64,
        result.report.sessions
    );
    assert_eq!(metrics.funnel[0].event_type, "page_view");

    assert_eq!(metrics.order_date_min.as_deref(), Some("2024-01-01"));
    assert_eq!(metrics.order_date_max.as_deref(), Some("2025-12-31"));

    let revenue = |year: i32, quarter: i32| {
        metrics
            .quarterly_revenue
            .iter()
            .find(|q| q.year == year && q.quarter == quarter)
            .map(|q| q.revenue)
            .unwrap_or(0.0)
    };
    assert!(revenue(2024, 4) > revenue(2024, 1));
    assert!(revenue(2025, 4) > revenue(2025, 1));

    let text = render_summary(&metrics, &path.display().to_string());
    assert!(text.contains("DEMO DATABASE READY"));
    assert!(text.contains("Duplicate order rows: 5"));
}

#[test]
fn summary_json_round_trips() {
    let options = GenerateOptions {
        customers: 100,
        products: 20,
        orders: 300,
        events: 600,
        ..GenerateOptions::default()
    };
    let dataset = GenerationEngine::new(options).run().expect("run").dataset;
    let mut warehouse = Warehouse::open_in_memory().expect("open warehouse");
    warehouse.load_dataset(&dataset).expect("load dataset");
    let metrics = collect_summary(warehouse.connection()).expect("collect summary");

    let json_path = temp_dir("json").join("reports").join("summary.json");
    write_summary_json(&json_path, &metrics).expect("write summary json");
    let parsed: SummaryMetrics =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read summary json"))
            .expect("parse summary json");
    assert_eq!(parsed, metrics);
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_eval_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
