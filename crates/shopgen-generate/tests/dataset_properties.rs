use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDateTime};

use shopgen_core::{Dataset, EventType, OrderStatus};
use shopgen_generate::model::DUPLICATE_ORDER_ROWS;
use shopgen_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn default_dataset() -> Dataset {
    GenerationEngine::new(GenerateOptions::default())
        .run()
        .expect("run generation")
        .dataset
}

#[test]
fn default_run_hits_configured_row_counts() {
    let result = GenerationEngine::new(GenerateOptions::default())
        .run()
        .expect("run generation");
    let dataset = &result.dataset;

    assert_eq!(dataset.customers.len(), 2000);
    assert_eq!(dataset.products.len(), 200);
    assert_eq!(dataset.orders.len(), 10000 + DUPLICATE_ORDER_ROWS);
    assert!(dataset.events.len() <= 50000);
    assert!(dataset.events.len() >= 50000 - 3);

    assert_eq!(result.report.rows_generated("orders"), Some(10005));
    assert_eq!(result.report.defects.duplicate_orders, 5);
    assert!(result.report.sessions > 0);
}

#[test]
fn products_top_up_when_taxonomy_split_is_uneven() {
    let options = GenerateOptions {
        products: 47,
        ..GenerateOptions::default()
    };
    let dataset = GenerationEngine::new(options).run().expect("run").dataset;
    assert_eq!(dataset.products.len(), 47);

    let ids: Vec<i32> = dataset.products.iter().map(|p| p.product_id).collect();
    assert_eq!(ids, (1..=47).collect::<Vec<_>>());
    // The 7 top-up rows are never planted as mispriced.
    assert!(dataset.products[40..].iter().all(|p| !p.is_mispriced()));
}

#[test]
fn null_city_share_stays_near_three_percent() {
    let options = GenerateOptions {
        customers: 20000,
        ..GenerateOptions::default()
    };
    let dataset = GenerationEngine::new(options).run().expect("run").dataset;
    let nulls = dataset.customers.iter().filter(|c| c.city.is_none()).count();
    let share = nulls as f64 / dataset.customers.len() as f64;
    assert!((0.02..=0.04).contains(&share), "null city share {share}");
}

#[test]
fn mispriced_share_stays_near_three_percent() {
    let options = GenerateOptions {
        products: 20000,
        ..GenerateOptions::default()
    };
    let dataset = GenerationEngine::new(options).run().expect("run").dataset;
    let mispriced = dataset.products.iter().filter(|p| p.is_mispriced()).count();
    let share = mispriced as f64 / dataset.products.len() as f64;
    assert!((0.02..=0.04).contains(&share), "mispriced share {share}");
}

#[test]
fn non_completed_orders_keep_positive_totals() {
    let dataset = default_dataset();
    for order in &dataset.orders {
        assert!(order.total_amount > 0.0, "order {} has no total", order.order_id);
        assert!((1..=5).contains(&order.quantity));
    }
    let completed = dataset
        .orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .count();
    let share = completed as f64 / dataset.orders.len() as f64;
    assert!((0.83..=0.87).contains(&share), "completed share {share}");
}

#[test]
fn exactly_five_planted_duplicates() {
    let dataset = default_dataset();
    let distinct: HashSet<i32> = dataset.orders.iter().map(|o| o.order_id).collect();
    assert_eq!(dataset.orders.len() - distinct.len(), DUPLICATE_ORDER_ROWS);

    let tail = &dataset.orders[dataset.orders.len() - DUPLICATE_ORDER_ROWS..];
    let start = (tail[0].order_id - 1) as usize;
    assert!((8050..=8150).contains(&start));
    assert_eq!(tail, &dataset.orders[start..start + DUPLICATE_ORDER_ROWS]);
}

#[test]
fn q4_outsells_q1() {
    let dataset = default_dataset();
    let mut q1 = 0;
    let mut q4 = 0;
    for order in &dataset.orders {
        match order.order_date.month() {
            1..=3 => q1 += 1,
            10..=12 => q4 += 1,
            _ => {}
        }
    }
    assert!(q4 > q1, "q4={q4} q1={q1}");
}

#[test]
fn funnel_stages_follow_their_predecessor() {
    let dataset = default_dataset();
    let mut sessions: HashMap<&str, HashMap<EventType, NaiveDateTime>> = HashMap::new();
    for event in &dataset.events {
        sessions
            .entry(event.session_id.as_str())
            .or_default()
            .insert(event.event_type, event.event_date);
    }

    for (session, stages) in &sessions {
        assert!(stages.contains_key(&EventType::PageView), "{session} lacks page_view");
        for (event_type, at) in stages {
            if let Some(previous) = event_type.predecessor() {
                let previous_at = stages
                    .get(&previous)
                    .unwrap_or_else(|| panic!("{session}: {event_type} without {previous}"));
                assert!(previous_at <= at, "{session}: {event_type} before {previous}");
                if previous != EventType::PageView {
                    assert!(previous_at < at);
                }
            }
        }
    }
}

#[test]
fn event_ids_are_sequential() {
    let dataset = default_dataset();
    for (index, event) in dataset.events.iter().enumerate() {
        assert_eq!(event.event_id as usize, index + 1);
    }
}

#[test]
fn zero_customers_is_a_configuration_error() {
    let options = GenerateOptions {
        customers: 0,
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(options).run();
    assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
}
