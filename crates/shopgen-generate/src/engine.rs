use std::collections::HashSet;
use std::time::Instant;

use tracing::info;

use shopgen_core::catalog::validate_catalog;
use shopgen_core::{CUSTOMERS, Dataset, EVENTS, ORDERS, PRODUCTS};

use crate::errors::GenerationError;
use crate::generators::{generate_customers, generate_events, generate_orders, generate_products};
use crate::model::{DefectReport, GenerateOptions, GenerationReport};
use crate::sampling::table_rng;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the demo dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let options = &self.options;
        options.validate()?;
        validate_catalog()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), options.seed);

        info!(
            run_id = %run_id,
            seed = options.seed,
            date_start = %options.date_start,
            date_end = %options.date_end,
            "generation started"
        );

        let customers = generate_customers(options, &mut table_rng(options.seed, CUSTOMERS.name))?;
        report.record_table(CUSTOMERS.name, options.customers, customers.len());
        info!(table = CUSTOMERS.name, rows = customers.len(), "table generated");

        let products = generate_products(options, &mut table_rng(options.seed, PRODUCTS.name))?;
        report.record_table(PRODUCTS.name, options.products, products.len());
        info!(table = PRODUCTS.name, rows = products.len(), "table generated");

        let orders = generate_orders(
            options,
            &customers,
            &products,
            &mut table_rng(options.seed, ORDERS.name),
        )?;
        report.record_table(ORDERS.name, options.orders, orders.len());
        info!(table = ORDERS.name, rows = orders.len(), "table generated");

        let batch = generate_events(options, &customers, &mut table_rng(options.seed, EVENTS.name))?;
        report.record_table(EVENTS.name, options.events, batch.events.len());
        report.sessions = u64::from(batch.sessions);
        info!(
            table = EVENTS.name,
            rows = batch.events.len(),
            sessions = batch.sessions,
            "table generated"
        );

        let dataset = Dataset {
            customers,
            products,
            orders,
            events: batch.events,
        };
        report.defects = count_defects(&dataset);
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            null_cities = report.defects.null_cities,
            mispriced_products = report.defects.mispriced_products,
            duplicate_orders = report.defects.duplicate_orders,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { dataset, report })
    }
}

fn count_defects(dataset: &Dataset) -> DefectReport {
    let distinct_orders: HashSet<i32> = dataset.orders.iter().map(|order| order.order_id).collect();
    DefectReport {
        null_cities: dataset
            .customers
            .iter()
            .filter(|customer| customer.city.is_none())
            .count() as u64,
        mispriced_products: dataset
            .products
            .iter()
            .filter(|product| product.is_mispriced())
            .count() as u64,
        duplicate_orders: (dataset.orders.len() - distinct_orders.len()) as u64,
    }
}
