use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Number of consecutive order rows appended a second time, ids included.
pub const DUPLICATE_ORDER_ROWS: usize = 5;

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Seed for every random stream of the run.
    pub seed: u64,
    pub customers: usize,
    /// Target product count. The even taxonomy split is topped up to it.
    pub products: usize,
    /// Orders before the planted duplicates are appended.
    pub orders: usize,
    /// Upper bound on generated events; the last session may be cut short.
    pub events: usize,
    /// First date (inclusive) for signups, orders and sessions.
    pub date_start: NaiveDate,
    /// Last date (inclusive) for signups, orders and sessions.
    pub date_end: NaiveDate,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            customers: 2000,
            products: 200,
            orders: 10000,
            events: 50000,
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            date_end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        let counts = [
            ("customers", self.customers),
            ("products", self.products),
            ("events", self.events),
        ];
        for (label, count) in counts {
            if count == 0 {
                return Err(GenerationError::InvalidConfig(format!(
                    "{label} count must be > 0"
                )));
            }
            if count > i32::MAX as usize {
                return Err(GenerationError::InvalidConfig(format!(
                    "{label} count exceeds the INTEGER key range"
                )));
            }
        }
        if self.orders < DUPLICATE_ORDER_ROWS {
            return Err(GenerationError::InvalidConfig(format!(
                "orders count must be >= {DUPLICATE_ORDER_ROWS} to plant duplicates"
            )));
        }
        if self.orders > i32::MAX as usize {
            return Err(GenerationError::InvalidConfig(
                "orders count exceeds the INTEGER key range".to_string(),
            ));
        }
        if self.date_start > self.date_end {
            return Err(GenerationError::InvalidConfig(
                "date_start must be <= date_end".to_string(),
            ));
        }
        Ok(())
    }

    /// Candidate start indices for the duplicated run of orders: the
    /// 80.5%..81.5% band of the order count, clamped so the run fits.
    pub fn duplicate_window(&self) -> RangeInclusive<usize> {
        let last_start = self.orders.saturating_sub(DUPLICATE_ORDER_ROWS);
        let hi = (self.orders * 815 / 1000).min(last_start);
        let lo = (self.orders * 805 / 1000).min(hi);
        lo..=hi
    }
}

/// Summary of a generated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
}

/// Counts of the defects planted in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectReport {
    pub null_cities: u64,
    pub mispriced_products: u64,
    pub duplicate_orders: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub sessions: u64,
    pub defects: DefectReport,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            tables: Vec::new(),
            sessions: 0,
            defects: DefectReport::default(),
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows_requested: usize, rows_generated: usize) {
        self.tables.push(TableReport {
            table: table.to_string(),
            rows_requested: rows_requested as u64,
            rows_generated: rows_generated as u64,
        });
    }

    pub fn rows_generated(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|report| report.table == table)
            .map(|report| report.rows_generated)
    }
}
