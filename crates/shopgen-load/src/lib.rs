//! DuckDB loader for the shopgen demo dataset.
//!
//! Tables are dropped and recreated on every load, so re-running against the
//! same file replaces its contents.

pub mod errors;
pub mod warehouse;

pub use errors::LoadError;
pub use warehouse::{LoadReport, TableLoad, Warehouse};
