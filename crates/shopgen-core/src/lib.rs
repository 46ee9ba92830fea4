//! Core contracts for shopgen.
//!
//! This crate defines the record types, the static lookup tables used by the
//! generator, and the table definitions shared by the loader and reporter.

pub mod catalog;
pub mod error;
pub mod records;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use records::{
    Customer, Dataset, DeviceType, Event, EventType, Order, OrderStatus, PaymentMethod, Product,
    Segment,
};
pub use schema::{ColumnDef, ColumnType, TableDef, CUSTOMERS, EVENTS, ORDERS, PRODUCTS, TABLES};
pub use value::{Record, Value};
