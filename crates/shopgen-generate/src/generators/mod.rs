//! Table generators. Each takes the run options and an explicit random
//! stream; none of them touches global state.

mod customers;
mod events;
mod orders;
mod products;

pub use customers::generate_customers;
pub use events::{generate_events, EventBatch, FUNNEL_STEPS, FunnelStep};
pub use orders::{generate_orders, CANCELLED_THRESHOLD, RETURNED_THRESHOLD};
pub use products::{generate_products, MISPRICE_PROBABILITY};

/// Pareto exponent used when choosing the customer behind an order or session.
pub const CUSTOMER_PARETO_ALPHA: f64 = 1.2;
