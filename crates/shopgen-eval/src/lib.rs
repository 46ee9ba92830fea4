//! Read-only summary of a loaded demo database.

pub mod errors;
pub mod metrics;
pub mod report;

pub use errors::EvalError;
pub use metrics::{
    collect_summary, write_summary_json, FunnelCount, FunnelViolations, QuarterRevenue,
    SummaryMetrics, TableCount,
};
pub use report::render_summary;
