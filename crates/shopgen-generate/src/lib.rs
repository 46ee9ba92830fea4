//! Seeded generation of the shopgen demo dataset.
//!
//! Every table draws from its own `ChaCha8Rng` stream derived from the run
//! seed, so a fixed seed always yields the same rows.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod sampling;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{DefectReport, GenerateOptions, GenerationReport, TableReport};
