//! The optimization entry point.
//!
//! - [`optimize`] — Route for items plus distances, default configuration
//! - [`Optimizer`] — Configurable pipeline with diagnostics ([`OptimizationReport`])
//! - [`OptimizerConfig`] — Thresholds and weights

mod config;
mod pipeline;

pub use config::OptimizerConfig;
pub use pipeline::{optimize, OptimizationReport, Optimizer, SeedCandidate, SeedKind, Strategy};
