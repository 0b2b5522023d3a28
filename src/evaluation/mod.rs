//! Route scoring and diagnostics.
//!
//! - [`total_distance`] / [`priority_score`] — the objective every search
//!   strategy ranks candidates by
//! - [`analyze`] / [`summarize`] — read-only metrics over a finished route

mod analyzer;
mod scorer;

pub use analyzer::{analyze, summarize};
pub use scorer::{priority_score, total_distance, RouteScorer, DEFAULT_LATENESS_PENALTY};
