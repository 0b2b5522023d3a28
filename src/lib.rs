//! # perishable-routing
//!
//! Single-courier delivery route optimization that trades travel distance
//! against delivering perishable items early.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Item, ItemKind, Route, RouteQuality)
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Route distance, priority score, and quality analysis
//! - [`exact`] — Exhaustive search for small instances
//! - [`constructive`] — Seed heuristics (priority nearest neighbor, priority grouping, nearest neighbor)
//! - [`local_search`] — 2-opt refinement
//! - [`optimizer`] — Strategy selection and the `optimize` entry point
//! - [`input`] — Request validation and partial-resolution batches
//!
//! ## Example
//!
//! ```
//! use perishable_routing::distance::DistanceMatrix;
//! use perishable_routing::evaluation::analyze;
//! use perishable_routing::models::Item;
//! use perishable_routing::optimizer::optimize;
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 2.0, 4.0],
//!     vec![2.0, 0.0, 3.0],
//!     vec![4.0, 3.0, 0.0],
//! ])
//! .unwrap();
//! let items = vec![Item::origin(), Item::non_perishable(), Item::perishable()];
//!
//! let route = optimize(&items, &dm);
//! assert_eq!(route.as_slice(), &[0, 2, 1]);
//!
//! let quality = analyze(route.as_slice(), &items, &dm);
//! assert_eq!(quality.perishable_positions, vec![1]);
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod exact;
pub mod input;
pub mod local_search;
pub mod models;
pub mod optimizer;
