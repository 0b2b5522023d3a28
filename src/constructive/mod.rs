//! Constructive heuristics that seed the search on larger instances.
//!
//! - [`priority_nearest_neighbor`] — Nearest neighbor with a perishable bonus, O(n²)
//! - [`priority_grouped`] — Perishables first, each group by distance from origin, O(n log n)
//! - [`nearest_neighbor`] — Plain nearest neighbor by raw distance, O(n²)

mod nearest_neighbor;
mod priority_grouped;
mod priority_nn;

pub use nearest_neighbor::nearest_neighbor;
pub use priority_grouped::priority_grouped;
pub use priority_nn::{priority_nearest_neighbor, NeighborWeights};
