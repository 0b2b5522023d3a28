//! Post-hoc route diagnostics.

use serde::{Deserialize, Serialize};

/// Quality metrics of a finished route.
///
/// Positions are route positions (origin at position 0), not location
/// indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuality {
    /// Sum of consecutive leg distances.
    pub total_distance: f64,
    /// Route positions holding perishable items, ascending.
    pub perishable_positions: Vec<usize>,
    /// Mean of `perishable_positions`; `0.0` when there are none.
    pub avg_perishable_position: f64,
    /// Perishable items at a position `<= len / 2`.
    pub perishable_delivered_early: usize,
}

/// Display-ready summary of a route, as shown to the courier.
///
/// Distances are rounded to two decimals, the mean perishable position to
/// one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Total route distance, rounded to 0.01.
    pub total_distance: f64,
    /// Number of delivery stops (origin excluded).
    pub total_stops: usize,
    /// Number of perishable stops.
    pub perishable_count: usize,
    /// Number of non-perishable stops.
    pub non_perishable_count: usize,
    /// Mean perishable route position, rounded to 0.1.
    pub perishable_avg_position: f64,
    /// Perishable items in the first half of the route.
    pub perishable_delivered_early: usize,
}
