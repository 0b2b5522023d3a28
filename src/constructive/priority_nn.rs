//! Priority-aware nearest-neighbor heuristic.
//!
//! # Algorithm
//!
//! Greedy like plain nearest neighbor, but each candidate's distance is
//! adjusted before comparison:
//!
//! ```text
//! perishable candidate:              d - bonus · pending_perishables
//! non-perishable, perishables left:  d + pending_penalty
//! otherwise:                         d
//! ```
//!
//! `pending_perishables` counts the perishable stops still unvisited,
//! including the candidate itself. The growing bonus drains a large
//! perishable backlog first even when those stops are far away.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::{Item, Route};

/// Adjustments applied by [`priority_nearest_neighbor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborWeights {
    /// Subtracted per pending perishable when the candidate is perishable.
    pub perishable_bonus: f64,
    /// Added to a non-perishable candidate while perishables are pending.
    pub pending_penalty: f64,
}

impl Default for NeighborWeights {
    fn default() -> Self {
        Self {
            perishable_bonus: 10.0,
            pending_penalty: 15.0,
        }
    }
}

/// Constructs a route that clears perishable stops early.
///
/// Ties on the adjusted distance go to the lowest location index.
///
/// # Examples
///
/// ```
/// use perishable_routing::constructive::{priority_nearest_neighbor, NeighborWeights};
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::models::Item;
///
/// // Stop 1 is next door, stop 2 is far but perishable.
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 20.0],
///     vec![1.0, 0.0, 20.0],
///     vec![20.0, 20.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![Item::origin(), Item::non_perishable(), Item::perishable()];
///
/// let route = priority_nearest_neighbor(&items, &dm, &NeighborWeights::default());
/// assert_eq!(route.as_slice(), &[0, 2, 1]);
/// ```
pub fn priority_nearest_neighbor(
    items: &[Item],
    distances: &DistanceMatrix,
    weights: &NeighborWeights,
) -> Route {
    let n = items.len();
    if n <= 1 {
        return Route::identity(n);
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut pending_perishables = items[1..].iter().filter(|it| it.is_perishable()).count();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for i in 1..n {
            if visited[i] {
                continue;
            }
            let mut score = distances.get(current, i);
            if items[i].is_perishable() {
                score -= weights.perishable_bonus * pending_perishables as f64;
            } else if pending_perishables > 0 {
                score += weights.pending_penalty;
            }
            if best.is_none_or(|(_, bs)| score < bs) {
                best = Some((i, score));
            }
        }

        let Some((next, _)) = best else { break };
        visited[next] = true;
        if items[next].is_perishable() {
            pending_perishables -= 1;
        }
        order.push(next);
        current = next;
    }

    Route::from_order_unchecked(order)
}
