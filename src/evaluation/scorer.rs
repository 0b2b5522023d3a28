//! Route distance and priority-adjusted score.
//!
//! The priority score is the single objective used to rank candidate
//! routes:
//!
//! ```text
//! score = Σ d(r[i], r[i+1])  +  Σ_{p ≥ 1, item(r[p]) perishable} (p - 1) · penalty
//! ```
//!
//! With the default penalty of 5.0 a perishable stop costs five distance
//! units per position it is delayed past the first stop.

use crate::distance::DistanceMatrix;
use crate::models::Item;

/// Default lateness penalty per position of delay for a perishable stop.
pub const DEFAULT_LATENESS_PENALTY: f64 = 5.0;

/// Sums the leg distances of an open path `route[0] → ... → route[n-1]`.
///
/// There is no return leg to the origin. Empty and single-location routes
/// have distance zero.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::evaluation::total_distance;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 3.0],
///     vec![9.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(total_distance(&[0, 1, 2], &dm), 5.0);
/// assert_eq!(total_distance(&[0, 2, 1], &dm), 12.0);
/// ```
pub fn total_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

/// Total distance plus the default perishable lateness penalty.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::evaluation::priority_score;
/// use perishable_routing::models::Item;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 1.0],
///     vec![1.0, 0.0, 1.0],
///     vec![1.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![Item::origin(), Item::non_perishable(), Item::perishable()];
///
/// // Perishable first: no penalty. Perishable second: one position late.
/// assert_eq!(priority_score(&[0, 2, 1], &items, &dm), 2.0);
/// assert_eq!(priority_score(&[0, 1, 2], &items, &dm), 7.0);
/// ```
pub fn priority_score(route: &[usize], items: &[Item], distances: &DistanceMatrix) -> f64 {
    RouteScorer::new(items, distances).score(route)
}

/// Scores routes against a fixed set of items and distances.
///
/// Holds borrowed problem data so the search strategies can score many
/// candidates without threading the inputs through every call.
#[derive(Debug, Clone, Copy)]
pub struct RouteScorer<'a> {
    items: &'a [Item],
    distances: &'a DistanceMatrix,
    lateness_penalty: f64,
}

impl<'a> RouteScorer<'a> {
    /// Creates a scorer with the default lateness penalty.
    pub fn new(items: &'a [Item], distances: &'a DistanceMatrix) -> Self {
        Self {
            items,
            distances,
            lateness_penalty: DEFAULT_LATENESS_PENALTY,
        }
    }

    /// Overrides the per-position lateness penalty.
    pub fn with_lateness_penalty(mut self, penalty: f64) -> Self {
        self.lateness_penalty = penalty;
        self
    }

    /// The items being scored against.
    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    /// The distance matrix being scored against.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Raw path distance of `route`.
    pub fn total_distance(&self, route: &[usize]) -> f64 {
        total_distance(route, self.distances)
    }

    /// Lateness penalty alone: `(p - 1) · penalty` per perishable at position `p ≥ 1`.
    pub fn penalty(&self, route: &[usize]) -> f64 {
        route
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &loc)| self.items[loc].is_perishable())
            .map(|(p, _)| (p - 1) as f64 * self.lateness_penalty)
            .sum()
    }

    /// Priority-adjusted score: distance plus lateness penalty.
    pub fn score(&self, route: &[usize]) -> f64 {
        self.total_distance(route) + self.penalty(route)
    }
}
