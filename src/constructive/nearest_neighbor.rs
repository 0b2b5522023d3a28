//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single route greedily: starting from the origin, always visit
//! the nearest unvisited stop by raw distance. Item kinds are ignored.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast,
//! geography-only baseline that 2-opt then sharpens.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Constructs a route over all `distances.size()` locations by nearest
/// neighbor from the origin.
///
/// Ties go to the lowest location index.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::constructive::nearest_neighbor;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 1.0],
///     vec![10.0, 0.0, 9.0],
///     vec![1.0, 9.0, 0.0],
/// ])
/// .unwrap();
///
/// let route = nearest_neighbor(&dm);
/// assert_eq!(route.as_slice(), &[0, 2, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Route {
    let n = distances.size();
    if n <= 1 {
        return Route::identity(n);
    }

    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&c| c != next);
        order.push(next);
        current = next;
    }

    Route::from_order_unchecked(order)
}
