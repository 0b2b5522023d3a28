//! Open-path 2-opt improvement with the origin pinned.
//!
//! # Algorithm
//!
//! For positions `1 <= i < j < n`, reverse the segment `route[i..=j]` and
//! recompute the full path distance. The first strictly shorter route
//! found is adopted and the scan restarts from `i = 1`. The search stops
//! after one complete scan finds no improving reversal.
//!
//! The full recomputation keeps the result correct for asymmetric road
//! distances, where reversing a segment also changes its internal legs.
//!
//! This pass minimizes raw distance only. Priority ordering is the
//! concern of the constructive heuristics and the score-based selection
//! that runs before it.
//!
//! # Complexity
//!
//! O(n³) per scan, repeated until no move improves.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::evaluation::total_distance;

/// Applies first-improvement 2-opt to a full route (origin at position 0).
///
/// Returns the improved route and its total distance. The input is never
/// modified and position 0 never moves. Routes shorter than three
/// locations are returned unchanged.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::local_search::two_opt_improve;
///
/// // Four points on a line at 0, 1, 2, 3.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let (improved, dist) = two_opt_improve(&[0, 3, 2, 1], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert_eq!(dist, 3.0);
/// ```
pub fn two_opt_improve(route: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let mut best_distance = total_distance(&current, distances);
    let n = current.len();
    if n < 3 {
        return (current, best_distance);
    }

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for i in 1..n - 1 {
            for j in i + 1..n {
                current[i..=j].reverse();
                let candidate = total_distance(&current, distances);
                if candidate < best_distance {
                    trace!(i, j, from = best_distance, to = candidate, "2-opt move");
                    best_distance = candidate;
                    improved = true;
                    break 'scan;
                }
                current[i..=j].reverse();
            }
        }
    }

    (current, best_distance)
}
