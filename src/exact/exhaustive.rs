//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Enumerates every ordering of the stops `1..n` in lexicographic order,
//! prepends the origin, and keeps the route with the lowest priority
//! score. On equal scores the first ordering enumerated wins.
//!
//! # Complexity
//!
//! O((n-1)! · n). Intended for `n <= 8` (at most 5040 orderings).

use tracing::debug;

use crate::evaluation::RouteScorer;
use crate::models::Route;

/// Finds the route with the minimum priority score by trying every order.
///
/// Returns the best route and its score. Instances with at most one
/// location return the trivial route with score `0.0`.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::evaluation::RouteScorer;
/// use perishable_routing::exact::exhaustive_search;
/// use perishable_routing::models::Item;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![Item::origin(), Item::non_perishable(), Item::non_perishable(), Item::non_perishable()];
///
/// let (route, score) = exhaustive_search(&RouteScorer::new(&items, &dm));
/// assert_eq!(route.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(score, 3.0);
/// ```
pub fn exhaustive_search(scorer: &RouteScorer<'_>) -> (Route, f64) {
    let n = scorer.items().len();
    if n <= 1 {
        return (Route::identity(n), 0.0);
    }

    let mut candidate: Vec<usize> = (0..n).collect();
    let mut best = candidate.clone();
    let mut best_score = scorer.score(&candidate);
    let mut evaluated: u64 = 1;

    while next_permutation(&mut candidate[1..]) {
        evaluated += 1;
        let score = scorer.score(&candidate);
        if score < best_score {
            best_score = score;
            best.copy_from_slice(&candidate);
        }
    }

    debug!(n, evaluated, best_score, "exhaustive search finished");
    (Route::from_order_unchecked(best), best_score)
}

/// Advances `items` to the next lexicographic permutation in place.
///
/// Returns `false` (leaving `items` sorted ascending again) once the last
/// permutation has been passed.
///
/// # Examples
///
/// ```
/// use perishable_routing::exact::next_permutation;
///
/// let mut p = [1, 2, 3];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [1, 3, 2]);
///
/// let mut last = [3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Rightmost ascent.
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }

    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
