//! Priority-grouped constructive heuristic.
//!
//! # Algorithm
//!
//! Splits the stops into perishable and non-perishable groups, sorts each
//! group by its direct distance from the origin, and visits every
//! perishable stop (nearest first) before any non-perishable one.
//! Distances between consecutive stops play no part; the route relies on
//! the later 2-opt pass for geography.
//!
//! # Complexity
//!
//! O(n log n) where n = number of locations (dominated by sorting).

use crate::distance::DistanceMatrix;
use crate::models::{Item, Route};

/// Constructs a route visiting all perishable stops before the rest.
///
/// Stops equidistant from the origin keep their index order.
///
/// # Examples
///
/// ```
/// use perishable_routing::constructive::priority_grouped;
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::models::Item;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 3.0, 2.0],
///     vec![1.0, 0.0, 2.0, 1.0],
///     vec![3.0, 2.0, 0.0, 1.0],
///     vec![2.0, 1.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![
///     Item::origin(),
///     Item::non_perishable(),
///     Item::perishable(),
///     Item::perishable(),
/// ];
///
/// let route = priority_grouped(&items, &dm);
/// assert_eq!(route.as_slice(), &[0, 3, 2, 1]);
/// ```
pub fn priority_grouped(items: &[Item], distances: &DistanceMatrix) -> Route {
    let n = items.len();
    if n <= 1 {
        return Route::identity(n);
    }

    let (mut perishable, mut other): (Vec<usize>, Vec<usize>) =
        (1..n).partition(|&i| items[i].is_perishable());

    let from_origin = |a: &usize, b: &usize| distances.get(0, *a).total_cmp(&distances.get(0, *b));
    perishable.sort_by(from_origin);
    other.sort_by(from_origin);

    let mut order = Vec::with_capacity(n);
    order.push(0);
    order.extend(perishable);
    order.extend(other);
    Route::from_order_unchecked(order)
}
