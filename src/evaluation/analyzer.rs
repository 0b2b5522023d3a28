//! Post-hoc quality metrics over a finished route.

use crate::distance::DistanceMatrix;
use crate::models::{Item, ItemKind, RouteQuality, RouteSummary};

use super::scorer::total_distance;

/// Computes [`RouteQuality`] for a finished route in a single scan.
///
/// A perishable stop counts as delivered early when its route position is
/// at most `route.len() / 2` (integer division over the full route length,
/// origin included).
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::evaluation::analyze;
/// use perishable_routing::models::Item;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![
///     Item::origin(),
///     Item::perishable(),
///     Item::non_perishable(),
///     Item::perishable(),
/// ];
///
/// let q = analyze(&[0, 1, 2, 3], &items, &dm);
/// assert_eq!(q.total_distance, 3.0);
/// assert_eq!(q.perishable_positions, vec![1, 3]);
/// assert_eq!(q.avg_perishable_position, 2.0);
/// assert_eq!(q.perishable_delivered_early, 1);
/// ```
pub fn analyze(route: &[usize], items: &[Item], distances: &DistanceMatrix) -> RouteQuality {
    let perishable_positions: Vec<usize> = route
        .iter()
        .enumerate()
        .filter(|&(_, &loc)| loc > 0 && items[loc].is_perishable())
        .map(|(p, _)| p)
        .collect();

    let avg_perishable_position = if perishable_positions.is_empty() {
        0.0
    } else {
        perishable_positions.iter().sum::<usize>() as f64 / perishable_positions.len() as f64
    };

    let half = route.len() / 2;
    let perishable_delivered_early = perishable_positions.iter().filter(|&&p| p <= half).count();

    RouteQuality {
        total_distance: total_distance(route, distances),
        perishable_positions,
        avg_perishable_position,
        perishable_delivered_early,
    }
}

/// Builds the display summary for a finished route.
///
/// Wraps [`analyze`] and adds per-kind stop counts; the origin is not
/// counted as a stop.
pub fn summarize(route: &[usize], items: &[Item], distances: &DistanceMatrix) -> RouteSummary {
    let quality = analyze(route, items, distances);
    let (mut perishable_count, mut non_perishable_count) = (0, 0);
    for &loc in route {
        match items[loc].kind() {
            ItemKind::Perishable => perishable_count += 1,
            ItemKind::NonPerishable => non_perishable_count += 1,
            ItemKind::Origin => {}
        }
    }

    RouteSummary {
        total_distance: round_to(quality.total_distance, 2),
        total_stops: route.len().saturating_sub(1),
        perishable_count,
        non_perishable_count,
        perishable_avg_position: round_to(quality.avg_perishable_position, 1),
        perishable_delivered_early: quality.perishable_delivered_early,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
