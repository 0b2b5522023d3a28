//! Property tests over random instances.

use perishable_routing::distance::DistanceMatrix;
use perishable_routing::evaluation::{priority_score, total_distance};
use perishable_routing::local_search::two_opt_improve;
use perishable_routing::models::{Item, Route};
use perishable_routing::optimizer::optimize;
use proptest::prelude::*;

/// Euclidean instance from generated points; the flag marks perishables.
fn build(stops: &[(f64, f64, bool)]) -> (Vec<Item>, DistanceMatrix) {
    let n = stops.len();
    let mut dm = DistanceMatrix::new(n);
    for (i, a) in stops.iter().enumerate() {
        for (j, b) in stops.iter().enumerate() {
            dm.set(i, j, ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt());
        }
    }
    let items = stops
        .iter()
        .enumerate()
        .map(|(i, s)| match (i, s.2) {
            (0, _) => Item::origin(),
            (_, true) => Item::perishable(),
            (_, false) => Item::non_perishable(),
        })
        .collect();
    (items, dm)
}

fn stop_lists(max: usize) -> impl Strategy<Value = Vec<(f64, f64, bool)>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0, any::<bool>()), 0..=max)
}

proptest! {
    #[test]
    fn optimize_returns_permutation_from_origin(stops in stop_lists(12)) {
        let (items, dm) = build(&stops);
        let route = optimize(&items, &dm);
        prop_assert_eq!(route.len(), stops.len());
        prop_assert!(Route::from_order(route.into_vec()).is_some());
    }

    #[test]
    fn two_opt_never_lengthens_and_is_stable(stops in stop_lists(10), shift in 0usize..10) {
        let (_, dm) = build(&stops);
        let n = stops.len();
        let mut route: Vec<usize> = (0..n).collect();
        if n > 2 {
            route[1..].rotate_left(shift % (n - 1));
        }
        let before = total_distance(&route, &dm);
        let (once, d1) = two_opt_improve(&route, &dm);
        prop_assert!(d1 <= before);
        prop_assert_eq!(once.first(), route.first());

        let (twice, d2) = two_opt_improve(&once, &dm);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(d1, d2);
    }

    #[test]
    fn earlier_perishable_scores_lower(n in 3usize..9, from in 1usize..8, to in 1usize..8) {
        // Uniform distances isolate the lateness penalty.
        prop_assume!(from < n && to < n && from != to);
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, 3.0);
                }
            }
        }
        let mut items = vec![Item::origin()];
        items.extend((1..n).map(|i| if i == 1 { Item::perishable() } else { Item::non_perishable() }));

        let place = |pos: usize| {
            let mut others: Vec<usize> = (2..n).collect();
            others.insert(pos - 1, 1);
            let mut r = vec![0];
            r.extend(others);
            r
        };
        let (early, late) = (from.min(to), from.max(to));
        let diff = priority_score(&place(late), &items, &dm) - priority_score(&place(early), &items, &dm);
        prop_assert!(diff > 0.0);
        prop_assert!((diff - 5.0 * (late - early) as f64).abs() < 1e-9);
    }
}
