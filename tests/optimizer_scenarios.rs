//! End-to-end scenarios for the optimizer.

use perishable_routing::constructive::nearest_neighbor;
use perishable_routing::distance::DistanceMatrix;
use perishable_routing::evaluation::{priority_score, total_distance, RouteScorer};
use perishable_routing::exact::exhaustive_search;
use perishable_routing::input::{InputError, Resolution, ResolvedBatch};
use perishable_routing::models::{Item, ItemKind, Route};
use perishable_routing::optimizer::{optimize, Optimizer, SeedKind, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random points in a 100×100 square; every third stop perishable.
fn random_instance(n: usize, seed: u64) -> (Vec<Item>, DistanceMatrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let mut dm = DistanceMatrix::new(n);
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate() {
            dm.set(i, j, ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt());
        }
    }
    let items = (0..n)
        .map(|i| match i {
            0 => Item::origin(),
            i if i % 3 == 1 => Item::perishable(),
            _ => Item::non_perishable(),
        })
        .collect();
    (items, dm)
}

/// Minimum priority score over all orders, by recursive enumeration.
fn brute_force_min(items: &[Item], dm: &DistanceMatrix) -> f64 {
    fn go(route: &mut Vec<usize>, used: &mut [bool], items: &[Item], dm: &DistanceMatrix) -> f64 {
        if route.len() == used.len() {
            return priority_score(route, items, dm);
        }
        let mut best = f64::INFINITY;
        for i in 1..used.len() {
            if !used[i] {
                used[i] = true;
                route.push(i);
                best = best.min(go(route, used, items, dm));
                route.pop();
                used[i] = false;
            }
        }
        best
    }
    let mut used = vec![false; items.len()];
    used[0] = true;
    go(&mut vec![0], &mut used, items, dm)
}

#[test]
fn degenerate_sizes() {
    assert!(optimize(&[], &DistanceMatrix::new(0)).is_empty());
    assert_eq!(optimize(&[Item::origin()], &DistanceMatrix::new(1)).as_slice(), &[0]);

    let dm = DistanceMatrix::from_rows(vec![vec![0.0, 7.5], vec![7.5, 0.0]]).expect("square");
    let route = optimize(&[Item::origin(), Item::perishable()], &dm);
    assert_eq!(route.as_slice(), &[0, 1]);
}

#[test]
fn far_perishable_is_pulled_forward() {
    // Location 3 is perishable and the farthest from the origin. Nearest
    // neighbor leaves it for last; the optimizer visits it second.
    let dm = DistanceMatrix::from_rows(vec![
        vec![0.0, 5.0, 10.0, 12.0, 1.0],
        vec![5.0, 0.0, 7.0, 1.0, 7.0],
        vec![10.0, 7.0, 0.0, 9.0, 2.0],
        vec![12.0, 1.0, 9.0, 0.0, 6.0],
        vec![1.0, 7.0, 2.0, 6.0, 0.0],
    ])
    .expect("square");
    let items = vec![
        Item::origin(),
        Item::non_perishable(),
        Item::non_perishable(),
        Item::perishable(),
        Item::non_perishable(),
    ];

    let nn = nearest_neighbor(&dm);
    assert_eq!(nn.as_slice(), &[0, 4, 2, 1, 3]);

    let report = Optimizer::default().run(&items, &dm);
    assert_eq!(report.strategy, Strategy::Exhaustive);
    assert_eq!(report.route.as_slice(), &[0, 1, 3, 4, 2]);
    assert!(report.route.position_of(3) < nn.position_of(3));
    assert!(total_distance(nn.as_slice(), &dm) < report.quality.total_distance);
    assert!((report.score - 19.0).abs() < 1e-10);
    assert!((report.score - brute_force_min(&items, &dm)).abs() < 1e-10);
}

#[test]
fn exhaustive_search_is_optimal_on_random_instances() {
    for n in 2..=8 {
        for seed in 0..3 {
            let (items, dm) = random_instance(n, 100 * n as u64 + seed);
            let (route, score) = exhaustive_search(&RouteScorer::new(&items, &dm));
            assert!(Route::from_order(route.clone().into_vec()).is_some());
            assert!(
                (score - brute_force_min(&items, &dm)).abs() < 1e-9,
                "n = {n}, seed = {seed}"
            );
        }
    }
}

#[test]
fn heuristic_branch_on_twelve_stops() {
    for seed in 0..5 {
        let (items, dm) = random_instance(12, seed);
        let report = Optimizer::default().run(&items, &dm);
        assert_eq!(report.strategy, Strategy::Heuristic);
        assert_eq!(report.seeds.len(), 3);

        for seed_route in &report.seeds {
            let order = seed_route.route.clone().into_vec();
            assert!(Route::from_order(order).is_some(), "{:?} invalid", seed_route.kind);
        }

        let chosen = report
            .seeds
            .iter()
            .find(|s| Some(s.kind) == report.selected)
            .expect("a seed is selected");
        for other in &report.seeds {
            assert!(chosen.score <= other.score);
        }
        assert!(
            report.quality.total_distance <= total_distance(chosen.route.as_slice(), &dm) + 1e-9
        );
        assert!(Route::from_order(report.route.clone().into_vec()).is_some());
    }
}

#[test]
fn selection_keeps_first_seed_on_tied_scores() {
    // Uniform distances, no perishables: every seed scores the same and
    // the first one (priority nearest neighbor) is selected.
    let n = 10;
    let mut dm = DistanceMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if i != j {
                dm.set(i, j, 1.0);
            }
        }
    }
    let mut items = vec![Item::origin()];
    items.extend((1..n).map(|_| Item::non_perishable()));
    let report = Optimizer::default().run(&items, &dm);
    assert_eq!(report.selected, Some(SeedKind::PriorityNearestNeighbor));
    assert_eq!(report.route, Route::identity(n));
}

#[test]
fn partially_resolved_batch_is_optimized() {
    let batch = ResolvedBatch::from_resolutions(
        Resolution::resolved((0.0, 0.0), "Depot"),
        vec![
            (Resolution::resolved((1.0, 0.0), "Bakery"), ItemKind::NonPerishable),
            (Resolution::unresolved("Atlantis"), ItemKind::Perishable),
            (Resolution::resolved((5.0, 0.0), "Fishmonger"), ItemKind::Perishable),
        ],
    )
    .expect("two stops resolved");

    let points = batch.points().to_vec();
    let rows = points
        .iter()
        .map(|a: &(f64, f64)| points.iter().map(|b| (a.0 - b.0).abs()).collect())
        .collect();
    let request = batch
        .into_request(DistanceMatrix::from_rows(rows).expect("square"))
        .expect("valid request");
    assert_eq!(request.failed(), &["Atlantis".to_string()]);

    let report = Optimizer::default()
        .optimize_request(&request)
        .expect("valid request");
    // Fishmonger first: 5 + 4 = 9 beats 1 + 4 + 5 (one position late).
    assert_eq!(report.route.as_slice(), &[0, 2, 1]);
    let names: Vec<_> = report
        .route
        .iter()
        .map(|&loc| request.items()[loc].label().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Depot", "Fishmonger", "Bakery"]);
    assert_eq!(request.source_index(2), 3);
}

#[test]
fn batch_with_nothing_resolved_reports_failures() {
    let err = ResolvedBatch::from_resolutions(
        Resolution::resolved((0.0, 0.0), "Depot"),
        vec![(Resolution::<(f64, f64)>::unresolved("Atlantis"), ItemKind::Perishable)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        InputError::TooFewResolved {
            resolved: 1,
            failed: vec!["Atlantis".to_string()],
        }
    );
}
