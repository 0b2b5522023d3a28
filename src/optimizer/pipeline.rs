//! Strategy selection and the optimization pipeline.

use serde::Serialize;
use tracing::{debug, info};

use crate::constructive::{nearest_neighbor, priority_grouped, priority_nearest_neighbor};
use crate::distance::DistanceMatrix;
use crate::evaluation::{analyze, RouteScorer};
use crate::exact::exhaustive_search;
use crate::input::{DeliveryRequest, InputError};
use crate::local_search::two_opt_improve;
use crate::models::{Item, Route, RouteQuality};

use super::OptimizerConfig;

/// How a route was found, chosen from the instance size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// At most one location: the identity route, nothing scored.
    Trivial,
    /// Every order tried.
    Exhaustive,
    /// Best of three constructive seeds.
    Heuristic,
}

/// The constructive heuristic a seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    /// Nearest neighbor with the perishable bonus.
    PriorityNearestNeighbor,
    /// Perishables first, each group nearest-to-origin first.
    PriorityGrouped,
    /// Plain nearest neighbor followed by 2-opt.
    NearestNeighborTwoOpt,
}

/// One scored seed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedCandidate {
    /// Heuristic that produced the route.
    pub kind: SeedKind,
    /// The seed route.
    pub route: Route,
    /// Its priority score.
    pub score: f64,
}

/// The final route plus everything the caller shows alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    /// The optimized visit order.
    pub route: Route,
    /// Branch taken.
    pub strategy: Strategy,
    /// Priority score of `route`.
    pub score: f64,
    /// Diagnostics over `route`.
    pub quality: RouteQuality,
    /// Seeds considered; empty unless `strategy` is [`Strategy::Heuristic`].
    pub seeds: Vec<SeedCandidate>,
    /// Seed that won selection, before the final 2-opt pass.
    pub selected: Option<SeedKind>,
}

/// Finds a short visiting order that delivers perishable items early.
///
/// - `n <= 1`: the trivial route
/// - `2 <= n <= exact_threshold`: exhaustive search on the priority score
/// - larger: three constructive seeds, best priority score kept
///
/// Whichever route wins then gets one more 2-opt pass on raw distance when
/// `n > refine_min_size`.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::models::Item;
/// use perishable_routing::optimizer::{Optimizer, OptimizerConfig, Strategy};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let items = vec![Item::origin(), Item::non_perishable(), Item::perishable()];
///
/// let optimizer = Optimizer::new(OptimizerConfig::default());
/// let report = optimizer.run(&items, &dm);
/// assert_eq!(report.strategy, Strategy::Exhaustive);
/// assert_eq!(report.route.as_slice(), &[0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Branch taken for an instance of `n` locations.
    pub fn strategy_for(&self, n: usize) -> Strategy {
        if n <= 1 {
            Strategy::Trivial
        } else if n <= self.config.exact_threshold {
            Strategy::Exhaustive
        } else {
            Strategy::Heuristic
        }
    }

    /// Returns the optimized route.
    ///
    /// `items[i]` and row/column `i` of `distances` describe location `i`;
    /// both must have the same length with the origin at 0. Inputs are not
    /// checked here, see [`Optimizer::optimize_request`].
    pub fn optimize(&self, items: &[Item], distances: &DistanceMatrix) -> Route {
        self.solve(items, distances).route
    }

    /// Runs the optimizer and reports route, score and diagnostics.
    pub fn run(&self, items: &[Item], distances: &DistanceMatrix) -> OptimizationReport {
        let Solved {
            route,
            strategy,
            seeds,
            selected,
        } = self.solve(items, distances);
        let score = if strategy == Strategy::Trivial {
            0.0
        } else {
            self.scorer(items, distances).score(route.as_slice())
        };
        let quality = analyze(route.as_slice(), items, distances);
        info!(
            n = items.len(),
            ?strategy,
            score,
            distance = quality.total_distance,
            "route optimized"
        );
        OptimizationReport {
            route,
            strategy,
            score,
            quality,
            seeds,
            selected,
        }
    }

    /// Validates a request, then runs the optimizer on it.
    ///
    /// # Errors
    ///
    /// Any [`InputError`] from [`DeliveryRequest::validate`].
    pub fn optimize_request(
        &self,
        request: &DeliveryRequest,
    ) -> Result<OptimizationReport, InputError> {
        request.validate()?;
        Ok(self.run(request.items(), request.distances()))
    }

    /// Builds and scores the three constructive seeds, in selection order.
    pub fn seed_candidates(&self, items: &[Item], distances: &DistanceMatrix) -> Vec<SeedCandidate> {
        let scorer = self.scorer(items, distances);
        let weights = self.config.neighbor_weights();

        let nn = nearest_neighbor(distances);
        let (nn_refined, _) = two_opt_improve(nn.as_slice(), distances);

        [
            (
                SeedKind::PriorityNearestNeighbor,
                priority_nearest_neighbor(items, distances, &weights),
            ),
            (SeedKind::PriorityGrouped, priority_grouped(items, distances)),
            (
                SeedKind::NearestNeighborTwoOpt,
                Route::from_order_unchecked(nn_refined),
            ),
        ]
        .into_iter()
        .map(|(kind, route)| {
            let score = scorer.score(route.as_slice());
            debug!(?kind, score, "seed scored");
            SeedCandidate { kind, route, score }
        })
        .collect()
    }

    fn scorer<'a>(&self, items: &'a [Item], distances: &'a DistanceMatrix) -> RouteScorer<'a> {
        RouteScorer::new(items, distances).with_lateness_penalty(self.config.lateness_penalty)
    }

    fn solve(&self, items: &[Item], distances: &DistanceMatrix) -> Solved {
        let n = items.len();
        let strategy = self.strategy_for(n);
        debug!(n, ?strategy, "strategy selected");

        let (best, seeds, selected) = match strategy {
            Strategy::Trivial => {
                return Solved {
                    route: Route::identity(n),
                    strategy,
                    seeds: Vec::new(),
                    selected: None,
                }
            }
            Strategy::Exhaustive => {
                let (route, _) = exhaustive_search(&self.scorer(items, distances));
                (route, Vec::new(), None)
            }
            Strategy::Heuristic => {
                let seeds = self.seed_candidates(items, distances);
                let mut best: Option<&SeedCandidate> = None;
                for seed in &seeds {
                    if best.is_none_or(|b| seed.score < b.score) {
                        best = Some(seed);
                    }
                }
                let route = best.map_or_else(|| Route::identity(n), |s| s.route.clone());
                let selected = best.map(|s| s.kind);
                (route, seeds, selected)
            }
        };

        let route = if n > self.config.refine_min_size {
            let (refined, _) = two_opt_improve(best.as_slice(), distances);
            Route::from_order_unchecked(refined)
        } else {
            best
        };

        Solved {
            route,
            strategy,
            seeds,
            selected,
        }
    }
}

struct Solved {
    route: Route,
    strategy: Strategy,
    seeds: Vec<SeedCandidate>,
    selected: Option<SeedKind>,
}

/// Optimizes with the default configuration.
///
/// Shorthand for `Optimizer::default().optimize(items, distances)`.
///
/// # Examples
///
/// ```
/// use perishable_routing::distance::DistanceMatrix;
/// use perishable_routing::models::Item;
/// use perishable_routing::optimizer::optimize;
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
/// let route = optimize(&[Item::origin(), Item::perishable()], &dm);
/// assert_eq!(route.as_slice(), &[0, 1]);
/// ```
pub fn optimize(items: &[Item], distances: &DistanceMatrix) -> Route {
    Optimizer::default().optimize(items, distances)
}
