//! Stochastic search over perturbed quality scores.

use rand::Rng;

use super::error::StrategyError;
use super::types::{RankedRoute, RouteStrategy};
use crate::metrics::predicted_quality;
use crate::model::{MultiModalRoute, Shipment};

/// Budgeted random search: each trial picks a uniformly random candidate,
/// perturbs its predicted quality by a `U[0.95, 1.05)` factor, and keeps
/// the best (route, perturbed score) seen so far.
///
/// This is a pure random-search baseline, not simulated annealing — no
/// temperature schedule, no acceptance of worse solutions.
pub struct StochasticSearch {
    iterations: usize,
}

impl StochasticSearch {
    /// Default trial budget.
    pub const DEFAULT_ITERATIONS: usize = 50;

    /// Creates a search with the given trial budget. At least one trial
    /// is always performed.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Runs the trial budget and returns the best candidate seen.
    ///
    /// # Errors
    ///
    /// [`StrategyError::EmptyCandidateSet`] when `routes` is empty.
    pub fn optimize<R: Rng>(
        &self,
        routes: &[MultiModalRoute],
        rng: &mut R,
    ) -> Result<RankedRoute, StrategyError> {
        if routes.is_empty() {
            return Err(StrategyError::EmptyCandidateSet);
        }

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for _ in 0..self.iterations.max(1) {
            let index = rng.random_range(0..routes.len());
            let perturb = rng.random_range(0.95..1.05);
            let score = predicted_quality(&routes[index], rng) * perturb;
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        Ok(RankedRoute {
            route: routes[best_index].clone(),
            score: best_score,
        })
    }
}

impl Default for StochasticSearch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

impl RouteStrategy for StochasticSearch {
    fn name(&self) -> &str {
        "stochastic-search"
    }

    fn rank<R: Rng>(
        &self,
        _shipment: &Shipment,
        routes: &[MultiModalRoute],
        rng: &mut R,
    ) -> Result<Vec<RankedRoute>, StrategyError> {
        self.optimize(routes, rng).map(|best| vec![best])
    }
}
