//! Shipment-aware planning strategy.

use chrono::NaiveDate;
use rand::Rng;

use super::error::StrategyError;
use super::types::{sort_descending, RankedRoute, RouteStrategy};
use crate::model::{MultiModalRoute, Shipment};
use crate::sim::RouteGenerator;

/// Number of candidate routes the end-to-end planning path generates.
const PLANNING_CANDIDATES: usize = 10;

/// Means-end planning: trades route efficiency against cost per kilogram
/// and schedule pressure, with per-instance weight draws.
///
/// `score = alpha * efficiency - beta * cost/(weight+1) - gamma *
/// time/time_factor`, with `alpha`, `beta`, `gamma` drawn from
/// `U[0.5, 1.8)` once at construction.
pub struct PlanningStrategy {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl PlanningStrategy {
    /// Creates a strategy instance, drawing its three weights once.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            alpha: rng.random_range(0.5..1.8),
            beta: rng.random_range(0.5..1.8),
            gamma: rng.random_range(0.5..1.8),
        }
    }

    /// The weight triple drawn for this instance.
    pub fn weights(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    /// Scores one route for a shipment, measuring schedule slack
    /// against `today`.
    pub fn evaluate_on(
        &self,
        route: &MultiModalRoute,
        shipment: &Shipment,
        today: NaiveDate,
    ) -> f64 {
        let cost_factor = route.total_cost / (shipment.weight + 1.0);
        let time_factor = route.total_time / shipment.time_factor_on(today) as f64;
        self.alpha * route.overall_efficiency - self.beta * cost_factor - self.gamma * time_factor
    }

    /// [`evaluate_on`](Self::evaluate_on) against the current local date.
    pub fn evaluate(&self, route: &MultiModalRoute, shipment: &Shipment) -> f64 {
        let cost_factor = route.total_cost / (shipment.weight + 1.0);
        let time_factor = route.total_time / shipment.time_factor() as f64;
        self.alpha * route.overall_efficiency - self.beta * cost_factor - self.gamma * time_factor
    }

    /// Ranks a candidate set, measuring schedule slack against `today`.
    pub fn rank_on(
        &self,
        shipment: &Shipment,
        routes: &[MultiModalRoute],
        today: NaiveDate,
    ) -> Vec<RankedRoute> {
        let mut ranked: Vec<RankedRoute> = routes
            .iter()
            .map(|route| RankedRoute {
                route: route.clone(),
                score: self.evaluate_on(route, shipment, today),
            })
            .collect();
        sort_descending(&mut ranked);
        ranked
    }

    /// End-to-end planning: generates candidates for the shipment's own
    /// origin/destination pair and ranks them.
    pub fn plan<R: Rng>(
        &self,
        shipment: &Shipment,
        generator: &RouteGenerator,
        rng: &mut R,
    ) -> Vec<RankedRoute> {
        let routes = generator.routes(
            &shipment.origin,
            &shipment.destination,
            PLANNING_CANDIDATES,
            rng,
        );
        let mut ranked: Vec<RankedRoute> = routes
            .into_iter()
            .map(|route| {
                let score = self.evaluate(&route, shipment);
                RankedRoute { route, score }
            })
            .collect();
        sort_descending(&mut ranked);
        ranked
    }
}

impl RouteStrategy for PlanningStrategy {
    fn name(&self) -> &str {
        "planning"
    }

    fn rank<R: Rng>(
        &self,
        shipment: &Shipment,
        routes: &[MultiModalRoute],
        _rng: &mut R,
    ) -> Result<Vec<RankedRoute>, StrategyError> {
        let mut ranked: Vec<RankedRoute> = routes
            .iter()
            .map(|route| RankedRoute {
                route: route.clone(),
                score: self.evaluate(route, shipment),
            })
            .collect();
        sort_descending(&mut ranked);
        Ok(ranked)
    }
}
