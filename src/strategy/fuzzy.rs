//! Perturbed-quality ranking.

use rand::Rng;

use super::error::StrategyError;
use super::types::{sort_descending, RankedRoute, RouteStrategy};
use crate::metrics::predicted_quality;
use crate::model::{MultiModalRoute, Shipment};

/// Ranks candidates by predicted quality plus additive `U[-5, 5)` noise.
///
/// Despite the "fuzzy" label this carries no membership-function logic;
/// it is the quality predictor with a noise term that can reorder
/// close-scoring candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyRanking;

impl FuzzyRanking {
    /// Creates the strategy. Stateless — the noise is drawn per score.
    pub fn new() -> Self {
        Self
    }

    /// Ranks a candidate set best-first by perturbed quality.
    pub fn rank_routes<R: Rng>(
        &self,
        routes: &[MultiModalRoute],
        rng: &mut R,
    ) -> Vec<RankedRoute> {
        let mut ranked: Vec<RankedRoute> = routes
            .iter()
            .map(|route| {
                let score = predicted_quality(route, rng) + rng.random_range(-5.0..5.0);
                RankedRoute {
                    route: route.clone(),
                    score,
                }
            })
            .collect();
        sort_descending(&mut ranked);
        ranked
    }
}

impl RouteStrategy for FuzzyRanking {
    fn name(&self) -> &str {
        "fuzzy"
    }

    fn rank<R: Rng>(
        &self,
        _shipment: &Shipment,
        routes: &[MultiModalRoute],
        rng: &mut R,
    ) -> Result<Vec<RankedRoute>, StrategyError> {
        Ok(self.rank_routes(routes, rng))
    }
}
