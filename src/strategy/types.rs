//! Core trait and result type for scoring strategies.

use rand::Rng;

use super::error::StrategyError;
use crate::model::{MultiModalRoute, Shipment};

/// A scored candidate: a route paired with its strategy-specific score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedRoute {
    /// The candidate route.
    pub route: MultiModalRoute,
    /// Strategy-specific score. Higher is better within one strategy;
    /// scores are not comparable across strategies.
    pub score: f64,
}

/// A scoring strategy over a candidate route set.
///
/// Implementations return rankings ordered descending by score; ties keep
/// generation order (stable sort). Strategies that ignore the shipment
/// still accept it so callers can treat the four variants interchangeably.
pub trait RouteStrategy {
    /// Returns the name of this strategy, used to key report score fields.
    fn name(&self) -> &str;

    /// Ranks the candidate set best-first.
    ///
    /// # Errors
    ///
    /// [`StrategyError::EmptyCandidateSet`] when the strategy cannot
    /// produce output without at least one candidate. Strategies that
    /// degrade gracefully return an empty ranking instead.
    fn rank<R: Rng>(
        &self,
        shipment: &Shipment,
        routes: &[MultiModalRoute],
        rng: &mut R,
    ) -> Result<Vec<RankedRoute>, StrategyError>;
}

/// Orders a ranking descending by score. Stable, so equal scores keep
/// their generation order.
pub(crate) fn sort_descending(ranked: &mut [RankedRoute]) {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
