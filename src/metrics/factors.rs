//! Composite shipment/route factors.

use chrono::NaiveDate;
use rand::Rng;

use super::quality::predicted_quality;
use crate::model::{MultiModalRoute, Shipment};

/// Route-level sustainability: distance per cost scaled by the
/// feasibility ratio, with a `U[0.9, 1.1)` perturbation.
///
/// Distinct from
/// [`MultiModalRoute::sustainability_index`], which averages per-segment
/// factors; this variant works from the route aggregates.
pub fn route_sustainability<R: Rng>(route: &MultiModalRoute, rng: &mut R) -> f64 {
    (route.total_distance / (route.total_cost + 1.0))
        * (route.feasibility / 100.0)
        * rng.random_range(0.9..1.1)
}

/// Resilience of a shipment/route pairing: risk and feasibility blended,
/// discounted by schedule slack.
///
/// `(risk * 0.6 + feasibility * 0.4) / (time_factor + 1)`, where
/// `time_factor` is measured against `today`.
pub fn resilience_factor<R: Rng>(
    shipment: &Shipment,
    route: &MultiModalRoute,
    today: NaiveDate,
    rng: &mut R,
) -> f64 {
    let risk = shipment.risk_factor(rng);
    let time_factor = shipment.time_factor_on(today) as f64;
    (risk * 0.6 + route.feasibility * 0.4) / (time_factor + 1.0)
}

/// Blended innovation score: 40% predicted quality, 30% route
/// sustainability, 30% resilience.
pub fn innovation_score<R: Rng>(
    shipment: &Shipment,
    route: &MultiModalRoute,
    today: NaiveDate,
    rng: &mut R,
) -> f64 {
    let quality = predicted_quality(route, rng);
    let sustain = route_sustainability(route, rng);
    let resilience = resilience_factor(shipment, route, today, rng);
    quality * 0.4 + sustain * 0.3 + resilience * 0.3
}
