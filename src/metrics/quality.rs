//! Linear quality predictor and the stochastic single-layer scorer.

use rand::Rng;

use crate::model::MultiModalRoute;

/// Weights of the fixed linear quality model, applied to
/// `[total_distance, total_cost, total_time, feasibility, sustainability]`.
pub const QUALITY_WEIGHTS: [f64; 5] = [0.25, -0.15, -0.30, 0.20, 0.20];

/// Additive bias of the quality model.
pub const QUALITY_BIAS: f64 = 10.0;

/// Applies the fixed linear model to an explicit feature vector.
///
/// The bias is additive, so the output does not scale proportionally with
/// the inputs.
pub fn quality_from_features(features: &[f64; 5]) -> f64 {
    let dot: f64 = features
        .iter()
        .zip(QUALITY_WEIGHTS.iter())
        .map(|(feature, weight)| feature * weight)
        .sum();
    dot + QUALITY_BIAS
}

/// Predicted quality of a route under the fixed linear model.
///
/// The sustainability feature is the route's
/// [`sustainability_index`](MultiModalRoute::sustainability_index), which
/// re-samples per call, so repeated predictions for the same route differ
/// slightly.
pub fn predicted_quality<R: Rng>(route: &MultiModalRoute, rng: &mut R) -> f64 {
    quality_from_features(&[
        route.total_distance,
        route.total_cost,
        route.total_time,
        route.feasibility,
        route.sustainability_index(rng),
    ])
}

/// Scores a feature vector through a randomly initialized single-layer
/// tanh unit.
///
/// Weights are drawn from `U[-1, 1)` per feature and the bias from
/// `U[-5, 5)` on every invocation — there are no persisted parameters.
/// The output is always in `(-1, 1)`.
pub fn deep_predict<R: Rng>(features: &[f64], rng: &mut R) -> f64 {
    let dot: f64 = features
        .iter()
        .map(|feature| feature * rng.random_range(-1.0..1.0))
        .sum();
    let bias = rng.random_range(-5.0..5.0);
    (dot + bias).tanh()
}
