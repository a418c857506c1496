//! Derived metric computations over shipments and routes.
//!
//! Pure functions except for the explicit `Rng` parameters: several
//! formulas carry deliberate multiplicative or additive noise and
//! re-sample it on every call.
//!
//! The quality predictor is a fixed linear model — constant weights, no
//! training. [`deep_predict`] redraws its weight vector on every
//! invocation and is a stochastic scoring primitive, not a learned model.

mod factors;
mod quality;

pub use factors::{innovation_score, resilience_factor, route_sustainability};
pub use quality::{deep_predict, predicted_quality, quality_from_features, QUALITY_BIAS, QUALITY_WEIGHTS};
