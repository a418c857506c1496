//! Synthetic multimodal freight route simulation and heuristic ranking.
//!
//! Generates candidate shipping routes between two locations and scores
//! them under several competing heuristics:
//!
//! - **Planning**: shipment-aware weighted trade-off between efficiency,
//!   cost per kilogram, and schedule pressure.
//! - **Weighted ranking**: fixed linear combination of route aggregates
//!   with per-instance weight draws.
//! - **Stochastic search**: budgeted random trials over perturbed quality
//!   scores, keeping the best candidate seen.
//! - **Fuzzy ranking**: additive noise over the linear quality predictor.
//!
//! All magnitudes are drawn from uniform distributions — locations are
//! opaque labels and no real geographic or cost modeling is attempted.
//! The crate is the scoring engine only; request handling, wire formats,
//! and visualization belong to consumers at higher layers.
//!
//! # Randomness
//!
//! Every stochastic operation takes an explicit `&mut R: Rng`, so callers
//! control seeding. Several derived quantities (segment safety, route
//! sustainability) deliberately re-sample on each call rather than caching;
//! reading them twice yields different values by design.

pub mod metrics;
pub mod model;
pub mod report;
pub mod sim;
pub mod strategy;
