//! Route scoring strategies.
//!
//! Four independent heuristics that turn a candidate route set into a
//! best-first ordering, unified behind the [`RouteStrategy`] trait:
//!
//! - [`PlanningStrategy`]: shipment-aware weighted trade-off
//!   (efficiency vs. cost per kg vs. schedule pressure).
//! - [`WeightedRanking`]: linear combination of route aggregates with
//!   per-instance weight draws.
//! - [`StochasticSearch`]: budgeted random trials over perturbed quality
//!   scores, best-so-far retention. A random-search baseline, not
//!   simulated annealing — there is no temperature schedule and no
//!   acceptance of worse solutions.
//! - [`FuzzyRanking`]: additive noise over the linear quality predictor.
//!
//! Scores are strategy-specific and not comparable across strategies.
//! Weight parameters are drawn once at construction; build a fresh
//! instance per ranking session when independent draws are wanted.

mod anneal;
mod error;
mod fuzzy;
mod planning;
mod types;
mod weighted;

pub use anneal::StochasticSearch;
pub use error::StrategyError;
pub use fuzzy::FuzzyRanking;
pub use planning::PlanningStrategy;
pub use types::{RankedRoute, RouteStrategy};
pub use weighted::WeightedRanking;
