//! Strategy error conditions.

use thiserror::Error;

/// Errors raised while scoring a candidate route set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// The strategy needs at least one candidate route to select from.
    ///
    /// Only raised by strategies that must pick a candidate (stochastic
    /// search); ranking strategies degrade to an empty list instead.
    #[error("no candidate routes to select from")]
    EmptyCandidateSet,
}
