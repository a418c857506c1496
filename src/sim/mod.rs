//! Random route generation.
//!
//! Synthesizes [`RouteSegment`](crate::model::RouteSegment)s and composes
//! them into [`MultiModalRoute`](crate::model::MultiModalRoute)s for a
//! given origin/destination pair, using independent draws from configured
//! ranges. No feasibility check is performed — a waypoint may coincide
//! with an endpoint label, which is accepted input noise rather than an
//! error.

mod config;
mod generator;

pub use config::SimConfig;
pub use generator::RouteGenerator;
