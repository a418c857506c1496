//! Domain data model: shipments, route segments, and multimodal routes.
//!
//! All entities are value objects constructed once per request and never
//! mutated afterwards, with one exception: the annotated generation path
//! may attach an innovation metric to a route after construction.
//!
//! Validation happens at the boundary — [`Shipment::new`] rejects
//! non-positive weight/volume and empty location labels — so the rest of
//! the engine assumes well-formed input.

mod route;
mod shipment;

pub use route::{MultiModalRoute, RouteSegment, TransportMode};
pub use shipment::{CargoType, Shipment, ShipmentError};
