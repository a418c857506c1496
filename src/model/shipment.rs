//! Shipment description and shipment-level factors.

use chrono::{Local, NaiveDate};
use rand::Rng;
use thiserror::Error;

/// Cargo classification carried by a [`Shipment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CargoType {
    Fragile,
    NonFragile,
    Hazardous,
}

/// Errors raised while constructing a [`Shipment`].
///
/// These are boundary-validation failures: once a shipment exists, the
/// engine never re-validates it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShipmentError {
    /// Weight must be strictly positive (kilograms).
    #[error("shipment weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    /// Volume must be strictly positive (cubic meters).
    #[error("shipment volume must be positive, got {0}")]
    NonPositiveVolume(f64),

    /// Origin and destination labels must be non-empty.
    #[error("shipment {0} label must be non-empty")]
    EmptyLocation(&'static str),
}

/// A shipment to route: what is being moved, between which labels,
/// and when it ships.
///
/// Immutable after construction. Not persisted anywhere — each request
/// builds its own shipment from caller-supplied fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shipment {
    /// Opaque identity key.
    pub shipment_id: String,
    /// Origin location label.
    pub origin: String,
    /// Destination location label.
    pub destination: String,
    /// Weight in kilograms. Strictly positive.
    pub weight: f64,
    /// Volume in cubic meters. Strictly positive.
    pub volume: f64,
    /// Cargo classification.
    pub cargo_type: CargoType,
    /// Calendar date the shipment leaves.
    pub shipping_date: NaiveDate,
}

impl Shipment {
    /// Creates a shipment, validating the boundary invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentError`] when weight or volume is not strictly
    /// positive, or when either location label is empty.
    pub fn new(
        shipment_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
        volume: f64,
        cargo_type: CargoType,
        shipping_date: NaiveDate,
    ) -> Result<Self, ShipmentError> {
        let origin = origin.into();
        let destination = destination.into();

        if !(weight > 0.0) {
            return Err(ShipmentError::NonPositiveWeight(weight));
        }
        if !(volume > 0.0) {
            return Err(ShipmentError::NonPositiveVolume(volume));
        }
        if origin.is_empty() {
            return Err(ShipmentError::EmptyLocation("origin"));
        }
        if destination.is_empty() {
            return Err(ShipmentError::EmptyLocation("destination"));
        }

        Ok(Self {
            shipment_id: shipment_id.into(),
            origin,
            destination,
            weight,
            volume,
            cargo_type,
            shipping_date,
        })
    }

    /// Risk factor: density-like ratio with a multiplicative perturbation.
    ///
    /// `(weight / (volume + 1)) * U[0.9, 1.3]`. Re-sampled on every call.
    pub fn risk_factor<R: Rng>(&self, rng: &mut R) -> f64 {
        (self.weight / (self.volume + 1.0)) * rng.random_range(0.9..1.3)
    }

    /// Days of schedule slack relative to `today`, floored at 1.
    ///
    /// Past or same-day shipping dates floor to 1 so the factor is always
    /// a valid divisor.
    pub fn time_factor_on(&self, today: NaiveDate) -> i64 {
        (self.shipping_date - today).num_days().max(1)
    }

    /// [`time_factor_on`](Self::time_factor_on) against the current local date.
    pub fn time_factor(&self) -> i64 {
        self.time_factor_on(Local::now().date_naive())
    }
}
