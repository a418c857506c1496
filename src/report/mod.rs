//! Flat result records for presentation to callers.
//!
//! A [`RouteReport`] is a pure projection of a route (and, when asked,
//! shipment-derived extras) with no computation of its own beyond
//! invoking the metric functions it is told to include.

use chrono::NaiveDate;
use rand::Rng;

use crate::metrics::{deep_predict, innovation_score, predicted_quality, resilience_factor};
use crate::model::{MultiModalRoute, Shipment, TransportMode};

/// Flat record describing one route, plus optional computed extras.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteReport {
    /// Per-segment transport modes, in travel order.
    pub modes: Vec<TransportMode>,
    pub total_distance: f64,
    pub total_cost: f64,
    pub total_time: f64,
    pub overall_efficiency: f64,
    pub feasibility: f64,
    /// Sustainability index sampled when the report was built.
    pub sustainability_index: f64,
    /// Linear-model quality, when requested.
    pub predicted_quality: Option<f64>,
    /// Resilience factor, when requested (needs a shipment).
    pub resilience_factor: Option<f64>,
    /// Innovation score, when requested (needs a shipment).
    pub innovation_score: Option<f64>,
    /// Stochastic single-layer prediction over
    /// `[distance, cost, time, feasibility]`, when requested.
    pub deep_prediction: Option<f64>,
    /// Name of the strategy whose score is attached, when any.
    pub strategy_name: Option<String>,
    /// Strategy-specific score, when any.
    pub strategy_score: Option<f64>,
}

impl RouteReport {
    /// Starts a report for a route. The base projection (modes, totals,
    /// sampled sustainability index) is captured immediately.
    pub fn builder<'a, R: Rng>(route: &'a MultiModalRoute, rng: &mut R) -> ReportBuilder<'a> {
        ReportBuilder {
            route,
            report: RouteReport {
                modes: route.segments.iter().map(|seg| seg.mode).collect(),
                total_distance: route.total_distance,
                total_cost: route.total_cost,
                total_time: route.total_time,
                overall_efficiency: route.overall_efficiency,
                feasibility: route.feasibility,
                sustainability_index: route.sustainability_index(rng),
                predicted_quality: None,
                resilience_factor: None,
                innovation_score: None,
                deep_prediction: None,
                strategy_name: None,
                strategy_score: None,
            },
        }
    }

    /// The plain projection with no extras.
    pub fn basic<R: Rng>(route: &MultiModalRoute, rng: &mut R) -> Self {
        Self::builder(route, rng).build()
    }

    /// The full record: quality, resilience, innovation, and the
    /// four-feature deep prediction, measured against `today`.
    pub fn elaborate<R: Rng>(
        route: &MultiModalRoute,
        shipment: &Shipment,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        Self::builder(route, rng)
            .with_quality(rng)
            .with_resilience(shipment, today, rng)
            .with_innovation(shipment, today, rng)
            .with_deep_prediction(rng)
            .build()
    }
}

/// Attaches optional computed fields to a [`RouteReport`].
pub struct ReportBuilder<'a> {
    route: &'a MultiModalRoute,
    report: RouteReport,
}

impl ReportBuilder<'_> {
    /// Includes the linear-model predicted quality.
    pub fn with_quality<R: Rng>(mut self, rng: &mut R) -> Self {
        self.report.predicted_quality = Some(predicted_quality(self.route, rng));
        self
    }

    /// Includes the resilience factor for a shipment, against `today`.
    pub fn with_resilience<R: Rng>(
        mut self,
        shipment: &Shipment,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        self.report.resilience_factor =
            Some(resilience_factor(shipment, self.route, today, rng));
        self
    }

    /// Includes the innovation score for a shipment, against `today`.
    pub fn with_innovation<R: Rng>(
        mut self,
        shipment: &Shipment,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        self.report.innovation_score =
            Some(innovation_score(shipment, self.route, today, rng));
        self
    }

    /// Includes the stochastic single-layer prediction over
    /// `[total_distance, total_cost, total_time, feasibility]`.
    pub fn with_deep_prediction<R: Rng>(mut self, rng: &mut R) -> Self {
        let features = [
            self.route.total_distance,
            self.route.total_cost,
            self.route.total_time,
            self.route.feasibility,
        ];
        self.report.deep_prediction = Some(deep_predict(&features, rng));
        self
    }

    /// Attaches a strategy-specific score under the strategy's name.
    pub fn with_strategy_score(mut self, name: impl Into<String>, score: f64) -> Self {
        self.report.strategy_name = Some(name.into());
        self.report.strategy_score = Some(score);
        self
    }

    /// Finishes the report.
    pub fn build(self) -> RouteReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CargoType;
    use crate::sim::{RouteGenerator, SimConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture(rng: &mut StdRng) -> (Shipment, MultiModalRoute) {
        let shipment = Shipment::new(
            "S-1",
            "A",
            "J",
            120.0,
            2.5,
            CargoType::NonFragile,
            date(2026, 9, 15),
        )
        .unwrap();
        let generator = RouteGenerator::new(SimConfig::default());
        let route = generator.route("A", "J", rng);
        (shipment, route)
    }

    #[test]
    fn test_basic_report_projects_route() {
        let mut rng = StdRng::seed_from_u64(81);
        let (_, route) = fixture(&mut rng);
        let report = RouteReport::basic(&route, &mut rng);

        assert_eq!(report.modes.len(), route.segments.len());
        assert_eq!(report.total_distance, route.total_distance);
        assert_eq!(report.total_cost, route.total_cost);
        assert_eq!(report.total_time, route.total_time);
        assert_eq!(report.overall_efficiency, route.overall_efficiency);
        assert_eq!(report.feasibility, route.feasibility);
        assert!(report.predicted_quality.is_none());
        assert!(report.strategy_score.is_none());
    }

    #[test]
    fn test_elaborate_report_fills_extras() {
        let mut rng = StdRng::seed_from_u64(82);
        let (shipment, route) = fixture(&mut rng);
        let report = RouteReport::elaborate(&route, &shipment, date(2026, 9, 5), &mut rng);

        assert!(report.predicted_quality.is_some());
        assert!(report.resilience_factor.is_some());
        assert!(report.innovation_score.is_some());
        let deep = report.deep_prediction.unwrap();
        assert!(deep > -1.0 && deep < 1.0);
    }

    #[test]
    fn test_strategy_score_attaches_under_name() {
        let mut rng = StdRng::seed_from_u64(83);
        let (_, route) = fixture(&mut rng);
        let report = RouteReport::builder(&route, &mut rng)
            .with_strategy_score("weighted", 12.5)
            .build();

        assert_eq!(report.strategy_name.as_deref(), Some("weighted"));
        assert_eq!(report.strategy_score, Some(12.5));
    }
}
