//! Route segments and multimodal routes.

use rand::Rng;

/// Transport mode of a single route leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    Air,
    Sea,
    Land,
    Rail,
}

impl TransportMode {
    /// All modes, in draw order for uniform sampling.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Air,
        TransportMode::Sea,
        TransportMode::Land,
        TransportMode::Rail,
    ];
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TransportMode::Air => "air",
            TransportMode::Sea => "sea",
            TransportMode::Land => "land",
            TransportMode::Rail => "rail",
        };
        f.write_str(label)
    }
}

/// One leg of a multimodal route.
///
/// Immutable once created. `efficiency` is fixed at construction;
/// [`safety`](Self::safety) and
/// [`sustainability_factor`](Self::sustainability_factor) embed randomness
/// and are re-sampled on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    /// Transport mode for this leg.
    pub mode: TransportMode,
    /// Start location label.
    pub start: String,
    /// End location label.
    pub end: String,
    /// Leg distance in kilometers.
    pub distance: f64,
    /// Leg cost.
    pub cost: f64,
    /// Leg transit time in hours.
    pub transit_time: f64,
    /// `distance / (transit_time + 1)`, computed at construction.
    pub efficiency: f64,
}

impl RouteSegment {
    /// Creates a segment and computes its efficiency.
    pub fn new(
        mode: TransportMode,
        start: impl Into<String>,
        end: impl Into<String>,
        distance: f64,
        cost: f64,
        transit_time: f64,
    ) -> Self {
        Self {
            mode,
            start: start.into(),
            end: end.into(),
            distance,
            cost,
            transit_time,
            efficiency: distance / (transit_time + 1.0),
        }
    }

    /// Safety score in `[0, 100 + noise]`, clamped at zero on the low end.
    ///
    /// `max(0, 100 - cost * 0.12 + U[-5, 5])`. Re-sampled on every call.
    pub fn safety<R: Rng>(&self, rng: &mut R) -> f64 {
        (100.0 - self.cost * 0.12 + rng.random_range(-5.0..5.0)).max(0.0)
    }

    /// Distance-per-cost scaled by the safety ratio. Re-sampled per call.
    pub fn sustainability_factor<R: Rng>(&self, rng: &mut R) -> f64 {
        (self.distance / (self.cost + 1.0)) * (self.safety(rng) / 100.0)
    }
}

/// An ordered sequence of segments from an overall origin to an overall
/// destination through intermediate waypoints.
///
/// Totals and `feasibility` are computed once at construction;
/// [`sustainability_index`](Self::sustainability_index) re-samples its
/// per-segment factors on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiModalRoute {
    /// The legs of the route, in travel order.
    pub segments: Vec<RouteSegment>,
    /// Sum of segment distances.
    pub total_distance: f64,
    /// Sum of segment costs.
    pub total_cost: f64,
    /// Sum of segment transit times.
    pub total_time: f64,
    /// `total_distance / total_time`, or 0 when `total_time <= 0`.
    pub overall_efficiency: f64,
    /// Mean segment safety, sampled once at construction.
    pub feasibility: f64,
    /// Quality annotation attached post-hoc by the annotated generation
    /// path. `None` for routes from the plain generator.
    pub innovation_metric: Option<f64>,
}

impl MultiModalRoute {
    /// Builds a route from its segments, computing totals and sampling
    /// feasibility once.
    ///
    /// An empty segment list is degenerate but tolerated: totals are zero,
    /// efficiency falls back to 0, feasibility is 0.
    pub fn new<R: Rng>(segments: Vec<RouteSegment>, rng: &mut R) -> Self {
        let total_distance: f64 = segments.iter().map(|seg| seg.distance).sum();
        let total_cost: f64 = segments.iter().map(|seg| seg.cost).sum();
        let total_time: f64 = segments.iter().map(|seg| seg.transit_time).sum();

        let overall_efficiency = if total_time <= 0.0 {
            0.0
        } else {
            total_distance / total_time
        };

        let feasibility = if segments.is_empty() {
            0.0
        } else {
            let sum: f64 = segments.iter().map(|seg| seg.safety(rng)).sum();
            sum / segments.len() as f64
        };

        Self {
            segments,
            total_distance,
            total_cost,
            total_time,
            overall_efficiency,
            feasibility,
            innovation_metric: None,
        }
    }

    /// Mean per-segment sustainability factor. Re-sampled on every call.
    pub fn sustainability_index<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .segments
            .iter()
            .map(|seg| seg.sustainability_factor(rng))
            .sum();
        sum / self.segments.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_segment(distance: f64, cost: f64, transit_time: f64) -> RouteSegment {
        RouteSegment::new(TransportMode::Rail, "A", "B", distance, cost, transit_time)
    }

    #[test]
    fn test_segment_efficiency() {
        let seg = fixed_segment(500.0, 400.0, 9.0);
        assert!((seg.efficiency - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_safety_bounds() {
        let seg = fixed_segment(500.0, 400.0, 9.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let safety = seg.safety(&mut rng);
            // 100 - 48 = 52, plus noise in [-5, 5)
            assert!((47.0..57.0).contains(&safety));
        }
    }

    #[test]
    fn test_segment_safety_clamped_at_zero() {
        // cost high enough that 100 - cost * 0.12 is far below -5
        let seg = fixed_segment(500.0, 5000.0, 9.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(seg.safety(&mut rng), 0.0);
        }
    }

    #[test]
    fn test_route_totals_are_sums() {
        let segments = vec![
            fixed_segment(300.0, 200.0, 4.0),
            fixed_segment(700.0, 900.0, 10.0),
            fixed_segment(450.0, 300.0, 6.0),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        let route = MultiModalRoute::new(segments, &mut rng);

        assert!((route.total_distance - 1450.0).abs() < 1e-9);
        assert!((route.total_cost - 1400.0).abs() < 1e-9);
        assert!((route.total_time - 20.0).abs() < 1e-9);
        assert!((route.overall_efficiency - 1450.0 / 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_time_efficiency_fallback() {
        let segments = vec![fixed_segment(300.0, 200.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(3);
        let route = MultiModalRoute::new(segments, &mut rng);
        assert_eq!(route.overall_efficiency, 0.0);
    }

    #[test]
    fn test_empty_route_is_degenerate_not_an_error() {
        let mut rng = StdRng::seed_from_u64(4);
        let route = MultiModalRoute::new(Vec::new(), &mut rng);
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.overall_efficiency, 0.0);
        assert_eq!(route.feasibility, 0.0);
        assert_eq!(route.sustainability_index(&mut rng), 0.0);
    }

    #[test]
    fn test_feasibility_within_bounds() {
        let segments = vec![
            fixed_segment(300.0, 200.0, 4.0),
            fixed_segment(700.0, 900.0, 10.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let route = MultiModalRoute::new(segments, &mut rng);
        assert!(route.feasibility >= 0.0);
        assert!(route.feasibility <= 105.0);
    }

    #[test]
    fn test_sustainability_index_resamples() {
        let segments = vec![
            fixed_segment(300.0, 200.0, 4.0),
            fixed_segment(700.0, 900.0, 10.0),
        ];
        let mut rng = StdRng::seed_from_u64(6);
        let route = MultiModalRoute::new(segments, &mut rng);

        let first = route.sustainability_index(&mut rng);
        let second = route.sustainability_index(&mut rng);
        assert_ne!(first, second);
    }
}
