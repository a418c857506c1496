//! Route synthesis.

use rand::seq::index;
use rand::Rng;

use super::config::SimConfig;
use crate::metrics::predicted_quality;
use crate::model::{MultiModalRoute, RouteSegment, TransportMode};

/// Synthesizes multimodal routes between two location labels.
///
/// Generation always succeeds for `count >= 0`; a count of zero yields an
/// empty vector. The generator holds no state beyond its configuration —
/// all randomness comes from the caller-supplied `Rng`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use routesim::sim::{RouteGenerator, SimConfig};
///
/// let generator = RouteGenerator::new(SimConfig::default());
/// let mut rng = StdRng::seed_from_u64(42);
/// let routes = generator.routes("A", "J", 10, &mut rng);
/// assert_eq!(routes.len(), 10);
/// ```
pub struct RouteGenerator {
    config: SimConfig,
}

impl RouteGenerator {
    /// Creates a generator from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics when the configuration fails [`SimConfig::validate`].
    pub fn new(config: SimConfig) -> Self {
        config.validate().expect("invalid SimConfig");
        Self { config }
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Synthesizes one segment between two labels.
    ///
    /// Mode is drawn uniformly; cost and transit time derive from the
    /// distance draw.
    pub fn segment<R: Rng>(&self, start: &str, end: &str, rng: &mut R) -> RouteSegment {
        let mode = TransportMode::ALL[rng.random_range(0..TransportMode::ALL.len())];
        let (d_low, d_high) = self.config.distance_range;
        let (c_low, c_high) = self.config.cost_factor_range;
        let (s_low, s_high) = self.config.speed_range;

        let distance = rng.random_range(d_low..d_high);
        let cost = distance * rng.random_range(c_low..c_high);
        let transit_time = distance / rng.random_range(s_low..s_high);

        RouteSegment::new(mode, start, end, distance, cost, transit_time)
    }

    /// Synthesizes one route from `origin` to `destination` through a
    /// random set of intermediate waypoints.
    ///
    /// Waypoints are drawn without repetition from the configured pool;
    /// no check is made against the endpoints, so a waypoint may repeat
    /// an endpoint label.
    pub fn route<R: Rng>(
        &self,
        origin: &str,
        destination: &str,
        rng: &mut R,
    ) -> MultiModalRoute {
        let count = rng.random_range(self.config.min_waypoints..=self.config.max_waypoints);
        let waypoints = index::sample(rng, self.config.locations.len(), count);

        let mut points: Vec<&str> = Vec::with_capacity(count + 2);
        points.push(origin);
        for idx in waypoints.iter() {
            points.push(&self.config.locations[idx]);
        }
        points.push(destination);

        let segments: Vec<RouteSegment> = points
            .windows(2)
            .map(|pair| self.segment(pair[0], pair[1], rng))
            .collect();

        MultiModalRoute::new(segments, rng)
    }

    /// Synthesizes `count` independent routes.
    pub fn routes<R: Rng>(
        &self,
        origin: &str,
        destination: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<MultiModalRoute> {
        (0..count).map(|_| self.route(origin, destination, rng)).collect()
    }

    /// Synthesizes `count` routes and annotates each with an innovation
    /// metric: its predicted quality under a `U[0.95, 1.05)` perturbation.
    ///
    /// This is the only place a route is mutated after construction.
    pub fn annotated_routes<R: Rng>(
        &self,
        origin: &str,
        destination: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<MultiModalRoute> {
        (0..count)
            .map(|_| {
                let mut route = self.route(origin, destination, rng);
                let quality = predicted_quality(&route, rng);
                route.innovation_metric = Some(quality * rng.random_range(0.95..1.05));
                route
            })
            .collect()
    }
}
