//! Route generation configuration.

/// Configuration for the random route generator.
///
/// Ranges are half-open `[low, high)` uniform draws. Defaults mirror the
/// synthetic network the engine was designed around: ten location labels,
/// 2–5 intermediate waypoints, distances in `[200, 1500)` km.
///
/// # Examples
///
/// ```
/// use routesim::sim::SimConfig;
///
/// let config = SimConfig::default()
///     .with_distance_range(100.0, 800.0)
///     .with_waypoint_range(1, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Pool of location labels that waypoints are drawn from
    /// (without repetition within one route).
    pub locations: Vec<String>,

    /// Inclusive bounds on the number of intermediate waypoints per route.
    pub min_waypoints: usize,
    /// See [`min_waypoints`](Self::min_waypoints). Must not exceed the
    /// location pool size.
    pub max_waypoints: usize,

    /// Segment distance draw, km.
    pub distance_range: (f64, f64),

    /// Cost per segment is `distance * U[cost_factor_range]`.
    pub cost_factor_range: (f64, f64),

    /// Transit time per segment is `distance / U[speed_range]`, km/h.
    pub speed_range: (f64, f64),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            locations: ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            min_waypoints: 2,
            max_waypoints: 5,
            distance_range: (200.0, 1500.0),
            cost_factor_range: (0.6, 2.0),
            speed_range: (60.0, 120.0),
        }
    }
}

impl SimConfig {
    /// Sets the waypoint location pool.
    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the inclusive waypoint count bounds.
    pub fn with_waypoint_range(mut self, min: usize, max: usize) -> Self {
        self.min_waypoints = min;
        self.max_waypoints = max;
        self
    }

    /// Sets the segment distance draw bounds (km).
    pub fn with_distance_range(mut self, low: f64, high: f64) -> Self {
        self.distance_range = (low, high);
        self
    }

    /// Sets the cost multiplier draw bounds.
    pub fn with_cost_factor_range(mut self, low: f64, high: f64) -> Self {
        self.cost_factor_range = (low, high);
        self
    }

    /// Sets the speed draw bounds (km/h).
    pub fn with_speed_range(mut self, low: f64, high: f64) -> Self {
        self.speed_range = (low, high);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.locations.is_empty() {
            return Err("location pool must be non-empty".into());
        }
        if self.min_waypoints > self.max_waypoints {
            return Err(format!(
                "min_waypoints {} exceeds max_waypoints {}",
                self.min_waypoints, self.max_waypoints
            ));
        }
        if self.max_waypoints > self.locations.len() {
            return Err(format!(
                "max_waypoints {} exceeds location pool size {} (waypoints are drawn without repetition)",
                self.max_waypoints,
                self.locations.len()
            ));
        }
        for (name, (low, high)) in [
            ("distance_range", self.distance_range),
            ("cost_factor_range", self.cost_factor_range),
            ("speed_range", self.speed_range),
        ] {
            if !(low > 0.0) || !(high > low) {
                return Err(format!("{name} must satisfy 0 < low < high, got ({low}, {high})"));
            }
        }
        Ok(())
    }
}
