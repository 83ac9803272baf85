//! Configuration for the routing engine

use serde::Deserialize;

/// Fixed routing constants.
///
/// None of these are derived from obstacle geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Minimum distance a path travels out of a site before turning
    pub min_exit_clearance: f64,

    /// Width of the band around a shape used by perimeter-hugging routes
    pub perimeter_clearance: f64,

    /// Exit distance of the best-effort route; larger than `min_exit_clearance`
    pub fallback_offset: f64,

    /// Interior points tested per segment during collision checks
    pub sample_count: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            min_exit_clearance: 30.0,
            perimeter_clearance: 20.0,
            fallback_offset: 80.0,
            sample_count: 10,
        }
    }
}

impl RoutingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_exit_clearance(mut self, clearance: f64) -> Self {
        self.min_exit_clearance = clearance;
        self
    }

    pub fn with_perimeter_clearance(mut self, clearance: f64) -> Self {
        self.perimeter_clearance = clearance;
        self
    }

    pub fn with_fallback_offset(mut self, offset: f64) -> Self {
        self.fallback_offset = offset;
        self
    }

    /// Set the number of interior samples per segment
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }
}
