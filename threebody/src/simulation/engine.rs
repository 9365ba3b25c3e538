//! High-level runtime engine settings
//!
//! Playback options carried alongside the physics: the initial speed
//! multiplier, the bounds used by the clamped speed policy, trail length
//! and whether the rayon force term is requested

use crate::configuration::config::EngineConfig;

/// Lower bound of the clamped (multiplicative) speed policy
pub const SPEED_MIN: f64 = 0.1;
/// Upper bound of the clamped (multiplicative) speed policy
pub const SPEED_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub speed_multiplier: f64, // initial playback rate
    pub speed_min: f64, // clamped policy lower bound
    pub speed_max: f64, // clamped policy upper bound
    pub trail_length: Option<usize>, // None = unbounded history
    pub parallel: bool, // false = direct, true = rayon
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            speed_multiplier: cfg.speed_multiplier,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            trail_length: cfg.trail_length,
            parallel: cfg.parallel,
        }
    }
}
