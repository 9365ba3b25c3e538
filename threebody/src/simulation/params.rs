//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - gravitational constant `g`,
//! - optional per-component velocity clamp `max_speed`,
//! - step count used by batch runs

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub g: f64, // gravitational constant
    pub max_speed: Option<f64>, // component-wise velocity clamp, None = unclamped
    pub num_steps: usize, // steps for a batch run
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            g: 1.0,
            max_speed: None,
            num_steps: 1000,
        }
    }
}
