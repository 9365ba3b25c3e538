//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a validated runtime
//! bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! A scenario is always built fresh from its configuration; resetting a run
//! rebuilds it instead of mutating the previous body set back into place.

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::forces::{AccelSet, NewtonianGravity};

/// Fully-initialized runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle. Degenerate input
    /// (no bodies, non-positive mass, bad vectors) is rejected here.
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let system = build_system(&cfg.bodies);

        // Parameters (runtime) from ParametersConfig + engine clamp
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            g: p_cfg.g,
            max_speed: cfg.engine.max_speed,
            num_steps: p_cfg.num_steps,
        };

        let engine = Engine::from(&cfg.engine);
        let forces = build_forces(&engine, &parameters);

        info!(
            "scenario: {} bodies, dt = {}, G = {}, max_speed = {:?}",
            system.bodies.len(),
            parameters.dt,
            parameters.g,
            parameters.max_speed
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}

/// Bodies at t = 0: map `BodyConfig` -> runtime `Body` using nalgebra vectors.
/// Expects a validated configuration.
pub fn build_system(bodies: &[BodyConfig]) -> System {
    let bodies = bodies
        .iter()
        .map(|bc| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            color: bc.color,
        })
        .collect();

    System { bodies, t: 0.0 }
}

/// Forces: construct an AccelSet and register Newtonian gravity
pub fn build_forces(engine: &Engine, parameters: &Parameters) -> AccelSet {
    let forces = AccelSet::new();

    if engine.parallel {
        #[cfg(feature = "parallel")]
        {
            return forces.with(crate::simulation::forces::ParallelNewtonianGravity { g: parameters.g });
        }
        #[cfg(not(feature = "parallel"))]
        log::warn!("parallel gravity requested but the `parallel` feature is disabled, using direct summation");
    }

    forces.with(NewtonianGravity { g: parameters.g })
}
