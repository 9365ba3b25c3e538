pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod logger;

pub use simulation::states::{Body, BodyColor, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
#[cfg(feature = "parallel")]
pub use simulation::forces::ParallelNewtonianGravity;
pub use simulation::integrator::{euler_integrator, semi_implicit_euler, clamp_velocity};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::command::Command;
pub use simulation::controller::{SimulationController, RunState};
pub use simulation::trajectory::TrajectoryRecorder;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, BodyEdit, ScenarioConfig, parse_body_edit};
pub use configuration::error::ConfigError;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
