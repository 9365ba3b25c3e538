//! Simulation control: owns the running scenario and everything the driver
//! loop is allowed to change about it.
//!
//! The controller is a plain owned value. The Bevy viewer stores it as a
//! `Resource`, the headless runner keeps it on the stack; both drive it
//! through [`Command`]s or the equivalent methods.

use bevy::prelude::Resource;
use log::{debug, info, warn};

use crate::configuration::config::{BodyEdit, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::command::Command;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::trajectory::TrajectoryRecorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

#[derive(Resource)]
pub struct SimulationController {
    defaults: ScenarioConfig, // configuration rebuilt on every reset
    scenario: Scenario,
    paused: bool,
    speed_multiplier: f64,
    elapsed_steps: u64,
    generation: u64, // bumped on reset so trail owners know to clear
}

impl SimulationController {
    pub fn new(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let scenario = Scenario::build_scenario(&cfg)?;
        let speed_multiplier = scenario.engine.speed_multiplier;

        Ok(Self {
            defaults: cfg,
            scenario,
            paused: false,
            speed_multiplier,
            elapsed_steps: 0,
            generation: 0,
        })
    }

    /// Advance one fixed step. Returns `false` (and touches nothing) while paused.
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let Scenario {
            system,
            parameters,
            forces,
            ..
        } = &mut self.scenario;

        euler_integrator(system, forces, parameters, self.speed_multiplier);
        self.elapsed_steps += 1;

        if !system.is_finite() {
            warn!("non-finite body state after step {}", self.elapsed_steps);
        }

        true
    }

    /// Run up to `steps` steps, recording positions after each one.
    /// Returns the number of steps actually taken (0 while paused).
    pub fn run(&mut self, steps: usize, recorder: &mut TrajectoryRecorder) -> usize {
        let mut taken = 0;
        for _ in 0..steps {
            if !self.step() {
                break;
            }
            recorder.record(self.bodies());
            taken += 1;
        }
        taken
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("paused = {}", self.paused);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Additive policy: `speed += delta`, no bounds
    pub fn nudge_speed_additive(&mut self, delta: f64) {
        if !delta.is_finite() {
            warn!("ignoring non-finite speed nudge {}", delta);
            return;
        }
        self.speed_multiplier += delta;
        debug!("speed multiplier = {}", self.speed_multiplier);
        if self.speed_multiplier <= 0.0 {
            warn!(
                "speed multiplier is now {}, steps run backwards or stand still",
                self.speed_multiplier
            );
        }
    }

    /// Multiplicative policy: `speed = clamp(speed * factor, min, max)`
    /// A non-finite factor, or a product that is not a number, leaves the
    /// multiplier unchanged.
    pub fn scale_speed_clamped(&mut self, factor: f64) {
        let scaled = self.speed_multiplier * factor;
        if !factor.is_finite() || scaled.is_nan() {
            warn!("ignoring speed factor {} at multiplier {}", factor, self.speed_multiplier);
            return;
        }
        let engine = &self.scenario.engine;
        self.speed_multiplier = scaled.clamp(engine.speed_min, engine.speed_max);
        debug!("speed multiplier = {}", self.speed_multiplier);
    }

    /// Rebuild the body set from the default configuration and clear all
    /// run state. Trail owners should watch [`generation`](Self::generation).
    pub fn reset(&mut self) {
        // `defaults` is validated on construction and on every edit
        match Scenario::build_scenario(&self.defaults) {
            Ok(scenario) => self.scenario = scenario,
            Err(err) => {
                warn!("reset kept the current scenario: {}", err);
                return;
            }
        }

        self.paused = false;
        self.speed_multiplier = 1.0;
        self.elapsed_steps = 0;
        self.generation += 1;
        info!("simulation reset ({} bodies)", self.scenario.system.bodies.len());
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Step => {
                self.step();
            }
            Command::TogglePause => self.toggle_pause(),
            Command::NudgeSpeed(delta) => self.nudge_speed_additive(delta),
            Command::ScaleSpeed(factor) => self.scale_speed_clamped(factor),
            Command::Reset => self.reset(),
        }
    }

    /// Change the initial state used by the *next* run. The current bodies are
    /// not touched; the edit takes effect on [`reset`](Self::reset).
    pub fn edit_body(&mut self, index: usize, edit: &BodyEdit) -> Result<(), ConfigError> {
        let mut next = self.defaults.clone();
        next.edit_body(index, edit)?;
        next.validate()?;
        self.defaults = next;
        Ok(())
    }

    /// `Σ m_i x_i / Σ m_i`. Masses are validated positive, so this is always defined.
    pub fn center_of_mass(&self) -> NVec2 {
        self.scenario
            .system
            .center_of_mass()
            .unwrap_or_else(NVec2::zeros)
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.scenario.system.momentum()
    }

    pub fn total_energy(&self) -> f64 {
        self.scenario.system.total_energy(self.scenario.parameters.g)
    }

    pub fn state(&self) -> RunState {
        if self.paused {
            RunState::Paused
        } else {
            RunState::Running
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bodies(&self) -> &[Body] {
        &self.scenario.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.scenario.parameters
    }

    pub fn trail_length(&self) -> Option<usize> {
        self.scenario.engine.trail_length
    }

    pub fn defaults(&self) -> &ScenarioConfig {
        &self.defaults
    }

    /// Empty recorder sized for this run, honoring the configured trail length
    pub fn recorder(&self) -> TrajectoryRecorder {
        TrajectoryRecorder::new(self.bodies().len(), self.trail_length())
    }
}
