//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – playback options (velocity clamp, speed, trails, parallel forces)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   max_speed: 8.0          # optional, per-component velocity clamp
//!   speed_multiplier: 1.0   # optional, initial playback rate
//!   trail_length: 100       # optional, points kept per trail
//!   parallel: false         # optional, rayon force term (feature `parallel`)
//!
//! parameters:
//!   dt: 0.01                # fixed step size
//!   G: 1.0                  # gravitational constant
//!   num_steps: 1000         # steps for a headless run
//!
//! bodies:
//!   - x: [ -1.0, 0.0 ]
//!     v: [  0.0, -1.5 ]
//!     m: 0.4
//!     color: [ 255, 0, 0 ]
//!   - x: [  1.0, 0.0 ]
//!     v: [  0.0, 1.0 ]
//!     m: 1.9
//! ```
//!
//! The engine validates this configuration and maps it into its runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::configuration::error::ConfigError;
use crate::simulation::states::BodyColor;

fn default_speed_multiplier() -> f64 {
    1.0
}

fn default_dt() -> f64 {
    0.01
}

fn default_g() -> f64 {
    1.0
}

fn default_num_steps() -> usize {
    1000
}

/// Playback options that shape how a run is driven, not the physics itself
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub max_speed: Option<f64>, // clamp each velocity component to [-max_speed, max_speed]
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f64, // initial playback rate
    #[serde(default)]
    pub trail_length: Option<usize>, // None keeps every point
    #[serde(default)]
    pub parallel: bool, // `true` - rayon force term when built with `parallel`
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_speed: None,
            speed_multiplier: default_speed_multiplier(),
            trail_length: None,
            parallel: false,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // time step size
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_num_steps")]
    pub num_steps: usize, // headless run length
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            g: default_g(),
            num_steps: default_num_steps(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
    #[serde(default)]
    pub color: BodyColor, // Display tag, ignored by physics
}

impl BodyConfig {
    pub fn new(m: f64, x: [f64; 2], v: [f64; 2], color: BodyColor) -> Self {
        Self {
            x: x.to_vec(),
            v: v.to_vec(),
            m,
            color,
        }
    }
}

/// Pending change to one body's initial state; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyEdit {
    pub m: Option<f64>,
    pub x: Option<[f64; 2]>,
    pub v: Option<[f64; 2]>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Playback configuration
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Three unit masses: two counter-moving outer bodies and one drifting in the middle
    pub fn classic() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig::new(1.0, [-1.0, 0.0], [0.0, -1.0], BodyColor::WHITE),
                BodyConfig::new(1.0, [1.0, 0.0], [0.0, 1.0], BodyColor::WHITE),
                BodyConfig::new(1.0, [0.0, 0.0], [1.0, 0.0], BodyColor::WHITE),
            ],
        }
    }

    /// Unequal masses tagged red, green and blue, with 100-point trails
    pub fn colored() -> Self {
        Self {
            engine: EngineConfig {
                trail_length: Some(100),
                ..EngineConfig::default()
            },
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig::new(0.4, [-1.0, 0.0], [0.0, -1.5], BodyColor::RED),
                BodyConfig::new(1.9, [1.0, 0.0], [0.0, 1.0], BodyColor::GREEN),
                BodyConfig::new(2.0, [0.0, 0.0], [1.0, 0.0], BodyColor::BLUE),
            ],
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reject configurations that must never be simulated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let p = &self.parameters;
        finite("dt", p.dt)?;
        if p.dt <= 0.0 {
            return Err(ConfigError::NonPositiveStep(p.dt));
        }
        finite("G", p.g)?;

        let e = &self.engine;
        if let Some(max_speed) = e.max_speed {
            finite("max_speed", max_speed)?;
            if max_speed <= 0.0 {
                return Err(ConfigError::NonPositiveMaxSpeed(max_speed));
            }
        }
        finite("speed_multiplier", e.speed_multiplier)?;
        if e.speed_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveSpeedMultiplier(e.speed_multiplier));
        }

        for (index, b) in self.bodies.iter().enumerate() {
            for (field, values) in [("x", &b.x), ("v", &b.v)] {
                if values.len() != 2 {
                    return Err(ConfigError::BadVectorLength { index, field, len: values.len() });
                }
                for value in values {
                    finite(&format!("body {} `{}`", index, field), *value)?;
                }
            }
            finite(&format!("body {} mass", index), b.m)?;
            if b.m <= 0.0 {
                return Err(ConfigError::NonPositiveMass { index, mass: b.m });
            }
        }

        Ok(())
    }

    /// Apply an edit to body `index`. Only the initial state changes; a running
    /// simulation picks it up on its next reset.
    pub fn edit_body(&mut self, index: usize, edit: &BodyEdit) -> Result<(), ConfigError> {
        let len = self.bodies.len();
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(ConfigError::BodyIndexOutOfRange { index, len })?;

        if let Some(m) = edit.m {
            finite(&format!("body {} mass", index), m)?;
            if m <= 0.0 {
                return Err(ConfigError::NonPositiveMass { index, mass: m });
            }
            body.m = m;
        }
        if let Some(x) = edit.x {
            for c in x {
                finite(&format!("body {} `x`", index), c)?;
            }
            body.x = x.to_vec();
        }
        if let Some(v) = edit.v {
            for c in v {
                finite(&format!("body {} `v`", index), c)?;
            }
            body.v = v.to_vec();
        }

        Ok(())
    }
}

/// Parse a command-line body edit of the form `I:m,x,y,vx,vy`.
/// All five fields must be present; an empty field keeps the current value,
/// but `x,y` and `vx,vy` are set as pairs. `1:2.5,,,,` only changes the mass.
pub fn parse_body_edit(s: &str) -> Result<(usize, BodyEdit), ConfigError> {
    let bad = |why: &str| ConfigError::BadBodyEdit(format!("`{}`: {}", s, why));

    let (index, fields) = s.split_once(':').ok_or_else(|| bad("expected I:m,x,y,vx,vy"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| bad("body index is not a non-negative integer"))?;

    let values = fields
        .split(',')
        .map(|f| match f.trim() {
            "" => Ok(None),
            f => f.parse::<f64>().map(Some).map_err(|_| bad("field is not a number")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != 5 {
        return Err(bad("expected exactly 5 fields"));
    }

    let pair = |a: Option<f64>, b: Option<f64>, name: &str| match (a, b) {
        (Some(a), Some(b)) => Ok(Some([a, b])),
        (None, None) => Ok(None),
        _ => Err(bad(&format!("`{}` needs both components or neither", name))),
    };

    let edit = BodyEdit {
        m: values[0],
        x: pair(values[1], values[2], "x")?,
        v: pair(values[3], values[4], "v")?,
    };
    Ok((index, edit))
}

fn finite(what: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { what: what.to_string() })
    }
}
