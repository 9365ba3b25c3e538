//! Core state types for the three-body simulation.
//!
//! - `Body`  a point mass using `NVec2`
//! - `System` the ordered body set plus the simulated time `t`
//!
//! Body order is stable for the lifetime of a run, so an index identifies the
//! same body from the first step to the last.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub type NVec2 = Vector2<f64>;

/// Opaque RGB tag carried for the presentation layer. Physics never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyColor(pub u8, pub u8, pub u8);

impl BodyColor {
    pub const WHITE: BodyColor = BodyColor(255, 255, 255);
    pub const RED: BodyColor = BodyColor(255, 0, 0);
    pub const GREEN: BodyColor = BodyColor(0, 255, 0);
    pub const BLUE: BodyColor = BodyColor(0, 0, 255);

    /// Lighter variant used for trails, each channel raised by `amount` and saturated at 255
    pub fn brightened(self, amount: u8) -> BodyColor {
        BodyColor(
            self.0.saturating_add(amount),
            self.1.saturating_add(amount),
            self.2.saturating_add(amount),
        )
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        BodyColor::WHITE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub color: BodyColor, // tag
}

impl Body {
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
    pub t: f64, // simulated time
}

impl System {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position, `None` when the total mass is not positive
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.m * b.x);
        Some(weighted / total)
    }

    /// Total linear momentum `Σ m v`
    pub fn momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.m * b.v)
    }

    /// Kinetic plus pairwise potential energy. Coincident pairs are skipped,
    /// matching the zero-force guard in the gravity term.
    pub fn total_energy(&self, g: f64) -> f64 {
        let kinetic: f64 = self
            .bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let d = (bj.x - bi.x).norm();
                if d > 0.0 {
                    potential -= g * bi.m * bj.m / d;
                }
            }
        }

        kinetic + potential
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
