//! Force / acceleration contributors for the three-body engine
//!
//! Defines the acceleration trait, the `AccelSet` that sums terms, and
//! direct Newtonian gravity (plus a rayon variant behind `parallel`)

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Acceleration on a body at `xi` due to a body of mass `mj` at `xj`.
/// Coincident positions contribute nothing.
#[inline]
pub fn pull(g: f64, xi: &NVec2, xj: &NVec2, mj: f64) -> NVec2 {
    let r = xj - xi;
    let d = r.norm();
    if d > 0.0 {
        g * mj / (d * d * d) * r
    } else {
        NVec2::zeros()
    }
}

/// Direct Newtonian gravity, unsoftened
/// `a_i = sum_{j != i} G * m_j / |r|^3 * r` with `r = x_j - x_i`
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Unordered pairs (i, j) with i < j. Each body still receives its
        // contributions in ascending j order.
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let d = r.norm();
                if d == 0.0 {
                    // exact coincidence, the pair contributes nothing
                    continue;
                }

                let inv_d3 = 1.0 / (d * d * d);

                out[i] += self.g * bj.m * inv_d3 * r;
                out[j] -= self.g * bi.m * inv_d3 * r;
            }
        }
    }
}

/// Newtonian gravity computed per body on the rayon pool.
/// Every `out[i]` is written before `acceleration` returns.
#[cfg(feature = "parallel")]
pub struct ParallelNewtonianGravity {
    pub g: f64,
}

#[cfg(feature = "parallel")]
impl Acceleration for ParallelNewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        use rayon::prelude::*;

        let bodies = &sys.bodies;
        out.par_iter_mut().enumerate().for_each(|(i, a)| {
            let xi = bodies[i].x;
            for (j, bj) in bodies.iter().enumerate() {
                if i != j {
                    *a += pull(self.g, &xi, &bj.x, bj.m);
                }
            }
        });
    }
}
