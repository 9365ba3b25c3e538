//! Fixed-step time integrator for the three-body system
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked first, then
//! positions drift using the *new* velocities. Driven by `AccelSet` and
//! `Parameters`, with a user-controlled playback `speed_multiplier` applied
//! on top of the physical step `dt`.

use log::debug;

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Clamp each velocity component independently to `[-max_speed, max_speed]`.
/// This bounds `|vx|` and `|vy|`, not the norm of `v`.
/// Returns `true` when any component was clipped.
#[inline]
pub fn clamp_velocity(v: &mut NVec2, max_speed: f64) -> bool {
    let mut clipped = false;
    for c in v.iter_mut() {
        let bounded = (*c).clamp(-max_speed, max_speed);
        if bounded != *c {
            clipped = true;
            *c = bounded;
        }
    }
    clipped
}

/// Advance the system by one step using precomputed accelerations
/// - `v_n+1 = v_n + a_n * dt * s` (then optional clamp)
/// - `x_n+1 = x_n + v_n+1 * dt * s`
/// - `t += dt * s`
///
/// Panics unless `accels` holds exactly one entry per body.
pub fn semi_implicit_euler(sys: &mut System, accels: &[NVec2], params: &Parameters, speed_multiplier: f64) {
    assert_eq!(
        sys.bodies.len(),
        accels.len(),
        "one acceleration per body is required"
    );

    let dt = params.dt;

    for (i, (b, a)) in sys.bodies.iter_mut().zip(accels.iter()).enumerate() {
        // Kick
        b.v += *a * dt * speed_multiplier;

        if let Some(max_speed) = params.max_speed {
            if clamp_velocity(&mut b.v, max_speed) {
                debug!("body {i}: velocity clamped to +/-{max_speed}");
            }
        }

        // Drift with the updated velocity
        b.x += b.v * dt * speed_multiplier;
    }

    sys.t += dt * speed_multiplier;
}

/// Advance the system by one step: accelerations for every body are
/// computed into a full buffer before any body is updated
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters, speed_multiplier: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accels);

    semi_implicit_euler(sys, &accels, params, speed_multiplier);
}
