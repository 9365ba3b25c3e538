use std::time::Instant;

use crate::simulation::states::{Body, BodyColor, System, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;

/// Helper to build a manual System of size `n`
/// deterministic positions, no rand needed
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            Body {
                x: NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0),
                v: NVec2::zeros(),
                m: 1.0,
                color: BodyColor::WHITE,
            }
        })
        .collect();

    System { bodies, t: 0.0 }
}

fn time_term<A: Acceleration>(term: &A, sys: &System, out: &mut [NVec2]) -> f64 {
    // Warm up
    term.acceleration(sys, out);

    let t0 = Instant::now();
    term.acceleration(sys, out);
    t0.elapsed().as_secs_f64()
}

/// Time one acceleration evaluation, direct vs rayon, for growing `n`
pub fn bench_gravity() {
    let ns = [3, 50, 200, 800, 3200];
    let g = 1.0;

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let dt_direct = time_term(&NewtonianGravity { g }, &sys, &mut out);

        #[cfg(feature = "parallel")]
        {
            let par = crate::simulation::forces::ParallelNewtonianGravity { g };
            let dt_par = time_term(&par, &sys, &mut out);
            println!("N = {n:5}, direct = {:8.6} s, parallel = {:8.6} s", dt_direct, dt_par);
        }
        #[cfg(not(feature = "parallel"))]
        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

/// Milliseconds per full integrator step for `n` in steps of 100
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let params = Parameters::default();
    let forces = AccelSet::new().with(NewtonianGravity { g: params.g });

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut sys = make_system(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &params, 1.0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
