//! Comparison harnesses for the integration schemes
//!
//! Two console-table benchmarks, both driven off the same deterministic
//! two-body orbit so runs are comparable:
//! - `bench_integrators` runs every scheme at a coarse step against a fine
//!   semi-implicit reference and reports wall time and positional error
//! - `bench_timestep` sweeps the step size for one scheme and reports how
//!   the error grows with dt

use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceModel, NBodyGravity};
use crate::simulation::integrator::{Integrator, Scheme, SCHEMES};
use crate::simulation::states::{Particle, SystemState};
use crate::simulation::vector::NVec3;

// Benchmark units: G = 1, unit masses, unit separation
const BENCH_G: f64 = 1.0;

/// Two unit masses on a symmetric circular mutual orbit in the xy plane
fn orbit_pair() -> SystemState {
    // circular speed for each body about the common centre: v^2 = G m / (2 d)
    let speed = (BENCH_G * 1.0 / 2.0).sqrt();
    let a = Particle::new(
        NVec3::new(-0.5, 0.0, 0.0),
        NVec3::new(0.0, -speed, 0.0),
        1.0,
    );
    let b = Particle::new(NVec3::new(0.5, 0.0, 0.0), NVec3::new(0.0, speed, 0.0), 1.0);
    SystemState::new(vec![a, b], 0.0)
}

fn gravity() -> ForceModel {
    ForceModel::with_law(NBodyGravity { g: BENCH_G })
}

/// Fine-step semi-implicit run used as the reference trajectory
fn reference_run(t_end: f64) -> Result<Simulation, SimError> {
    let mut reference = Simulation::new(
        orbit_pair(),
        Integrator::with_scheme(Scheme::SemiImplicitEuler),
        gravity(),
        1.0e-3,
    );
    reference.step_until(t_end)?;
    Ok(reference)
}

/// Compare every scheme at a coarse step against the reference trajectory
pub fn bench_integrators() -> Result<(), SimError> {
    let t_end = 10.0;
    let dt = 0.05;

    let reference = reference_run(t_end)?;
    let reference_final = reference.latest();

    println!("integrator comparison, dt = {dt}, t_end = {t_end}");
    for scheme in SCHEMES {
        let mut run = Simulation::new(
            orbit_pair(),
            Integrator::with_scheme(scheme),
            gravity(),
            dt,
        );

        let t0 = Instant::now();
        run.step_until(t_end)?;
        let elapsed = t0.elapsed().as_secs_f64();

        let error = run.latest().error_against(reference_final)?;
        println!(
            "{:20} time = {:8.6} s, error = {:e}",
            scheme.name(),
            elapsed,
            error
        );
    }
    Ok(())
}

/// Sweep the step size for one scheme and report error growth
pub fn bench_timestep() -> Result<(), SimError> {
    let t_end = 10.0;
    let dts = [0.2, 0.1, 0.05, 0.025, 0.0125, 0.00625];

    let reference = reference_run(t_end)?;
    let reference_final = reference.latest();

    println!("timestep sweep, semi_implicit_euler, t_end = {t_end}");
    for dt in dts {
        let mut run = Simulation::new(
            orbit_pair(),
            Integrator::with_scheme(Scheme::SemiImplicitEuler),
            gravity(),
            dt,
        );
        run.step_until(t_end)?;
        let error = run.latest().error_against(reference_final)?;
        println!("dt = {dt:8}, error = {error:e}");
    }
    Ok(())
}
