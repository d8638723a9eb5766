//! Fixed-step time integration schemes
//!
//! Each scheme advances exactly one particle by one timestep. Every force
//! evaluation, including those at intermediate stages, reads the unmodified
//! prior snapshot, so a full step over all particles behaves as one
//! simultaneous update
//!
//! The scheme set is closed and ordered: forward Euler, a historical Euler
//! variant kept for comparison, semi-implicit (symplectic) Euler, explicit
//! midpoint, and classical RK4

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::forces::ForceModel;
use crate::simulation::states::{Particle, SystemState};

/// Integration scheme selector
///
/// The serde names double as the runtime switch names
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    #[serde(rename = "euler_forwards")]
    EulerForward,

    #[serde(rename = "euler_back")] // same update rule as EulerForward, kept for comparison runs
    EulerBack,

    #[serde(rename = "semi_implicit_euler")] // symplectic; best long-run momentum/energy behaviour
    SemiImplicitEuler,

    #[serde(rename = "midpoint")]
    Midpoint,

    #[serde(rename = "rk4")]
    Rk4,
}

/// All schemes in cycle order
pub const SCHEMES: [Scheme; 5] = [
    Scheme::EulerForward,
    Scheme::EulerBack,
    Scheme::SemiImplicitEuler,
    Scheme::Midpoint,
    Scheme::Rk4,
];

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::EulerForward => "euler_forwards",
            Scheme::EulerBack => "euler_back",
            Scheme::SemiImplicitEuler => "semi_implicit_euler",
            Scheme::Midpoint => "midpoint",
            Scheme::Rk4 => "rk4",
        }
    }

    /// Look a scheme up by its switch name
    pub fn from_name(name: &str) -> Option<Scheme> {
        SCHEMES.iter().copied().find(|s| s.name() == name)
    }
}

/// Dispatches the active [`Scheme`] for one particle at a time
///
/// Unknown names passed to [`Integrator::switch`] keep the current scheme
/// and report `false`, matching the force registry policy
#[derive(Debug, Clone)]
pub struct Integrator {
    scheme: Scheme,
}

impl Integrator {
    /// Integrator starting on forward Euler
    pub fn new() -> Self {
        Self {
            scheme: Scheme::EulerForward,
        }
    }

    pub fn with_scheme(scheme: Scheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Select the scheme called `name`; unknown names are a no-op
    pub fn switch(&mut self, name: &str) -> bool {
        match Scheme::from_name(name) {
            Some(scheme) => {
                self.scheme = scheme;
                true
            }
            None => false,
        }
    }

    /// Rotate the active scheme forward by `n`
    pub fn cycle(&mut self, n: usize) {
        let i = SCHEMES.iter().position(|s| *s == self.scheme).unwrap_or(0);
        self.scheme = SCHEMES[(i + n) % SCHEMES.len()];
    }

    /// Advance `state.particles[index]` by one timestep under the active
    /// scheme, returning its next value
    pub fn advance(
        &self,
        state: &SystemState,
        index: usize,
        force: &ForceModel,
        dt: f64,
    ) -> Result<Particle, SimError> {
        match self.scheme {
            Scheme::EulerForward => euler_forwards(state, index, force, dt),
            Scheme::EulerBack => euler_back(state, index, force, dt),
            Scheme::SemiImplicitEuler => semi_implicit_euler(state, index, force, dt),
            Scheme::Midpoint => midpoint(state, index, force, dt),
            Scheme::Rk4 => rk4(state, index, force, dt),
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward Euler: position drifts with the old velocity, then the velocity
/// is kicked by the start-of-step acceleration
fn euler_forwards(
    state: &SystemState,
    index: usize,
    force: &ForceModel,
    dt: f64,
) -> Result<Particle, SimError> {
    let p = state.particle(index)?;
    let position = p.x + p.v * dt;
    let f = force.calculate(p, index, state)?;
    let acceleration = p.acceleration(f)?;
    let velocity = p.v + acceleration * dt;
    Ok(Particle::new(position, velocity, p.m))
}

/// Historical Euler variant: builds a drifted trial particle that is never
/// consulted, then produces exactly the forward Euler result
fn euler_back(
    state: &SystemState,
    index: usize,
    force: &ForceModel,
    dt: f64,
) -> Result<Particle, SimError> {
    let p = state.particle(index)?;
    let position = p.x + p.v * dt;
    let _trial = Particle::new(position, p.v, p.m);
    let f = force.calculate(p, index, state)?;
    let acceleration = p.acceleration(f)?;
    let velocity = p.v + acceleration * dt;
    Ok(Particle::new(position, velocity, p.m))
}

/// Semi-implicit (symplectic) Euler: kick first, then drift with the NEW
/// velocity
fn semi_implicit_euler(
    state: &SystemState,
    index: usize,
    force: &ForceModel,
    dt: f64,
) -> Result<Particle, SimError> {
    let p = state.particle(index)?;
    let f = force.calculate(p, index, state)?;
    let acceleration = p.acceleration(f)?;
    let velocity = p.v + acceleration * dt;
    let position = p.x + velocity * dt;
    Ok(Particle::new(position, velocity, p.m))
}

/// Explicit midpoint: take a half step, re-evaluate the force at the
/// midpoint probe, then advance the original particle a full step with the
/// midpoint acceleration
fn midpoint(
    state: &SystemState,
    index: usize,
    force: &ForceModel,
    dt: f64,
) -> Result<Particle, SimError> {
    let p = state.particle(index)?;
    let f = force.calculate(p, index, state)?;
    let acceleration = p.acceleration(f)?;
    let velocity_mid = p.v + acceleration * (0.5 * dt);
    let position_mid = p.x + velocity_mid * (0.5 * dt);
    let probe = Particle::new(position_mid, velocity_mid, p.m);
    let f_mid = force.calculate(&probe, index, state)?;
    let acceleration_mid = p.acceleration(f_mid)?;
    let velocity = p.v + acceleration_mid * dt;
    let position = p.x + velocity * dt;
    Ok(Particle::new(position, velocity, p.m))
}

/// Classical four-stage Runge-Kutta over the force field
///
/// Two long-standing quirks are kept deliberately: stage velocities are
/// incremented with the raw stage force rather than the acceleration, and
/// the final position drifts with the pre-step velocity instead of a
/// weighted blend of stage velocities
fn rk4(
    state: &SystemState,
    index: usize,
    force: &ForceModel,
    dt: f64,
) -> Result<Particle, SimError> {
    let p = state.particle(index)?;

    let k1 = force.calculate(p, index, state)?;
    let p2 = Particle::new(p.x + 0.5 * dt * p.v, p.v + 0.5 * dt * k1, p.m);
    let k2 = force.calculate(&p2, index, state)?;
    let p3 = Particle::new(p.x + 0.5 * dt * p2.v, p.v + 0.5 * dt * k2, p.m);
    let k3 = force.calculate(&p3, index, state)?;
    let p4 = Particle::new(p.x + dt * p3.v, p.v + dt * k3, p.m);
    let k4 = force.calculate(&p4, index, state)?;

    let averaged = (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
    let acceleration = p.acceleration(averaged)?;
    let velocity = p.v + acceleration * dt;
    let position = p.x + p.v * dt;
    Ok(Particle::new(position, velocity, p.m))
}
