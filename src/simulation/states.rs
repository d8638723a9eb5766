//! Core state types for the N-body simulation
//!
//! Defines the particle and snapshot structs:
//! - `Particle` is a point mass with position, velocity and mass
//! - `SystemState` is an immutable snapshot of all particles at one time
//!
//! A stepped particle is always a new value; the particle index inside a
//! state is the only identity that survives across timesteps, so every
//! state of one run must keep the same count and ordering

use crate::simulation::error::SimError;
use crate::simulation::forces::ForceModel;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::{EARTH_MASS, EARTH_RADIUS, G};
use crate::simulation::vector::{checked_div, distance, NVec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, must be strictly positive
}

impl Particle {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Momentum `m * v`
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// Acceleration produced by `force` acting on this particle
    ///
    /// Fails with [`SimError::DivisionByZero`] when the mass is zero or
    /// negative; positive mass is a precondition of every force law
    pub fn acceleration(&self, force: NVec3) -> Result<NVec3, SimError> {
        if self.m <= 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(force / self.m)
    }

    /// Kinetic plus potential energy of this particle orbiting a fixed
    /// Earth-mass body, the same model as the core-attraction force law
    ///
    /// The potential term is `(G m M / R^3) |x|^2`, without the harmonic
    /// 1/2 factor
    pub fn energy(&self) -> f64 {
        let kinetic = 0.5 * self.m * self.v.norm_squared();
        let k = G * self.m * EARTH_MASS / (EARTH_RADIUS * EARTH_RADIUS * EARTH_RADIUS);
        let potential = k * self.x.norm_squared();
        kinetic + potential
    }
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub particles: Vec<Particle>, // index-stable collection of particles
    pub t: f64, // simulation time of this snapshot
}

impl SystemState {
    pub fn new(particles: Vec<Particle>, t: f64) -> Self {
        Self { particles, t }
    }

    /// Append a particle; only used while assembling a state
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove and return the particle at `index`
    pub fn remove(&mut self, index: usize) -> Result<Particle, SimError> {
        if index >= self.particles.len() {
            return Err(SimError::IndexOutOfRange {
                index,
                len: self.particles.len(),
            });
        }
        Ok(self.particles.remove(index))
    }

    pub fn particle(&self, index: usize) -> Result<&Particle, SimError> {
        self.particles.get(index).ok_or(SimError::IndexOutOfRange {
            index,
            len: self.particles.len(),
        })
    }

    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Advance every particle by one timestep off this snapshot
    ///
    /// Each particle's update reads forces from `self`, never from the
    /// partially-built next state, so the whole step is equivalent to a
    /// simultaneous update of all particles
    pub fn step(
        &self,
        integrator: &Integrator,
        force: &ForceModel,
        dt: f64,
    ) -> Result<SystemState, SimError> {
        let mut next = SystemState::new(Vec::with_capacity(self.particles.len()), self.t + dt);
        for i in 0..self.particles.len() {
            let particle = integrator.advance(self, i, force, dt)?;
            next.push(particle);
        }
        Ok(next)
    }

    /// Total momentum of the state
    pub fn total_momentum(&self) -> NVec3 {
        self.particles
            .iter()
            .fold(NVec3::zeros(), |acc, p| acc + p.momentum())
    }

    /// Mass-weighted mean position; fails when the total mass is zero
    pub fn centre_of_mass(&self) -> Result<NVec3, SimError> {
        let mut centre = NVec3::zeros();
        let mut total_mass = 0.0;
        for p in &self.particles {
            centre += p.x * p.m;
            total_mass += p.m;
        }
        checked_div(centre, total_mass)
    }

    /// Energy of the state under the core-attraction model
    ///
    /// Known quirk: each iteration overwrites the running value, so only
    /// the last particle's energy is reported
    pub fn energy(&self) -> f64 {
        let mut total_energy = 0.0;
        for p in &self.particles {
            total_energy = p.energy();
        }
        total_energy
    }

    /// Mean positional distance between index-aligned particles of two
    /// states; the counts must match
    pub fn error_against(&self, other: &SystemState) -> Result<f64, SimError> {
        if self.num_particles() != other.num_particles() {
            return Err(SimError::MismatchedParticleCount {
                left: self.num_particles(),
                right: other.num_particles(),
            });
        }
        if self.particles.is_empty() {
            return Err(SimError::DivisionByZero);
        }
        let mut error = 0.0;
        for (p, q) in self.particles.iter().zip(other.particles.iter()) {
            error += distance(p.x, q.x);
        }
        Ok(error / self.num_particles() as f64)
    }
}
