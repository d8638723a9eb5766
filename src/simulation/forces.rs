//! Force laws for the N-body engine
//!
//! Each law implements [`ForceLaw`] and computes the net instantaneous
//! force on one particle given the full system snapshot. [`ForceModel`]
//! keeps a registry of named laws with one active at a time; the active
//! law is what [`ForceModel::calculate`] dispatches to
//!
//! A particle is identified inside the state by its index: the n-body law
//! skips the acting index rather than comparing particle values, so probe
//! particles built by multi-stage integrators are still excluded from
//! their own field

use crate::simulation::error::SimError;
use crate::simulation::params::{EARTH_MASS, EARTH_RADIUS, G, SURFACE_G};
use crate::simulation::states::{Particle, SystemState};
use crate::simulation::vector::NVec3;

/// Trait for force laws acting on a single particle of a [`SystemState`]
///
/// `particle` is the particle the force acts on and `index` its position
/// in `state`. For intermediate integration stages `particle` may differ
/// from `state.particles[index]`, but it always carries that identity
pub trait ForceLaw {
    fn name(&self) -> &str;

    fn force(
        &self,
        particle: &Particle,
        index: usize,
        state: &SystemState,
    ) -> Result<NVec3, SimError>;
}

/// Uniform gravity near a planetary surface: constant downward pull,
/// independent of the rest of the system
pub struct SurfaceGravity {
    pub g: f64, // field strength, m s^-2
}

impl Default for SurfaceGravity {
    fn default() -> Self {
        Self { g: SURFACE_G }
    }
}

impl ForceLaw for SurfaceGravity {
    fn name(&self) -> &str {
        "surface_gravity"
    }

    fn force(
        &self,
        _particle: &Particle,
        _index: usize,
        _state: &SystemState,
    ) -> Result<NVec3, SimError> {
        Ok(NVec3::new(0.0, -self.g, 0.0))
    }
}

/// Direct pairwise Newtonian gravitation, O(n) per particle
pub struct NBodyGravity {
    pub g: f64, // gravitational constant
}

impl Default for NBodyGravity {
    fn default() -> Self {
        Self { g: G }
    }
}

impl ForceLaw for NBodyGravity {
    fn name(&self) -> &str {
        "n_body"
    }

    fn force(
        &self,
        particle: &Particle,
        index: usize,
        state: &SystemState,
    ) -> Result<NVec3, SimError> {
        let mut total = NVec3::zeros();
        for (j, other) in state.particles.iter().enumerate() {
            if j == index {
                continue;
            }
            // r points from the acting particle toward the attractor
            let r = other.x - particle.x;
            // |r|^3, written as norm * norm^2 to reuse the squared norm
            let denominator = r.norm() * r.norm_squared();
            // coincident pair contributes nothing rather than a singularity
            if denominator == 0.0 {
                continue;
            }
            let numerator = self.g * other.m * particle.m;
            total += (numerator / denominator) * r;
        }
        Ok(total)
    }
}

/// Attraction toward a fixed massive body centred at the origin
///
/// Inside a uniform sphere of mass `central_mass` and radius `radius` the
/// pull is linear in displacement: `F = -(G m M / R^3) x`. Used for
/// falling-through-the-planet scenarios; ignores the rest of the state
pub struct CoreAttraction {
    pub g: f64, // gravitational constant
    pub central_mass: f64, // mass of the central body
    pub radius: f64, // radius of the central body
}

impl Default for CoreAttraction {
    fn default() -> Self {
        Self {
            g: G,
            central_mass: EARTH_MASS,
            radius: EARTH_RADIUS,
        }
    }
}

impl ForceLaw for CoreAttraction {
    fn name(&self) -> &str {
        "core_attraction"
    }

    fn force(
        &self,
        particle: &Particle,
        _index: usize,
        _state: &SystemState,
    ) -> Result<NVec3, SimError> {
        let numerator = self.g * particle.m * self.central_mass;
        let denominator = self.radius * self.radius * self.radius;
        Ok((-numerator / denominator) * particle.x)
    }
}

/// Registry of named force laws with a single active selection
///
/// Selection is by name via [`ForceModel::switch`]; an unknown name keeps
/// the current selection and reports `false` instead of failing. New laws
/// can be registered at runtime and selected like the built-ins
pub struct ForceModel {
    laws: Vec<Box<dyn ForceLaw + Send + Sync>>,
    active: usize,
}

impl ForceModel {
    /// Registry with the three built-in laws; surface gravity starts active
    pub fn new() -> Self {
        Self {
            laws: vec![
                Box::new(SurfaceGravity::default()),
                Box::new(NBodyGravity::default()),
                Box::new(CoreAttraction::default()),
            ],
            active: 0,
        }
    }

    /// Registry containing only `law`, active
    pub fn with_law<T>(law: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        Self {
            laws: vec![Box::new(law)],
            active: 0,
        }
    }

    /// Append a law to the registry without changing the active selection
    pub fn register<T>(&mut self, law: T)
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.laws.push(Box::new(law));
    }

    /// Select the law called `name`; on an unknown name the current
    /// selection is kept and `false` is returned
    pub fn switch(&mut self, name: &str) -> bool {
        match self.laws.iter().position(|law| law.name() == name) {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }

    /// Rotate the active selection forward by `n` laws
    pub fn cycle(&mut self, n: usize) {
        self.active = (self.active + n) % self.laws.len();
    }

    /// Name of the active law
    pub fn active_name(&self) -> &str {
        self.laws[self.active].name()
    }

    /// Net force of the active law on `state.particles[index]`, or on a
    /// probe `particle` carrying that index
    pub fn calculate(
        &self,
        particle: &Particle,
        index: usize,
        state: &SystemState,
    ) -> Result<NVec3, SimError> {
        self.laws[self.active].force(particle, index, state)
    }
}

impl Default for ForceModel {
    fn default() -> Self {
        Self::new()
    }
}
