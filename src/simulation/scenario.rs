//! Build fully-initialized simulation runs from configuration
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - a [`Simulation`] holding the initial state at t = 0, the selected
//!   integration scheme and the selected force law
//!
//! The configuration is the initial-condition provider for the core: it is
//! trusted to supply positive masses and well-formed vectors

use log::warn;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{CoreAttraction, ForceModel, NBodyGravity, SurfaceGravity};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::{Parameters, G};
use crate::simulation::states::{Particle, SystemState};
use crate::simulation::vector::NVec3;

/// A fully-initialized run: parameters plus the simulation they configure
pub struct Scenario {
    pub parameters: Parameters,
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Particles: map `ParticleConfig` -> runtime `Particle`
        let particles: Vec<Particle> = cfg
            .particles
            .iter()
            .map(|pc: &ParticleConfig| {
                Particle::new(
                    NVec3::new(pc.x[0], pc.x[1], pc.x[2]),
                    NVec3::new(pc.v[0], pc.v[1], pc.v[2]),
                    pc.m,
                )
            })
            .collect();

        // Initial system state: particles at t = 0
        let initial = SystemState::new(particles, 0.0);

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            dt: cfg.parameters.dt,
            g: cfg.parameters.g.unwrap_or(G),
        };

        // Force registry with the scenario's gravitational constant
        let mut force = ForceModel::with_law(SurfaceGravity::default());
        force.register(NBodyGravity { g: parameters.g });
        force.register(CoreAttraction {
            g: parameters.g,
            ..Default::default()
        });
        if !force.switch(&cfg.engine.force) {
            warn!(
                "unknown force law '{}', keeping '{}'",
                cfg.engine.force,
                force.active_name()
            );
        }

        let integrator = Integrator::with_scheme(cfg.engine.integrator);

        let simulation = Simulation::new(initial, integrator, force, parameters.dt);

        Self {
            parameters,
            simulation,
        }
    }
}
