//! Configuration types for loading simulation scenarios from YAML
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`EngineConfig`]     – strategy selection (integrator scheme, force law)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "semi_implicit_euler"   # or euler_forwards, euler_back, midpoint, rk4
//!   force: "n_body"                     # or surface_gravity, core_attraction
//!
//! parameters:
//!   t_end: 2592000.0    # total simulation time, seconds
//!   dt: 1000.0          # fixed step size, seconds
//!   g: 6.6743015e-11    # gravitational constant (optional, measured value if omitted)
//!
//! particles:
//!   - x: [ 1.0e11, 0.0, 0.0 ]
//!     v: [ 0.0, 3.0e4, 0.0 ]
//!     m: 5.97e24
//! ```
//!
//! The scenario builder maps this configuration onto the runtime types

use serde::Deserialize;

use crate::simulation::integrator::Scheme;

/// Strategy selection for a run
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: Scheme, // time integration scheme advancing the particles
    pub force: String, // name of the force law to activate
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub dt: f64, // fixed time step size
    pub g: Option<f64>, // gravitational constant override
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: [f64; 3], // initial position in metres
    pub v: [f64; 3], // initial velocity in metres per second
    pub m: f64, // mass in kilograms, strictly positive
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // strategy selection (integrator, force law)
    pub parameters: ParametersConfig, // numerical parameters
    pub particles: Vec<ParticleConfig>, // initial state of the system
}
