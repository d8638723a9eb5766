pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::NVec3;
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::states::{Particle, SystemState};
pub use simulation::forces::{CoreAttraction, ForceLaw, ForceModel, NBodyGravity, SurfaceGravity};
pub use simulation::integrator::{Integrator, Scheme, SCHEMES};
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ParticleConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_integrators, bench_timestep};
