pub mod vector;
pub mod error;
pub mod params;
pub mod states;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
