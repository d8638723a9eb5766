//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings of a run:
//! - fixed integration step size and end time,
//! - the gravitational constant `G`
//!
//! Physical constants shared by the built-in force laws live here too

/// Measured gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.674_301_5e-11;

/// Mass of the Earth, kg
pub const EARTH_MASS: f64 = 5.97219e24;

/// Mean equatorial radius of the Earth, m
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Gravitational field strength at the Earth's surface, m s^-2
pub const SURFACE_G: f64 = 9.81;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // fixed step size
    pub g: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 1.0,
            dt: 0.01,
            g: G,
        }
    }
}
