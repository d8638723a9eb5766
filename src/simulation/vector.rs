//! Vector primitive used throughout the simulation
//!
//! Positions, velocities, forces and momenta are all `NVec3`, an alias for
//! `nalgebra::Vector3<f64>`. All arithmetic goes through nalgebra; the only
//! extra surface here is a fallible divide, since a zero divisor is a caller
//! error rather than an infinity we want propagating through a run

use nalgebra::Vector3;

use crate::simulation::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Divide a vector by a scalar, rejecting a zero divisor
pub fn checked_div(v: NVec3, k: f64) -> Result<NVec3, SimError> {
    if k == 0.0 {
        return Err(SimError::DivisionByZero);
    }
    Ok(v * (1.0 / k))
}

/// Euclidean distance between two points
pub fn distance(a: NVec3, b: NVec3) -> f64 {
    (a - b).norm()
}
