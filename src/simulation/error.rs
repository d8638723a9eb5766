//! Error type for the simulation core
//!
//! Everything here is local and synchronous: an error is returned straight
//! to the caller of the offending operation, never retried or deferred.
//! Switching a force law or integrator by an unknown name is deliberately
//! NOT an error; the active selection is kept and the switch reports `false`

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("division by zero (zero divisor or nonpositive mass)")]
    DivisionByZero,

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("mismatched particle counts: {left} vs {right}")]
    MismatchedParticleCount { left: usize, right: usize },

    #[error("mismatched state counts: {left} vs {right}")]
    MismatchedStateCount { left: usize, right: usize },

    #[error("invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),
}
