//! Simulation driver
//!
//! [`Simulation`] owns the growing history of snapshots together with the
//! integrator, force model and fixed timestep that produce them. History is
//! append-only: stepping reads the latest state, builds its successor and
//! pushes it, so every stored state stays valid for diagnostics
//!
//! The integrator and force model are owned exclusively by one run; their
//! active selection is mutable, so sharing them across concurrently
//! stepping simulations would leak mode switches between runs

use crate::simulation::error::SimError;
use crate::simulation::forces::ForceModel;
use crate::simulation::integrator::Integrator;
use crate::simulation::states::SystemState;
use crate::simulation::vector::NVec3;

pub struct Simulation {
    states: Vec<SystemState>, // append-only history, states[0] is the initial condition
    integrator: Integrator,
    force: ForceModel,
    dt: f64, // fixed step size shared by every step of the run
}

impl Simulation {
    pub fn new(
        initial: SystemState,
        integrator: Integrator,
        force: ForceModel,
        dt: f64,
    ) -> Self {
        Self {
            states: vec![initial],
            integrator,
            force,
            dt,
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[SystemState] {
        &self.states
    }

    pub fn latest(&self) -> &SystemState {
        // states never empties; constructed with the initial condition
        &self.states[self.states.len() - 1]
    }

    pub fn state(&self, index: usize) -> Result<&SystemState, SimError> {
        self.states.get(index).ok_or(SimError::IndexOutOfRange {
            index,
            len: self.states.len(),
        })
    }

    /// Advance the simulation by `n` steps, appending each new state, and
    /// return the final one
    pub fn step(&mut self, n: usize) -> Result<&SystemState, SimError> {
        for _ in 0..n {
            let next = self
                .latest()
                .step(&self.integrator, &self.force, self.dt)?;
            self.states.push(next);
        }
        Ok(self.latest())
    }

    /// Step until the latest state's time reaches `target_time`
    ///
    /// Rejects a non-positive or non-finite timestep up front, since such a
    /// run would never terminate
    pub fn step_until(&mut self, target_time: f64) -> Result<&SystemState, SimError> {
        if self.dt <= 0.0 || !self.dt.is_finite() {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        while self.latest().t < target_time {
            self.step(1)?;
        }
        Ok(self.latest())
    }

    /// First stored state whose time rounds to cover `t`, using half-step
    /// rounding: the earliest state with `state.t + dt/2 >= t`
    pub fn state_at_time(&self, t: f64) -> Option<&SystemState> {
        self.states.iter().find(|s| s.t + self.dt / 2.0 >= t)
    }

    /// Mean of per-state positional errors against another run
    ///
    /// The two histories must hold the same number of states; each pair of
    /// states must agree on particle count
    pub fn error_against(&self, other: &Simulation) -> Result<f64, SimError> {
        if self.num_states() != other.num_states() {
            return Err(SimError::MismatchedStateCount {
                left: self.num_states(),
                right: other.num_states(),
            });
        }
        let mut error = 0.0;
        for (mine, theirs) in self.states.iter().zip(other.states.iter()) {
            error += mine.error_against(theirs)?;
        }
        Ok(error / self.num_states() as f64)
    }

    /// Simulation times of every stored state
    pub fn times(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.t).collect()
    }

    /// Total momentum of every stored state
    pub fn momenta(&self) -> Vec<NVec3> {
        self.states.iter().map(|s| s.total_momentum()).collect()
    }

    /// Magnitude of the total momentum of every stored state
    pub fn momentum_magnitudes(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.total_momentum().norm()).collect()
    }

    /// Energy of every stored state under the core-attraction model
    pub fn energies(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.energy()).collect()
    }

    /// Switch the active force law by name; unknown names are a no-op
    pub fn switch_force(&mut self, name: &str) -> bool {
        self.force.switch(name)
    }

    /// Switch the active integration scheme by name; unknown names are a
    /// no-op
    pub fn switch_integrator(&mut self, name: &str) -> bool {
        self.integrator.switch(name)
    }
}
