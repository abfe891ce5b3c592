use crate::StateVector;
use crate::circuit::Circuit;
use std::collections::HashMap;

/// A lightweight error enum so callers don't rely on simulator internals.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Invalid qubit index: {0}")]
    Qubit(usize),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Single-qubit Pauli operator label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

/// The backend contract consumed by the estimation pipeline.
pub trait SimulatorApi {
    fn reset(&mut self, num_qubits: usize);
    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError>;
    fn statevector(&self) -> &StateVector;

    /// Non-destructive expectation ⟨ψ|P|ψ⟩ for a Pauli string.
    /// Example: [(Z,0),(X,1)] means Z on q0 ⊗ X on q1, identity elsewhere.
    fn expectation(&self, ops: &[(Pauli, usize)]) -> Result<f64, SimError>;

    /// Sample computational-basis shots without destroying the state.
    /// Keys are bitstrings with qubit 0 in the rightmost character.
    fn sample(&self, shots: u32) -> Result<HashMap<String, u32>, SimError>;
}
