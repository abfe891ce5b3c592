pub mod api;
pub mod circuit;
pub mod facade;
pub mod state;
pub mod statevector_backend;

// Re-export key components for easier access from other crates.
pub use api::{Pauli, SimError, SimulatorApi};
pub use circuit::{Circuit, Gate};
pub use state::StateVector;
pub use statevector_backend::{
    GateMatrix, HADAMARD, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, S_DAGGER, StatevectorSimulator,
};
