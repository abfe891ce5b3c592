use crate::api::{Pauli, SimError, SimulatorApi};
use crate::circuit::Circuit;
use crate::statevector_backend::StatevectorSimulator;
use std::collections::HashMap;

/// One-call backend contract: execute `circuit` and sample `shots` readouts.
pub fn run_circuit_counts(circuit: &Circuit, shots: u32) -> Result<HashMap<String, u32>, SimError> {
    let mut sim = StatevectorSimulator::new(circuit.num_qubits);
    sim.run(circuit)?;
    sim.sample(shots)
}

/// Execute `circuit` and return the exact expectation of a Pauli string.
pub fn run_circuit_expectation(circuit: &Circuit, ops: &[(Pauli, usize)]) -> Result<f64, SimError> {
    let mut sim = StatevectorSimulator::new(circuit.num_qubits);
    sim.run(circuit)?;
    sim.expectation(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_for_a_flipped_qubit_are_deterministic() {
        let mut circ = Circuit::new(2);
        circ.x(1);

        let counts = run_circuit_counts(&circ, 100).unwrap();
        assert_eq!(counts.get("10"), Some(&100));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn expectation_of_z_after_x_is_minus_one() {
        let mut circ = Circuit::new(1);
        circ.x(0);

        let e = run_circuit_expectation(&circ, &[(Pauli::Z, 0)]).unwrap();
        assert!((e + 1.0).abs() < 1e-9);
    }
}
