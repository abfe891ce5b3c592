use crate::ansatz::{AnsatzParams, NUM_QUBITS, ansatz_circuit};
use crate::error::VqeError;
use hamiltonian::PauliLabel;
use qsim::{Circuit, Pauli, SimulatorApi};
use std::collections::HashMap;

/// Character position in a backend bitstring holding each qubit's readout.
/// The backend puts qubit 0 in the rightmost character; the reduction
/// formulas below must use the same mapping.
pub const CLBIT_FOR_QUBIT: [usize; 2] = [1, 0];

/// Shot counts as a total function over the four two-bit strings
/// ("00", "01", "10", "11"); bitstrings absent from a sample are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasurementCounts([u32; 4]);

impl MeasurementCounts {
    pub fn from_samples(samples: &HashMap<String, u32>) -> Self {
        let mut counts = [0u32; 4];
        for (bits, &n) in samples {
            if let Ok(index) = usize::from_str_radix(bits, 2) {
                if index < counts.len() {
                    counts[index] += n;
                }
            }
        }
        MeasurementCounts(counts)
    }

    fn count(&self, index: usize) -> f64 {
        self.0[index] as f64
    }

    /// Two-qubit parity expectation: (c00 + c11 - c01 - c10) / shots.
    pub fn parity_expectation(&self, shots: u32) -> f64 {
        (self.count(0b00) + self.count(0b11) - self.count(0b01) - self.count(0b10)) / shots as f64
    }

    /// Single-qubit expectation for `qubit`, marginalizing with the idle
    /// qubit's bit fixed to 0: (c("00") - c(flipped)) / shots.
    pub fn single_qubit_expectation(&self, qubit: usize, shots: u32) -> f64 {
        let flip = 1 << (1 - CLBIT_FOR_QUBIT[qubit]);
        (self.count(0) - self.count(flip)) / shots as f64
    }
}

/// Append the rotation taking `op`'s eigenbasis into the Z readout basis.
pub fn append_basis_rotation(circuit: &mut Circuit, op: Pauli, qubit: usize) {
    match op {
        // Z is measured directly; an identity qubit is read out but its
        // outcome is ignored in the reduction.
        Pauli::I | Pauli::Z => {}
        Pauli::X => circuit.h(qubit),
        Pauli::Y => {
            circuit.sdg(qubit);
            circuit.h(qubit);
        }
    }
}

/// Full measurement circuit for one basis term: ansatz plus per-qubit
/// readout rotations.
pub fn measurement_circuit(params: AnsatzParams, label: PauliLabel) -> Circuit {
    let mut circuit = ansatz_circuit(params);
    for qubit in 0..NUM_QUBITS {
        append_basis_rotation(&mut circuit, label.op(qubit), qubit);
    }
    circuit
}

/// Estimate ⟨label⟩ on the ansatz state at `params` from `shots` samples.
///
/// The result lies in [-1, 1] up to sampling noise; values slightly
/// outside are legitimate and are not clamped.
pub fn estimate<B: SimulatorApi>(
    backend: &mut B,
    params: AnsatzParams,
    label: PauliLabel,
    shots: u32,
) -> Result<f64, VqeError> {
    // ⟨II⟩ = 1 for any normalized state; never sampled.
    if label.is_identity() {
        return Ok(1.0);
    }

    let circuit = measurement_circuit(params, label);
    backend.run(&circuit)?;
    let samples = backend.sample(shots)?;
    let counts = MeasurementCounts::from_samples(&samples);

    Ok(match (label.op(0) == Pauli::I, label.op(1) == Pauli::I) {
        (false, false) => counts.parity_expectation(shots),
        (true, false) => counts.single_qubit_expectation(1, shots),
        (false, true) => counts.single_qubit_expectation(0, shots),
        (true, true) => 1.0, // handled by the identity shortcut above
    })
}
