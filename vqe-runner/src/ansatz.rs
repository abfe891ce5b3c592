use qsim::Circuit;

pub const NUM_QUBITS: usize = 2;

/// Ansatz rotation angles (RX then RZ on qubit 0), 2π-periodic.
pub type AnsatzParams = [f64; 2];

/// Build the parameterized state-preparation circuit.
///
/// Fixed prefix: H on qubit 0 then CX(0→1), taking |00⟩ to the Bell state.
/// Parameterized suffix: RX(params[0]) followed by RZ(params[1]) in that
/// order, both on qubit 0. Qubit 1 carries no parameterized gate.
pub fn ansatz_circuit(params: AnsatzParams) -> Circuit {
    let mut circuit = Circuit::new(NUM_QUBITS);
    circuit.h(0);
    circuit.cx(0, 1);
    circuit.rx(0, params[0]);
    circuit.rz(0, params[1]);
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim::Pauli;
    use qsim::facade::run_circuit_expectation;
    use std::f64::consts::PI;

    #[test]
    fn bell_state_at_zero_parameters() {
        let circ = ansatz_circuit([0.0, 0.0]);
        let zz = run_circuit_expectation(&circ, &[(Pauli::Z, 0), (Pauli::Z, 1)]).unwrap();
        let xx = run_circuit_expectation(&circ, &[(Pauli::X, 0), (Pauli::X, 1)]).unwrap();
        assert!((zz - 1.0).abs() < 1e-9);
        assert!((xx - 1.0).abs() < 1e-9);
    }

    #[test]
    fn singlet_at_pi_pi() {
        // RX(π) then RZ(π) on one half of the Bell pair produces the
        // singlet (|01⟩ - |10⟩)/√2, which has ⟨XX⟩ = ⟨YY⟩ = ⟨ZZ⟩ = -1.
        let circ = ansatz_circuit([PI, PI]);
        let zz = run_circuit_expectation(&circ, &[(Pauli::Z, 0), (Pauli::Z, 1)]).unwrap();
        let xx = run_circuit_expectation(&circ, &[(Pauli::X, 0), (Pauli::X, 1)]).unwrap();
        let yy = run_circuit_expectation(&circ, &[(Pauli::Y, 0), (Pauli::Y, 1)]).unwrap();
        assert!((zz + 1.0).abs() < 1e-9, "ZZ was {}", zz);
        assert!((xx + 1.0).abs() < 1e-9, "XX was {}", xx);
        assert!((yy + 1.0).abs() < 1e-9, "YY was {}", yy);
    }
}
