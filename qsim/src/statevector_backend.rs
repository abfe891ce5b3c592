use crate::StateVector;
use crate::api::{Pauli, SimError, SimulatorApi};
use crate::circuit::{Circuit, Gate};
use num_complex::Complex;
use rand::thread_rng;
use std::collections::HashMap;
use std::f64::consts::FRAC_1_SQRT_2;

// custom type for gate matrices
pub type GateMatrix = [[Complex<f64>; 2]; 2];

pub const IDENTITY: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
];

pub const HADAMARD: GateMatrix = [
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    ],
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    ],
];

pub const PAULI_X: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Y: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Z: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];

pub const S_DAGGER: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
];

fn pauli_matrix(p: Pauli) -> GateMatrix {
    match p {
        Pauli::I => IDENTITY,
        Pauli::X => PAULI_X,
        Pauli::Y => PAULI_Y,
        Pauli::Z => PAULI_Z,
    }
}

pub struct StatevectorSimulator {
    num_qubits: usize,
    state: StateVector,
}

impl StatevectorSimulator {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            state: StateVector::new(num_qubits),
        }
    }

    fn apply_gate(&mut self, g: &Gate) -> Result<(), SimError> {
        self.check_qubits(g)?;
        match *g {
            Gate::I { qubit } => {
                // no-op
                let _ = qubit;
            }
            Gate::H { qubit } => self.state.apply_single_qubit_gate(&HADAMARD, qubit),
            Gate::X { qubit } => self.state.apply_single_qubit_gate(&PAULI_X, qubit),
            Gate::Y { qubit } => self.state.apply_single_qubit_gate(&PAULI_Y, qubit),
            Gate::Z { qubit } => self.state.apply_single_qubit_gate(&PAULI_Z, qubit),
            Gate::Sdg { qubit } => self.state.apply_single_qubit_gate(&S_DAGGER, qubit),

            Gate::RX { qubit, theta } => {
                // Rx(θ) = cos(θ/2) I - i sin(θ/2) X
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                let m = [
                    [Complex::new(ct, 0.0), Complex::new(0.0, -st)],
                    [Complex::new(0.0, -st), Complex::new(ct, 0.0)],
                ];
                self.state.apply_single_qubit_gate(&m, qubit)
            }
            Gate::RY { qubit, theta } => {
                // Ry(θ) = cos(θ/2) I - i sin(θ/2) Y  -> matrix is real
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                let m = [
                    [Complex::new(ct, 0.0), Complex::new(-st, 0.0)],
                    [Complex::new(st, 0.0), Complex::new(ct, 0.0)],
                ];
                self.state.apply_single_qubit_gate(&m, qubit)
            }
            Gate::RZ { qubit, theta } => {
                // Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2})
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                let m = [
                    [Complex::new(ct, -st), Complex::new(0.0, 0.0)],
                    [Complex::new(0.0, 0.0), Complex::new(ct, st)],
                ];
                self.state.apply_single_qubit_gate(&m, qubit)
            }

            Gate::CX { control, target } => self.state.apply_cx(control, target),
        }
        Ok(())
    }

    fn check_qubits(&self, g: &Gate) -> Result<(), SimError> {
        match *g {
            Gate::I { qubit }
            | Gate::H { qubit }
            | Gate::X { qubit }
            | Gate::Y { qubit }
            | Gate::Z { qubit }
            | Gate::Sdg { qubit }
            | Gate::RX { qubit, .. }
            | Gate::RY { qubit, .. }
            | Gate::RZ { qubit, .. } => self.check_qubit(qubit),
            Gate::CX { control, target } => {
                self.check_qubit(control)?;
                self.check_qubit(target)
            }
        }
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), SimError> {
        if qubit >= self.num_qubits {
            return Err(SimError::Qubit(qubit));
        }
        Ok(())
    }
}

impl SimulatorApi for StatevectorSimulator {
    fn reset(&mut self, n: usize) {
        self.num_qubits = n;
        self.state = StateVector::new(n);
    }

    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError> {
        if self.num_qubits != circuit.num_qubits {
            self.reset(circuit.num_qubits);
        } else {
            self.state.reset();
        }
        for g in &circuit.gates {
            self.apply_gate(g)?;
        }
        Ok(())
    }

    fn statevector(&self) -> &StateVector {
        &self.state
    }

    fn expectation(&self, ops: &[(Pauli, usize)]) -> Result<f64, SimError> {
        // Apply P|ψ⟩ on a clone and compute <ψ|φ>.
        let mut phi = self.state.clone();
        for &(p, q) in ops {
            if q >= self.num_qubits {
                return Err(SimError::Qubit(q));
            }
            phi.apply_single_qubit_gate(&pauli_matrix(p), q);
        }

        let mut acc = Complex::new(0.0, 0.0);
        for (a, b) in self.state.amplitudes.iter().zip(phi.amplitudes.iter()) {
            acc += a.conj() * b;
        }
        Ok(acc.re)
    }

    fn sample(&self, shots: u32) -> Result<HashMap<String, u32>, SimError> {
        use rand::distributions::{Distribution, WeightedIndex};
        let probs: Vec<f64> = self.state.amplitudes.iter().map(|a| a.norm_sqr()).collect();
        let dist = WeightedIndex::new(&probs).map_err(|e| SimError::Internal(e.to_string()))?;

        let mut rng = thread_rng();
        let mut counts = HashMap::new();
        let width = self.num_qubits;
        for _ in 0..shots {
            let idx = dist.sample(&mut rng);
            let bitstr = format!("{:0width$b}", idx, width = width);
            *counts.entry(bitstr).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn rx_pi_flips_a_qubit() {
        let mut circ = Circuit::new(1);
        circ.rx(0, std::f64::consts::PI);

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circ).unwrap();

        // Rx(π)|0> = -i|1>; probability of |1> is 1.
        assert!(approx_eq(sim.statevector().probability(1), 1.0, 1e-9));
    }

    #[test]
    fn sdg_then_h_rotates_y_eigenstate_to_zero() {
        // Prepare the +1 Y eigenstate (|0> + i|1>)/√2 via H then S (= Sdg³).
        let mut circ = Circuit::new(1);
        circ.h(0);
        circ.sdg(0);
        circ.sdg(0);
        circ.sdg(0);
        // Y-basis readout rotation.
        circ.sdg(0);
        circ.h(0);

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circ).unwrap();
        assert!(approx_eq(sim.statevector().probability(0), 1.0, 1e-9));
    }

    #[test]
    fn ry_pi_half_gives_plus_state() {
        let mut circ = Circuit::new(1);
        circ.ry(0, std::f64::consts::FRAC_PI_2);

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circ).unwrap();
        assert!(approx_eq(sim.statevector().probability(0), 0.5, 1e-9));
        assert!(approx_eq(sim.statevector().probability(1), 0.5, 1e-9));
    }

    #[test]
    fn pauli_gates_compose_to_identity() {
        // Y·Z·X = iI up to global phase; probabilities are unchanged.
        let mut circ = Circuit::new(1);
        circ.add_gate(Gate::I { qubit: 0 });
        circ.add_gate(Gate::X { qubit: 0 });
        circ.add_gate(Gate::Z { qubit: 0 });
        circ.add_gate(Gate::Y { qubit: 0 });

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circ).unwrap();
        assert!(approx_eq(sim.statevector().probability(0), 1.0, 1e-9));
    }

    #[test]
    fn out_of_range_qubit_is_rejected() {
        let mut circ = Circuit::new(1);
        circ.h(1);

        let mut sim = StatevectorSimulator::new(1);
        assert!(matches!(sim.run(&circ), Err(SimError::Qubit(1))));
    }
}
