/// A single gate operation on one or two qubits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    I { qubit: usize },
    H { qubit: usize },
    X { qubit: usize },
    Y { qubit: usize },
    Z { qubit: usize },
    /// S† phase gate, diag(1, -i). Used for Y-basis readout rotations.
    Sdg { qubit: usize },
    RX { qubit: usize, theta: f64 },
    RY { qubit: usize, theta: f64 },
    RZ { qubit: usize, theta: f64 },
    CX { control: usize, target: usize },
}

/// An ordered gate sequence over a fixed qubit register.
///
/// Readout is not part of the circuit; callers sample the final state
/// through [`crate::api::SimulatorApi::sample`].
#[derive(Debug, Clone)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn h(&mut self, qubit: usize) {
        self.add_gate(Gate::H { qubit });
    }

    pub fn x(&mut self, qubit: usize) {
        self.add_gate(Gate::X { qubit });
    }

    pub fn sdg(&mut self, qubit: usize) {
        self.add_gate(Gate::Sdg { qubit });
    }

    pub fn rx(&mut self, qubit: usize, theta: f64) {
        self.add_gate(Gate::RX { qubit, theta });
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) {
        self.add_gate(Gate::RY { qubit, theta });
    }

    pub fn rz(&mut self, qubit: usize, theta: f64) {
        self.add_gate(Gate::RZ { qubit, theta });
    }

    pub fn cx(&mut self, control: usize, target: usize) {
        self.add_gate(Gate::CX { control, target });
    }
}
