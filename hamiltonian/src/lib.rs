//! Two-qubit Pauli-basis data model and matrix decomposition.
//!
//! A Hamiltonian is a sum of weighted two-qubit Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is one of the 16 tensor products of the single-qubit
//! operators I, X, Y, Z and c_k ∈ ℝ. Since those 16 matrices are linearly
//! independent, any 4×4 Hermitian matrix decomposes uniquely with real
//! coefficients; [`decompose::decompose`] recovers them.

pub mod decompose;
pub mod spectrum;

pub use decompose::{DecompositionError, decompose};
pub use spectrum::ground_state_energy;

use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;
use qsim::{GateMatrix, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, Pauli};
use std::fmt;
use std::str::FromStr;

fn pauli_matrix(p: Pauli) -> Matrix2<Complex64> {
    let m: GateMatrix = match p {
        Pauli::I => IDENTITY,
        Pauli::X => PAULI_X,
        Pauli::Y => PAULI_Y,
        Pauli::Z => PAULI_Z,
    };
    Matrix2::new(m[0][0], m[0][1], m[1][0], m[1][1])
}

const PAULIS: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

/// A two-character Pauli string, e.g. "XY".
///
/// Character 0 names qubit 0's operator, character 1 names qubit 1's.
/// Qubit 0 is the least-significant statevector bit, so the 4×4 form of
/// "AB" is op(B) ⊗ op(A). The measurement reduction in the runner relies
/// on the same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PauliLabel([Pauli; 2]);

impl PauliLabel {
    pub fn new(q0: Pauli, q1: Pauli) -> Self {
        PauliLabel([q0, q1])
    }

    /// The operator acting on the given qubit.
    pub fn op(&self, qubit: usize) -> Pauli {
        self.0[qubit]
    }

    pub fn is_identity(&self) -> bool {
        self.0 == [Pauli::I, Pauli::I]
    }

    /// All 16 labels in canonical order: qubit 0's operator varies slowest
    /// (II, IX, IY, IZ, XI, ... ZZ).
    pub fn all() -> impl Iterator<Item = PauliLabel> {
        PAULIS
            .into_iter()
            .flat_map(|a| PAULIS.into_iter().map(move |b| PauliLabel([a, b])))
    }

    /// The dense 4×4 form of this label: op(qubit 1) ⊗ op(qubit 0).
    pub fn matrix(&self) -> Matrix4<Complex64> {
        pauli_matrix(self.0[1]).kronecker(&pauli_matrix(self.0[0]))
    }
}

impl fmt::Display for PauliLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.0 {
            write!(f, "{:?}", p)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid Pauli label (expected two characters from {{I, X, Y, Z}})")]
pub struct PauliLabelParseError;

impl FromStr for PauliLabel {
    type Err = PauliLabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ops = [Pauli::I; 2];
        let mut chars = s.chars();
        for op in &mut ops {
            *op = match chars.next() {
                Some('I') | Some('i') => Pauli::I,
                Some('X') | Some('x') => Pauli::X,
                Some('Y') | Some('y') => Pauli::Y,
                Some('Z') | Some('z') => Pauli::Z,
                _ => return Err(PauliLabelParseError),
            };
        }
        if chars.next().is_some() {
            return Err(PauliLabelParseError);
        }
        Ok(PauliLabel(ops))
    }
}

/// One weighted summand of a decomposed matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauliTerm {
    pub label: PauliLabel,
    pub coefficient: f64,
}

impl PauliTerm {
    pub fn new(label: PauliLabel, coefficient: f64) -> Self {
        PauliTerm { label, coefficient }
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8} * {}", self.coefficient, self.label)
    }
}

/// A sum of Pauli terms describing a two-qubit system. Derived once per
/// input matrix and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Hamiltonian {
    pub terms: Vec<PauliTerm>,
}

impl Hamiltonian {
    pub fn new() -> Self {
        Hamiltonian { terms: Vec::new() }
    }

    pub fn add_term(&mut self, term: PauliTerm) {
        self.terms.push(term);
    }

    pub fn with_term(mut self, term: PauliTerm) -> Self {
        self.add_term(term);
        self
    }

    /// Reconstruct the dense matrix Σ_k c_k · P_k.
    pub fn to_matrix(&self) -> Matrix4<Complex64> {
        let mut acc = Matrix4::<Complex64>::zeros();
        for term in &self.terms {
            acc += term.label.matrix() * Complex64::from(term.coefficient);
        }
        acc
    }
}

impl fmt::Display for Hamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "\n+ ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
