//! Pauli-basis decomposition of a 4×4 real symmetric matrix.

use crate::{Hamiltonian, PauliLabel, PauliTerm};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use thiserror::Error;

/// Tolerance on the imaginary part of a solved coefficient, relative to
/// the largest input entry. A Hermitian input always yields real
/// coefficients up to floating-point error.
const IM_TOL_REL: f64 = 1e-9;

/// Snap tolerance for near-zero real coefficients, relative to the largest
/// input entry. Well below LU accuracy, so a genuinely tiny coefficient is
/// never dropped.
const SNAP_TOL_REL: f64 = 1e-13;

#[derive(Debug, Error)]
pub enum DecompositionError {
    #[error("expected a 4x4 matrix, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    /// The 16×16 basis system is singular. The Pauli tensor basis is
    /// linearly independent, so this is an invariant violation.
    #[error("Pauli basis system is singular")]
    Singular,

    /// A solved coefficient has a non-negligible imaginary part, meaning
    /// the input matrix was not symmetric.
    #[error("coefficient of {label} is not real (imaginary part {imaginary})")]
    ComplexCoefficient { label: String, imaginary: f64 },
}

/// Decompose a 4×4 real symmetric matrix into the 16-term Pauli basis.
///
/// Equating Σ_k c_k · P_k to the input entrywise gives 16 linear equations
/// in the 16 unknown coefficients; the system is solved by LU
/// decomposition. One [`PauliTerm`] is returned per label in canonical
/// order, zero coefficients included.
pub fn decompose(matrix: &DMatrix<f64>) -> Result<Hamiltonian, DecompositionError> {
    if matrix.nrows() != 4 || matrix.ncols() != 4 {
        return Err(DecompositionError::Shape {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }

    // Column j of the system is the flattened j-th basis matrix; the
    // right-hand side is the flattened input. Both flatten column-major.
    let labels: Vec<PauliLabel> = PauliLabel::all().collect();
    let mut system = DMatrix::<Complex64>::zeros(16, 16);
    for (j, label) in labels.iter().enumerate() {
        for (i, entry) in label.matrix().iter().enumerate() {
            system[(i, j)] = *entry;
        }
    }
    let rhs = DVector::from_iterator(16, matrix.iter().map(|&x| Complex64::new(x, 0.0)));

    let coefficients = system
        .lu()
        .solve(&rhs)
        .ok_or(DecompositionError::Singular)?;

    let scale = matrix.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()));

    let mut hamiltonian = Hamiltonian::new();
    for (label, c) in labels.iter().zip(coefficients.iter()) {
        if c.im.abs() > IM_TOL_REL * scale {
            return Err(DecompositionError::ComplexCoefficient {
                label: label.to_string(),
                imaginary: c.im,
            });
        }
        // Snap LU round-off to exact zero; absent terms must stay
        // skippable by the exact-zero check in the evaluation loop.
        let coefficient = if c.re.abs() <= SNAP_TOL_REL * scale {
            0.0
        } else {
            c.re
        };
        hamiltonian.add_term(PauliTerm::new(*label, coefficient));
    }
    Ok(hamiltonian)
}
