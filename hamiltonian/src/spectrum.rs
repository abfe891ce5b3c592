//! Exact-diagonalization reference oracle.

use crate::decompose::DecompositionError;
use nalgebra::DMatrix;

/// Exact ground-state energy of a real symmetric matrix: the minimum
/// eigenvalue from a dense symmetric eigendecomposition. Used as the
/// comparison value for the variational estimate, not in the pipeline.
pub fn ground_state_energy(matrix: &DMatrix<f64>) -> Result<f64, DecompositionError> {
    if matrix.nrows() != matrix.ncols() || matrix.nrows() == 0 {
        return Err(DecompositionError::Shape {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    let eigen = matrix.clone().symmetric_eigen();
    Ok(eigen.eigenvalues.iter().cloned().fold(f64::INFINITY, f64::min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_matrix_ground_energy_is_minus_two() {
        let m = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 0.0, 0.0, 0.0, //
                0.0, -1.0, 1.0, 0.0, //
                0.0, 1.0, -1.0, 0.0, //
                0.0, 0.0, 0.0, 0.0,
            ],
        );
        let e = ground_state_energy(&m).unwrap();
        assert!((e + 2.0).abs() < 1e-12, "ground energy was {}", e);
    }

    #[test]
    fn diagonal_matrix_ground_energy_is_min_entry() {
        let m = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![3.0, -7.0, 0.5, 2.0]));
        let e = ground_state_energy(&m).unwrap();
        assert!((e + 7.0).abs() < 1e-12);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let m = DMatrix::<f64>::zeros(4, 3);
        assert!(matches!(
            ground_state_energy(&m),
            Err(DecompositionError::Shape { .. })
        ));
    }
}
