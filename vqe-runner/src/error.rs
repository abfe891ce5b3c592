use thiserror::Error;

/// Errors surfaced by the estimation and optimization pipeline.
///
/// A failed backend round-trip aborts the current energy evaluation; it is
/// never scored as zero or infinity.
#[derive(Debug, Error)]
pub enum VqeError {
    #[error("expectation estimation failed: {0}")]
    Estimation(#[from] qsim::SimError),

    #[error("grid scan needs at least one point per axis")]
    EmptyGrid,

    #[error("optimizer failed: {0}")]
    Optimizer(String),

    #[error("optimizer finished without a best parameter vector")]
    NoOptimum,
}
