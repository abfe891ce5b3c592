use crate::ansatz::AnsatzParams;
use crate::error::VqeError;
use crate::measurement::estimate;
use hamiltonian::Hamiltonian;
use qsim::SimulatorApi;

/// Variational energy at `params`: Σ_k c_k · ⟨P_k⟩, one backend round-trip
/// per non-trivial term. Repeated calls differ by sampling noise of order
/// 1/√shots per term.
pub fn evaluate<B: SimulatorApi>(
    backend: &mut B,
    params: AnsatzParams,
    hamiltonian: &Hamiltonian,
    shots: u32,
) -> Result<f64, VqeError> {
    let mut energy = 0.0;
    for term in &hamiltonian.terms {
        // A zero-weight term contributes nothing regardless of its
        // estimated expectation value.
        if term.coefficient == 0.0 {
            continue;
        }
        energy += term.coefficient * estimate(backend, params, term.label, shots)?;
    }
    Ok(energy)
}
