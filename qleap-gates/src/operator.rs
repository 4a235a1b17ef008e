//! Full-system operator construction via Kronecker products
//!
//! Operators are transient: built on demand from per-qubit 2×2 factors,
//! applied once by the engine, then dropped. Qubit 0 is the leftmost
//! factor in the product, so it maps to the most significant bit of a
//! basis-state index.
//!
//! Materializing the full 2^n × 2^n operator is exponential in the qubit
//! count; the [`LinalgBackend`] seam exists so a localized-contraction
//! implementation could replace it without changing observable behavior.

use crate::matrices;
use qleap_backend::LinalgBackend;
use qleap_core::{Matrix, QuantumError, QubitId, Result};

fn check_qubit(index: QubitId, num_qubits: usize) -> Result<usize> {
    if index.index() >= num_qubits {
        return Err(QuantumError::invalid_qubit_index(index.index(), num_qubits));
    }
    Ok(index.index())
}

fn check_single_qubit_gate(gate: &Matrix) -> Result<()> {
    if gate.dimension() != 2 {
        return Err(QuantumError::dimension_mismatch(2, gate.dimension()));
    }
    Ok(())
}

/// Chain `factors` into one full-system operator with repeated Kronecker
/// products, starting from the 1×1 identity seed.
fn tensor_chain(backend: &dyn LinalgBackend, factors: &[Matrix]) -> Matrix {
    let mut op = Matrix::identity(1);
    for factor in factors {
        op = backend.kron(&op, factor);
    }
    op
}

/// Build the full-system operator for a single-qubit gate
///
/// Returns the tensor product of `num_qubits` 2×2 factors: identity
/// everywhere except `gate` at position `target`.
///
/// # Errors
/// - [`QuantumError::InvalidQubitIndex`] if `target` is out of range
/// - [`QuantumError::DimensionMismatch`] if `gate` is not 2×2
///
/// # Example
/// ```
/// use qleap_backend::CpuBackend;
/// use qleap_core::{Matrix, QubitId};
/// use qleap_gates::{matrices, operator::single_qubit_operator};
///
/// let backend = CpuBackend::new();
/// let x = Matrix::from_2x2(&matrices::PAULI_X);
/// let op = single_qubit_operator(&backend, 3, &x, QubitId::new(1)).unwrap();
/// assert_eq!(op.dimension(), 8);
/// ```
pub fn single_qubit_operator(
    backend: &dyn LinalgBackend,
    num_qubits: usize,
    gate: &Matrix,
    target: QubitId,
) -> Result<Matrix> {
    let target = check_qubit(target, num_qubits)?;
    check_single_qubit_gate(gate)?;

    let identity = Matrix::from_2x2(&matrices::IDENTITY);
    let factors: Vec<Matrix> = (0..num_qubits)
        .map(|i| if i == target { gate.clone() } else { identity.clone() })
        .collect();

    Ok(tensor_chain(backend, &factors))
}

/// Build the full-system operator for a controlled single-qubit gate
///
/// The operator is the projector decomposition
///
/// ```text
/// P₀(control) ⊗ I(rest)  +  P₁(control) ⊗ gate(target) ⊗ I(rest)
/// ```
///
/// which applies `gate` to `target` exactly when `control` is |1⟩, for
/// any control/target ordering including non-adjacent qubits.
///
/// # Errors
/// - [`QuantumError::InvalidQubitIndex`] if either index is out of range
/// - [`QuantumError::ControlTargetOverlap`] if `control == target`
/// - [`QuantumError::DimensionMismatch`] if `gate` is not 2×2
pub fn controlled_operator(
    backend: &dyn LinalgBackend,
    num_qubits: usize,
    gate: &Matrix,
    control: QubitId,
    target: QubitId,
) -> Result<Matrix> {
    let control = check_qubit(control, num_qubits)?;
    let target = check_qubit(target, num_qubits)?;
    if control == target {
        return Err(QuantumError::ControlTargetOverlap { qubit: control });
    }
    check_single_qubit_gate(gate)?;

    let identity = Matrix::from_2x2(&matrices::IDENTITY);
    let projector_0 = Matrix::from_2x2(&matrices::PROJECTOR_0);
    let projector_1 = Matrix::from_2x2(&matrices::PROJECTOR_1);

    let term_0: Vec<Matrix> = (0..num_qubits)
        .map(|i| {
            if i == control {
                projector_0.clone()
            } else {
                identity.clone()
            }
        })
        .collect();

    let term_1: Vec<Matrix> = (0..num_qubits)
        .map(|i| {
            if i == control {
                projector_1.clone()
            } else if i == target {
                gate.clone()
            } else {
                identity.clone()
            }
        })
        .collect();

    tensor_chain(backend, &term_0).add(&tensor_chain(backend, &term_1))
}
