//! Mixed-state representation as a density matrix
//!
//! A density matrix ρ is Hermitian, positive semi-definite, with
//! Tr(ρ) = 1. Pure states are ρ = |ψ⟩⟨ψ|; noise channels drive states
//! away from purity, which is what this representation exists to track.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qleap_core::Matrix;

/// Density matrix over the n-qubit computational basis
///
/// Stores the full 2^n × 2^n matrix; memory is O(4^n).
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMatrix {
    num_qubits: usize,
    matrix: Matrix,
}

impl DensityMatrix {
    /// Create a density matrix initialized to |0…0⟩⟨0…0|
    pub fn new(num_qubits: usize) -> Self {
        let dimension = 1 << num_qubits;
        let mut matrix = Matrix::zeros(dimension);
        matrix.set(0, 0, Complex64::new(1.0, 0.0));
        Self { num_qubits, matrix }
    }

    /// Create the density matrix of a pure state: ρ = |ψ⟩⟨ψ|
    pub fn from_state_vector(state: &StateVector) -> Self {
        let dimension = state.dimension();
        let amplitudes = state.amplitudes();
        let mut matrix = Matrix::zeros(dimension);
        for i in 0..dimension {
            for j in 0..dimension {
                matrix.set(i, j, amplitudes[i] * amplitudes[j].conj());
            }
        }
        Self {
            num_qubits: state.num_qubits(),
            matrix,
        }
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// The underlying matrix
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix.get(row, col)
    }

    /// Replace the matrix wholesale (used by the evolution step)
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] on dimension mismatch.
    pub fn set_matrix(&mut self, matrix: Matrix) -> Result<()> {
        if matrix.dimension() != self.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: matrix.dimension(),
            });
        }
        self.matrix = matrix;
        Ok(())
    }

    /// Trace Tr(ρ), real part
    ///
    /// Diagonal imaginary parts are numerically negligible for valid
    /// states and are discarded.
    pub fn trace(&self) -> f64 {
        (0..self.dimension()).map(|i| self.get(i, i).re).sum()
    }

    /// Purity Tr(ρ²): 1 for pure states, down to 1/2^n when maximally mixed
    pub fn purity(&self) -> f64 {
        let dim = self.dimension();
        let mut acc = 0.0;
        for i in 0..dim {
            for j in 0..dim {
                // Tr(ρ²) = Σᵢⱼ ρᵢⱼ ρⱼᵢ, and ρⱼᵢ = ρᵢⱼ* for Hermitian ρ
                acc += (self.get(i, j) * self.get(j, i)).re;
            }
        }
        acc
    }

    /// Whether |Tr(ρ) − 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.trace() - 1.0).abs() < epsilon
    }

    /// Per-basis-state probabilities: the real parts of the diagonal
    pub fn diagonal_probabilities(&self) -> Vec<f64> {
        (0..self.dimension()).map(|i| self.get(i, i).re).collect()
    }
}
