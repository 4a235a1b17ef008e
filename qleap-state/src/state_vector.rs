//! Pure-state representation as a complex amplitude vector

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Quantum statevector over the n-qubit computational basis
///
/// Holds 2^n complex amplitudes. Index bit i (counting from the most
/// significant end) is the value of qubit i, so qubit 0 is the leftmost
/// character of a rendered bitstring.
///
/// # Example
///
/// ```
/// use qleap_state::StateVector;
///
/// let state = StateVector::new(2);
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert!(state.is_normalized(1e-12));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    dimension: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a statevector initialized to |0…0⟩
    pub fn new(num_qubits: usize) -> Self {
        let dimension = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            dimension,
            amplitudes,
        }
    }

    /// Create a statevector from raw amplitudes
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] if `amplitudes.len()`
    /// is not 2^`num_qubits`.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        let dimension = 1 << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            dimension,
            amplitudes,
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The amplitude slice
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Replace the amplitudes wholesale (used by the evolution step)
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] on length mismatch.
    pub fn set_amplitudes(&mut self, amplitudes: Vec<Complex64>) -> Result<()> {
        if amplitudes.len() != self.dimension {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension,
                actual: amplitudes.len(),
            });
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    /// L2 norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Whether |norm − 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Per-basis-state probabilities |amplitude|²
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}
