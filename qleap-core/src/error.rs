//! Error types for QLeap circuit construction and operator algebra

use thiserror::Error;

/// Errors that can occur while building circuits or constructing operators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// Circuit or simulator requested with fewer than one qubit
    #[error("Invalid qubit count {num_qubits}: at least one qubit is required")]
    InvalidQubitCount { num_qubits: usize },

    /// Qubit index outside the system
    #[error("Invalid qubit index {index}: system has only {num_qubits} qubits")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Controlled gate addressed with identical control and target
    #[error("Control and target of a controlled gate overlap on qubit {qubit}")]
    ControlTargetOverlap { qubit: usize },

    /// Noise channel parameter outside [0, 1]
    #[error("Probability must be in [0, 1], got {probability}")]
    InvalidProbability { probability: f64 },

    /// Matrix or vector dimensions do not line up
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Generic parameter validation error
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit index error
    pub fn invalid_qubit_index(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubitIndex { index, num_qubits }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_index_message() {
        let err = QuantumError::invalid_qubit_index(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_invalid_probability_message() {
        let err = QuantumError::InvalidProbability { probability: 1.5 };
        let msg = format!("{}", err);
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_control_target_overlap_message() {
        let err = QuantumError::ControlTargetOverlap { qubit: 2 };
        assert!(format!("{}", err).contains("qubit 2"));
    }
}
