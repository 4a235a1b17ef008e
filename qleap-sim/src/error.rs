//! Error types for the simulation engine

use qleap_core::QuantumError;
use qleap_state::StateError;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while constructing or running a simulation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    /// Mode selector string not recognized
    #[error("Unsupported simulation mode '{mode}': choose 'statevector' or 'density_matrix'")]
    UnsupportedMode { mode: String },

    /// System size beyond the mode-dependent memory cap
    #[error("Too many qubits: requested {num_qubits}, max supported is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Circuit built for a different qubit count than the simulator
    #[error("Circuit has {circuit} qubits but simulator was built for {simulator}")]
    QubitCountMismatch { circuit: usize, simulator: usize },

    /// Structural error from circuit or operator construction
    #[error(transparent)]
    Core(#[from] QuantumError),

    /// Error from state manipulation or sampling
    #[error(transparent)]
    State(#[from] StateError),
}
