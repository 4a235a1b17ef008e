//! Core types for the QLeap quantum circuit emulator
//!
//! This crate provides the fundamental types for describing quantum circuits:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Operation`]: Closed set of circuit operations
//! - [`Circuit`]: Ordered, validated operation recorder
//! - [`noise`]: Kraus-operator noise channels
//!
//! # Example
//! ```
//! use qleap_core::Circuit;
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).unwrap();
//! circuit.cnot(0, 1).unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod matrix;
pub mod noise;
pub mod operation;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use matrix::Matrix;
pub use num_complex::Complex64;
pub use operation::Operation;
pub use qubit::QubitId;

/// Type alias for results in QLeap
pub type Result<T> = std::result::Result<T, QuantumError>;
