//! Quantum gate library for QLeap
//!
//! Fixed single-qubit gate matrices are `const` tables; rotation
//! matrices are computed from their angle at call time using the
//! standard half-angle identities. Full-system operators are assembled
//! on demand as Kronecker products through the injected numeric backend.
//!
//! # Example
//!
//! ```
//! use qleap_backend::CpuBackend;
//! use qleap_core::{Matrix, QubitId};
//! use qleap_gates::{matrices, operator};
//!
//! let backend = CpuBackend::new();
//! let h = Matrix::from_2x2(&matrices::HADAMARD);
//! let full = operator::single_qubit_operator(&backend, 2, &h, QubitId::new(0)).unwrap();
//! assert_eq!(full.dimension(), 4);
//! ```

pub mod matrices;
pub mod operator;

pub use operator::{controlled_operator, single_qubit_operator};
