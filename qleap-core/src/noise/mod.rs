//! Quantum noise channels in the Kraus operator formalism
//!
//! This module models the error processes of real quantum hardware:
//!
//! - **Depolarizing noise**: a random Pauli error with probability p
//! - **Amplitude damping**: energy relaxation (T1 decay)
//! - **Phase damping**: loss of phase coherence (T2 decay)
//!
//! A channel is a finite set of Kraus operators {Kᵢ} satisfying the
//! completeness relation Σ Kᵢ†Kᵢ = I. Applied to a density matrix ρ it
//! produces Σᵢ Kᵢ ρ Kᵢ†. Channels are stateless beyond their probability
//! parameter and can be reused across qubits and runs.
//!
//! # Usage
//!
//! ```
//! use qleap_core::noise::{AmplitudeDamping, DepolarizingChannel, NoiseChannel};
//!
//! // 1% random Pauli error
//! let depol = DepolarizingChannel::new(0.01).unwrap();
//! assert!(depol.verify_completeness(1e-10));
//!
//! // 20% decay probability
//! let t1 = AmplitudeDamping::new(0.2).unwrap();
//! assert_eq!(t1.kraus_operators().len(), 2);
//! ```

pub mod channels;
pub mod types;

pub use channels::{AmplitudeDamping, DepolarizingChannel, PhaseDamping};
pub use types::NoiseChannel;
