//! Quantum state representations for QLeap
//!
//! Two representations are provided, chosen once at simulator
//! construction:
//!
//! - [`StateVector`]: 2^n complex amplitudes, for pure-state (ideal)
//!   simulation
//! - [`DensityMatrix`]: 2^n × 2^n matrix, for mixed states and noise
//!   channels
//!
//! [`measurement`] turns either representation's probability
//! distribution into sampled shot counts.

pub mod density_matrix;
pub mod error;
pub mod measurement;
pub mod state_vector;

pub use density_matrix::DensityMatrix;
pub use error::{Result, StateError};
pub use measurement::{bitstring, sample_distribution, SamplingResult};
pub use state_vector::StateVector;
