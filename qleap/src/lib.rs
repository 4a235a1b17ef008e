//! QLeap: a quantum circuit emulator
//!
//! QLeap records quantum circuits as ordered operation lists, evolves a
//! pure (statevector) or mixed (density matrix) state through them, can
//! inject probabilistic noise via Kraus channels, and samples
//! measurement outcomes from the final distribution.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`Circuit`] and [`Operation`] - recording circuits
//!   (`qleap-core`)
//! - [`noise`] - depolarizing, amplitude-damping and phase-damping
//!   channels (`qleap-core`)
//! - [`Simulator`], [`SimulationMode`], [`SimulatorConfig`] - running
//!   circuits (`qleap-sim`)
//! - [`StateVector`], [`DensityMatrix`], [`SamplingResult`] - states
//!   and measurement outcomes (`qleap-state`)
//!
//! # Quick start
//!
//! ```
//! use qleap::{Circuit, SimulationMode, Simulator, SimulatorConfig};
//!
//! // Entangle two qubits and measure
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).unwrap();
//! circuit.cnot(0, 1).unwrap();
//!
//! let mut sim = Simulator::new(
//!     2,
//!     SimulationMode::Statevector,
//!     SimulatorConfig::new().with_seed(42),
//! )
//! .unwrap();
//! sim.run(&circuit).unwrap();
//!
//! let counts = sim.measure(1024).unwrap();
//! assert_eq!(counts.get("00") + counts.get("11"), 1024);
//! ```

pub use qleap_backend::{CpuBackend, LinalgBackend};
pub use qleap_core::{noise, Circuit, Matrix, Operation, QuantumError, QubitId};
pub use qleap_gates::{controlled_operator, matrices, single_qubit_operator};
pub use qleap_sim::{
    QuantumState, RunStatistics, RunSummary, RunWarning, SimulationMode, Simulator,
    SimulatorConfig, SimulatorError,
};
pub use qleap_state::{DensityMatrix, SamplingResult, StateError, StateVector};
