//! Simulation engine for the QLeap quantum circuit emulator
//!
//! The engine replays a recorded [`Circuit`](qleap_core::Circuit)
//! against a fresh all-zero state, in either statevector or
//! density-matrix representation, and samples measurement outcomes from
//! the final probability distribution.
//!
//! # Example
//!
//! ```
//! use qleap_core::Circuit;
//! use qleap_sim::{SimulationMode, Simulator, SimulatorConfig};
//!
//! // Bell state: H then CNOT
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).unwrap();
//! circuit.cnot(0, 1).unwrap();
//!
//! let mut sim = Simulator::new(
//!     2,
//!     SimulationMode::Statevector,
//!     SimulatorConfig::new().with_seed(1),
//! )
//! .unwrap();
//! sim.run(&circuit).unwrap();
//! let counts = sim.measure(1024).unwrap();
//!
//! // Only the correlated outcomes appear
//! assert_eq!(counts.get("00") + counts.get("11"), 1024);
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;

pub use config::{SimulationMode, SimulatorConfig};
pub use error::{Result, SimulatorError};
pub use result::{RunStatistics, RunSummary, RunWarning};
pub use simulator::{
    QuantumState, Simulator, MAX_DENSITY_MATRIX_QUBITS, MAX_STATEVECTOR_QUBITS,
};
