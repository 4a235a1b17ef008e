//! The simulation engine
//!
//! A [`Simulator`] owns one evolving quantum state for the duration of
//! one run. It replays a circuit's operations strictly in order, each
//! one fully completing (operator construction plus state evolution)
//! before the next begins, then samples measurement outcomes from the
//! final state. Engines are constructed fresh per run; two runs of the
//! same circuit are independent.

use crate::config::{SimulationMode, SimulatorConfig};
use crate::error::{Result, SimulatorError};
use crate::result::{RunStatistics, RunSummary, RunWarning};
use num_complex::Complex64;
use qleap_backend::{CpuBackend, LinalgBackend};
use qleap_core::noise::NoiseChannel;
use qleap_core::{Circuit, Matrix, Operation, QuantumError, QubitId};
use qleap_gates::{controlled_operator, matrices, single_qubit_operator};
use qleap_state::{sample_distribution, DensityMatrix, SamplingResult, StateError, StateVector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Statevector amplitudes beyond 2^26 (1 GiB) are refused
pub const MAX_STATEVECTOR_QUBITS: usize = 26;

/// Density matrices beyond 2^13 × 2^13 (1 GiB) are refused
pub const MAX_DENSITY_MATRIX_QUBITS: usize = 13;

/// The evolving quantum state, in the representation fixed at
/// construction
#[derive(Clone, Debug)]
pub enum QuantumState {
    Statevector(StateVector),
    DensityMatrix(DensityMatrix),
}

impl QuantumState {
    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        match self {
            QuantumState::Statevector(sv) => sv.num_qubits(),
            QuantumState::DensityMatrix(dm) => dm.num_qubits(),
        }
    }

    /// Per-basis-state probabilities: |amplitude|² or the real diagonal
    pub fn probabilities(&self) -> Vec<f64> {
        match self {
            QuantumState::Statevector(sv) => sv.probabilities(),
            QuantumState::DensityMatrix(dm) => dm.diagonal_probabilities(),
        }
    }

    /// The statevector, when in statevector mode
    pub fn as_state_vector(&self) -> Option<&StateVector> {
        match self {
            QuantumState::Statevector(sv) => Some(sv),
            QuantumState::DensityMatrix(_) => None,
        }
    }

    /// The density matrix, when in density-matrix mode
    pub fn as_density_matrix(&self) -> Option<&DensityMatrix> {
        match self {
            QuantumState::Statevector(_) => None,
            QuantumState::DensityMatrix(dm) => Some(dm),
        }
    }
}

/// Quantum circuit simulation engine
///
/// # Example
///
/// ```
/// use qleap_core::Circuit;
/// use qleap_sim::{SimulationMode, Simulator, SimulatorConfig};
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.h(0).unwrap();
/// circuit.cnot(0, 1).unwrap();
///
/// let mut sim = Simulator::new(
///     2,
///     SimulationMode::Statevector,
///     SimulatorConfig::new().with_seed(42),
/// )
/// .unwrap();
/// sim.run(&circuit).unwrap();
///
/// let counts = sim.measure(1024).unwrap();
/// assert_eq!(counts.total_counts(), 1024);
/// ```
pub struct Simulator {
    num_qubits: usize,
    mode: SimulationMode,
    config: SimulatorConfig,
    backend: Arc<dyn LinalgBackend>,
    rng: StdRng,
    state: QuantumState,
    statistics: RunStatistics,
    warnings: Vec<RunWarning>,
}

impl Simulator {
    /// Create a simulator holding the all-zero basis state
    ///
    /// # Errors
    /// - [`QuantumError::InvalidQubitCount`] (via `Core`) if
    ///   `num_qubits` is 0
    /// - [`SimulatorError::TooManyQubits`] beyond the mode-dependent cap
    pub fn new(
        num_qubits: usize,
        mode: SimulationMode,
        config: SimulatorConfig,
    ) -> Result<Self> {
        if num_qubits < 1 {
            return Err(QuantumError::InvalidQubitCount { num_qubits }.into());
        }
        let max_qubits = match mode {
            SimulationMode::Statevector => MAX_STATEVECTOR_QUBITS,
            SimulationMode::DensityMatrix => MAX_DENSITY_MATRIX_QUBITS,
        };
        if num_qubits > max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits,
            });
        }

        let state = match mode {
            SimulationMode::Statevector => QuantumState::Statevector(StateVector::new(num_qubits)),
            SimulationMode::DensityMatrix => {
                QuantumState::DensityMatrix(DensityMatrix::new(num_qubits))
            }
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            num_qubits,
            mode,
            config,
            backend: Arc::new(CpuBackend::new()),
            rng,
            state,
            statistics: RunStatistics::default(),
            warnings: Vec::new(),
        })
    }

    /// Replace the numeric backend
    ///
    /// The backend is per-instance state, injected at construction time
    /// rather than resolved from the process environment.
    pub fn with_backend(mut self, backend: Arc<dyn LinalgBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The simulation mode fixed at construction
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// The current state
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Counters accumulated so far
    pub fn statistics(&self) -> RunStatistics {
        self.statistics
    }

    /// Warnings raised so far, in program order
    pub fn warnings(&self) -> &[RunWarning] {
        &self.warnings
    }

    /// Replay a whole circuit against the current state
    ///
    /// Operations are applied strictly in recorded order. The run is an
    /// atomic batch from the caller's perspective: progress is reported
    /// through `tracing` between operations only.
    ///
    /// # Errors
    /// [`SimulatorError::QubitCountMismatch`] when the circuit was built
    /// for a different qubit count, otherwise whatever the failing
    /// operation raises. Structural errors are fatal for the run.
    pub fn run(&mut self, circuit: &Circuit) -> Result<RunSummary> {
        if circuit.num_qubits() != self.num_qubits {
            return Err(SimulatorError::QubitCountMismatch {
                circuit: circuit.num_qubits(),
                simulator: self.num_qubits,
            });
        }

        info!(
            num_qubits = self.num_qubits,
            mode = %self.mode,
            operations = circuit.len(),
            "simulating circuit"
        );

        for (index, op) in circuit.operations().enumerate() {
            debug!(index, op = %op, "applying operation");
            self.apply(op)?;
        }

        info!(gates = self.statistics.gates_applied, "simulation complete");

        Ok(RunSummary {
            statistics: self.statistics,
            warnings: self.warnings.clone(),
        })
    }

    /// Apply one operation to the state
    ///
    /// The operation set is closed, so dispatch is exhaustive at compile
    /// time.
    pub fn apply(&mut self, op: &Operation) -> Result<()> {
        match op {
            Operation::Hadamard { qubit } => self.apply_gate(&matrices::HADAMARD, *qubit)?,
            Operation::PauliX { qubit } => self.apply_gate(&matrices::PAULI_X, *qubit)?,
            Operation::PauliY { qubit } => self.apply_gate(&matrices::PAULI_Y, *qubit)?,
            Operation::PauliZ { qubit } => self.apply_gate(&matrices::PAULI_Z, *qubit)?,
            Operation::Phase { qubit } => self.apply_gate(&matrices::S_GATE, *qubit)?,
            Operation::PiOver8 { qubit } => self.apply_gate(&matrices::T_GATE, *qubit)?,
            Operation::RotationX { qubit, theta } => {
                self.apply_gate(&matrices::rotation_x(*theta), *qubit)?
            }
            Operation::RotationY { qubit, theta } => {
                self.apply_gate(&matrices::rotation_y(*theta), *qubit)?
            }
            Operation::RotationZ { qubit, phi } => {
                self.apply_gate(&matrices::rotation_z(*phi), *qubit)?
            }
            Operation::ControlledX { control, target } => {
                self.apply_controlled(&matrices::PAULI_X, *control, *target)?
            }
            Operation::ControlledZ { control, target } => {
                self.apply_controlled(&matrices::PAULI_Z, *control, *target)?
            }
            Operation::Barrier => {
                self.statistics.barriers += 1;
            }
            Operation::Noise { channel, qubit } => self.apply_noise(channel.as_ref(), *qubit)?,
        }
        Ok(())
    }

    /// Sample measurement outcomes from the current state
    ///
    /// Probabilities are renormalized before sampling; the state is not
    /// mutated, so repeated calls draw fresh independent samples.
    ///
    /// # Errors
    /// [`StateError::InvalidShotCount`] (via `State`) when `shots` is 0.
    pub fn measure(&mut self, shots: usize) -> Result<SamplingResult> {
        let probabilities = self.state.probabilities();
        let result =
            sample_distribution(&probabilities, self.num_qubits, shots, &mut self.rng)?;
        Ok(result)
    }

    fn apply_gate(&mut self, gate: &[[Complex64; 2]; 2], qubit: QubitId) -> Result<()> {
        let gate = Matrix::from_2x2(gate);
        let op = single_qubit_operator(self.backend.as_ref(), self.num_qubits, &gate, qubit)?;
        self.evolve_unitary(&op)
    }

    fn apply_controlled(
        &mut self,
        gate: &[[Complex64; 2]; 2],
        control: QubitId,
        target: QubitId,
    ) -> Result<()> {
        let gate = Matrix::from_2x2(gate);
        let op = controlled_operator(
            self.backend.as_ref(),
            self.num_qubits,
            &gate,
            control,
            target,
        )?;
        self.evolve_unitary(&op)
    }

    fn evolve_unitary(&mut self, op: &Matrix) -> Result<()> {
        match &mut self.state {
            QuantumState::Statevector(sv) => {
                let evolved = self.backend.matvec(op, sv.amplitudes())?;
                sv.set_amplitudes(evolved)?;
            }
            QuantumState::DensityMatrix(dm) => {
                let evolved = self.backend.conjugate(op, dm.matrix())?;
                dm.set_matrix(evolved)?;
            }
        }
        self.statistics.gates_applied += 1;
        self.validate_state()
    }

    fn apply_noise(&mut self, channel: &dyn NoiseChannel, qubit: QubitId) -> Result<()> {
        let dm = match &mut self.state {
            QuantumState::Statevector(_) => {
                // Tolerated misuse: a circuit built generically may carry
                // noise the pure-state run cannot express. Skip with a
                // warning instead of failing the run.
                warn!(
                    channel = channel.name(),
                    qubit = %qubit,
                    "noise channels require density-matrix mode; skipping"
                );
                self.warnings.push(RunWarning::NoiseSkipped {
                    channel: channel.name().to_string(),
                    qubit,
                });
                self.statistics.noise_ops_skipped += 1;
                return Ok(());
            }
            QuantumState::DensityMatrix(dm) => dm,
        };

        // ρ' = Σᵢ Kᵢ ρ Kᵢ†, each Kᵢ embedded like a single-qubit gate
        let mut evolved = Matrix::zeros(dm.dimension());
        for kraus in channel.kraus_operators() {
            let full =
                single_qubit_operator(self.backend.as_ref(), self.num_qubits, &kraus, qubit)?;
            let term = self.backend.conjugate(&full, dm.matrix())?;
            evolved = evolved.add(&term)?;
        }
        dm.set_matrix(evolved)?;

        self.statistics.noise_ops_applied += 1;
        self.validate_state()
    }

    fn validate_state(&self) -> Result<()> {
        if !self.config.validate_state {
            return Ok(());
        }
        let (normalized, norm) = match &self.state {
            QuantumState::Statevector(sv) => {
                (sv.is_normalized(self.config.tolerance), sv.norm())
            }
            QuantumState::DensityMatrix(dm) => {
                (dm.is_normalized(self.config.tolerance), dm.trace())
            }
        };
        if !normalized {
            return Err(StateError::NotNormalized { norm }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seeded() -> SimulatorConfig {
        SimulatorConfig::new().with_seed(42)
    }

    #[test]
    fn test_initial_statevector() {
        let sim = Simulator::new(3, SimulationMode::Statevector, seeded()).unwrap();
        let sv = sim.state().as_state_vector().unwrap();
        assert_eq!(sv.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert!(sv.amplitudes()[1..]
            .iter()
            .all(|&a| a == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_initial_density_matrix() {
        let sim = Simulator::new(2, SimulationMode::DensityMatrix, seeded()).unwrap();
        let dm = sim.state().as_density_matrix().unwrap();
        assert_eq!(dm.get(0, 0), Complex64::new(1.0, 0.0));
        assert_relative_eq!(dm.trace(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let result = Simulator::new(0, SimulationMode::Statevector, seeded());
        assert!(matches!(
            result,
            Err(SimulatorError::Core(QuantumError::InvalidQubitCount {
                num_qubits: 0
            }))
        ));
    }

    #[test]
    fn test_too_many_qubits_rejected() {
        let result = Simulator::new(
            MAX_DENSITY_MATRIX_QUBITS + 1,
            SimulationMode::DensityMatrix,
            seeded(),
        );
        assert!(matches!(
            result,
            Err(SimulatorError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_qubit_count_mismatch() {
        let circuit = Circuit::new(3).unwrap();
        let mut sim = Simulator::new(2, SimulationMode::Statevector, seeded()).unwrap();
        assert!(matches!(
            sim.run(&circuit),
            Err(SimulatorError::QubitCountMismatch {
                circuit: 3,
                simulator: 2
            })
        ));
    }

    #[test]
    fn test_barrier_leaves_state_untouched() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.barrier();

        let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
        let summary = sim.run(&circuit).unwrap();

        assert_eq!(summary.statistics.barriers, 1);
        assert_eq!(summary.statistics.gates_applied, 0);
        let sv = sim.state().as_state_vector().unwrap();
        assert_eq!(sv.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(0).unwrap();

        let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
        sim.run(&circuit).unwrap();

        let probs = sim.state().probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-10);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_gate_then_inverse_round_trips() {
        // H and X are involutions; RX inverts by negating the angle
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(0).unwrap();
        circuit.rx(0.7, 1).unwrap();
        circuit.rx(-0.7, 1).unwrap();
        circuit.h(0).unwrap();

        for mode in [SimulationMode::Statevector, SimulationMode::DensityMatrix] {
            let mut sim = Simulator::new(2, mode, seeded()).unwrap();
            sim.run(&circuit).unwrap();
            let probs = sim.state().probabilities();
            assert_relative_eq!(probs[0], 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_validation_catches_normalized_states_only() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(0).unwrap();
        circuit.cnot(0, 1).unwrap();

        let config = seeded().with_validation(true);
        let mut sim = Simulator::new(2, SimulationMode::DensityMatrix, config).unwrap();
        assert!(sim.run(&circuit).is_ok());
    }

    #[test]
    fn test_measure_requires_positive_shots() {
        let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
        assert!(matches!(
            sim.measure(0),
            Err(SimulatorError::State(StateError::InvalidShotCount {
                shots: 0
            }))
        ));
    }

    #[test]
    fn test_repeated_measurement_does_not_mutate_state() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(0).unwrap();

        let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
        sim.run(&circuit).unwrap();

        let before = sim.state().probabilities();
        for _ in 0..3 {
            let counts = sim.measure(100).unwrap();
            assert_eq!(counts.total_counts(), 100);
        }
        assert_eq!(sim.state().probabilities(), before);
    }

    #[test]
    fn test_noise_skipped_in_statevector_mode() {
        use qleap_core::noise::AmplitudeDamping;

        let mut circuit = Circuit::new(1).unwrap();
        circuit.x(0).unwrap();
        let channel = Arc::new(AmplitudeDamping::new(1.0).unwrap());
        circuit.add_noise(channel, &[0]).unwrap();

        let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
        let summary = sim.run(&circuit).unwrap();

        assert_eq!(summary.statistics.noise_ops_skipped, 1);
        assert_eq!(summary.warnings.len(), 1);
        assert!(matches!(
            &summary.warnings[0],
            RunWarning::NoiseSkipped { channel, .. } if channel == "amplitude_damping"
        ));

        // State is exactly |1⟩, untouched by the skipped channel
        let probs = sim.state().probabilities();
        assert_relative_eq!(probs[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noise_applied_in_density_mode() {
        use qleap_core::noise::AmplitudeDamping;

        let mut circuit = Circuit::new(1).unwrap();
        circuit.x(0).unwrap();
        let channel = Arc::new(AmplitudeDamping::new(1.0).unwrap());
        circuit.add_noise(channel, &[0]).unwrap();

        let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, seeded()).unwrap();
        let summary = sim.run(&circuit).unwrap();

        assert_eq!(summary.statistics.noise_ops_applied, 1);
        assert!(summary.is_clean());

        // Full decay: population entirely back in |0⟩
        let probs = sim.state().probabilities();
        assert_relative_eq!(probs[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(probs[1], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_depolarizing_reduces_purity() {
        use qleap_core::noise::DepolarizingChannel;

        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(0).unwrap();
        let channel = Arc::new(DepolarizingChannel::new(0.5).unwrap());
        circuit.add_noise(channel, &[0]).unwrap();

        let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, seeded()).unwrap();
        sim.run(&circuit).unwrap();

        let dm = sim.state().as_density_matrix().unwrap();
        assert!(dm.purity() < 1.0 - 1e-6);
        assert_relative_eq!(dm.trace(), 1.0, epsilon = 1e-10);
    }
}
