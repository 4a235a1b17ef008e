//! Decoherence behavior through the full engine path

use approx::assert_relative_eq;
use qleap_core::noise::{AmplitudeDamping, DepolarizingChannel, PhaseDamping};
use qleap_core::Circuit;
use qleap_sim::{SimulationMode, Simulator, SimulatorConfig};
use std::sync::Arc;

fn seeded() -> SimulatorConfig {
    SimulatorConfig::new().with_seed(42)
}

#[test]
fn full_amplitude_damping_decays_to_ground_state() {
    // Prepare |1⟩, then decay with certainty: every shot reads 0
    let mut circuit = Circuit::new(1).unwrap();
    circuit.x(0).unwrap();
    circuit
        .add_noise(Arc::new(AmplitudeDamping::new(1.0).unwrap()), &[0])
        .unwrap();

    let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, seeded()).unwrap();
    sim.run(&circuit).unwrap();

    let counts = sim.measure(2048).unwrap();
    assert_eq!(counts.get("0"), 2048);
    assert_eq!(counts.get("1"), 0);
}

#[test]
fn partial_amplitude_damping_shifts_population() {
    let gamma = 0.2;
    let mut circuit = Circuit::new(1).unwrap();
    circuit.x(0).unwrap();
    circuit.barrier();
    circuit
        .add_noise(Arc::new(AmplitudeDamping::new(gamma).unwrap()), &[0])
        .unwrap();

    let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, seeded()).unwrap();
    sim.run(&circuit).unwrap();

    let probs = sim.state().probabilities();
    assert_relative_eq!(probs[0], gamma, epsilon = 1e-10);
    assert_relative_eq!(probs[1], 1.0 - gamma, epsilon = 1e-10);
}

#[test]
fn phase_damping_kills_coherences_keeps_populations() {
    // H creates coherence; full dephasing leaves the diagonal intact
    let mut circuit = Circuit::new(1).unwrap();
    circuit.h(0).unwrap();
    circuit
        .add_noise(Arc::new(PhaseDamping::new(1.0).unwrap()), &[0])
        .unwrap();

    let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, seeded()).unwrap();
    sim.run(&circuit).unwrap();

    let dm = sim.state().as_density_matrix().unwrap();
    assert!(dm.get(0, 1).norm() < 1e-10);
    assert!(dm.get(1, 0).norm() < 1e-10);
    assert_relative_eq!(dm.get(0, 0).re, 0.5, epsilon = 1e-10);
    assert_relative_eq!(dm.get(1, 1).re, 0.5, epsilon = 1e-10);
}

#[test]
fn depolarizing_noise_mixes_the_state_but_keeps_trace() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(0).unwrap();
    circuit.cnot(0, 1).unwrap();
    circuit
        .add_noise(Arc::new(DepolarizingChannel::new(0.3).unwrap()), &[0, 1])
        .unwrap();

    let mut sim = Simulator::new(2, SimulationMode::DensityMatrix, seeded()).unwrap();
    let summary = sim.run(&circuit).unwrap();
    assert_eq!(summary.statistics.noise_ops_applied, 2);

    let dm = sim.state().as_density_matrix().unwrap();
    assert_relative_eq!(dm.trace(), 1.0, epsilon = 1e-10);
    assert!(dm.purity() < 1.0 - 1e-6);
}

#[test]
fn noise_on_one_qubit_of_many_embeds_correctly() {
    // Decay only qubit 1 of |11⟩: outcome settles on |10⟩
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(0).unwrap();
    circuit.x(1).unwrap();
    circuit
        .add_noise(Arc::new(AmplitudeDamping::new(1.0).unwrap()), &[1])
        .unwrap();

    let mut sim = Simulator::new(2, SimulationMode::DensityMatrix, seeded()).unwrap();
    sim.run(&circuit).unwrap();

    let counts = sim.measure(512).unwrap();
    assert_eq!(counts.get("10"), 512);
}

#[test]
fn statevector_run_reports_skipped_noise() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.h(0).unwrap();
    circuit
        .add_noise(Arc::new(DepolarizingChannel::new(0.5).unwrap()), &[0])
        .unwrap();

    let mut sim = Simulator::new(1, SimulationMode::Statevector, seeded()).unwrap();
    let summary = sim.run(&circuit).unwrap();

    assert!(!summary.is_clean());
    assert_eq!(summary.statistics.noise_ops_skipped, 1);
    assert_eq!(summary.statistics.noise_ops_applied, 0);

    // The skipped channel had no effect on the pure state
    let probs = sim.state().probabilities();
    assert_relative_eq!(probs[0], 0.5, epsilon = 1e-10);
    assert_relative_eq!(probs[1], 0.5, epsilon = 1e-10);
}
