//! T1 relaxation study: ideal run versus amplitude-damped run
//!
//! The ideal statevector run keeps the qubit in |1⟩; the density-matrix
//! run lets it decay to |0⟩ with the configured probability.

use qleap::noise::AmplitudeDamping;
use qleap::{Circuit, SimulationMode, Simulator, SimulatorConfig};
use std::sync::Arc;

const DECAY_PROBABILITY: f64 = 0.2;
const SHOTS: usize = 4096;

fn main() {
    tracing_subscriber::fmt::init();

    // Ideal circuit: no noise, pure-state simulation
    let mut ideal = Circuit::new(1).expect("one qubit");
    ideal.x(0).expect("prepare |1>");

    let mut sim = Simulator::new(1, SimulationMode::Statevector, SimulatorConfig::new())
        .expect("simulator");
    sim.run(&ideal).expect("run");
    let ideal_counts = sim.measure(SHOTS).expect("measure");

    println!("Ideal circuit (qubit prepared in |1>):");
    for (bitstring, count) in ideal_counts.sorted_outcomes() {
        println!("  {}: {}", bitstring, count);
    }

    // Noisy circuit: same preparation, then a T1 decay channel
    let mut noisy = Circuit::new(1).expect("one qubit");
    noisy.x(0).expect("prepare |1>");
    noisy.barrier();
    noisy
        .add_noise(
            Arc::new(AmplitudeDamping::new(DECAY_PROBABILITY).expect("valid gamma")),
            &[0],
        )
        .expect("attach noise");

    let mut sim = Simulator::new(1, SimulationMode::DensityMatrix, SimulatorConfig::new())
        .expect("simulator");
    sim.run(&noisy).expect("run");
    let noisy_counts = sim.measure(SHOTS).expect("measure");

    println!("\nNoisy circuit (T1 decay, p = {}):", DECAY_PROBABILITY);
    for (bitstring, count) in noisy_counts.sorted_outcomes() {
        println!("  {}: {}", bitstring, count);
    }

    let rho = sim.state().as_density_matrix().expect("density matrix");
    println!("\nFinal density matrix diagonal:");
    for (i, p) in rho.diagonal_probabilities().iter().enumerate() {
        println!("  |{}⟩⟨{}|: {:.4}", i, i, p);
    }
}
