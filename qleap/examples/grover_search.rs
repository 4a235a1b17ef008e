//! Grover's search for |11⟩ on two qubits
//!
//! For N = 4 items a single oracle + diffuser iteration suffices, so
//! every shot should land on the marked state.

use qleap::{Circuit, SimulationMode, Simulator, SimulatorConfig};

/// Phase-flip the marked item |11⟩ (a CZ gate)
fn oracle(circuit: &mut Circuit) {
    circuit.cz(0, 1).expect("oracle CZ");
}

/// Inversion about the mean
fn diffuser(circuit: &mut Circuit) {
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();
    circuit.x(0).unwrap();
    circuit.x(1).unwrap();
    circuit.cz(0, 1).unwrap();
    circuit.x(0).unwrap();
    circuit.x(1).unwrap();
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut circuit = Circuit::new(2).expect("two qubits");

    // Uniform superposition
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();

    oracle(&mut circuit);
    diffuser(&mut circuit);

    let mut sim = Simulator::new(2, SimulationMode::Statevector, SimulatorConfig::new())
        .expect("simulator");
    sim.run(&circuit).expect("run");

    let counts = sim.measure(1024).expect("measure");

    println!("Grover's search results:");
    for (bitstring, count) in counts.sorted_outcomes() {
        println!("  {}: {}", bitstring, count);
    }
}
