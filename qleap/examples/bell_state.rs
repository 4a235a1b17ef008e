//! Prepare and measure a Bell state (|Φ+⟩)
//!
//! Expected outcome: roughly 50% `00` and 50% `11`.

use qleap::{Circuit, SimulationMode, Simulator, SimulatorConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let mut circuit = Circuit::new(2).expect("two qubits");
    circuit.h(0).expect("H on q0");
    circuit.cnot(0, 1).expect("CNOT q0 -> q1");

    let mut sim = Simulator::new(2, SimulationMode::Statevector, SimulatorConfig::new())
        .expect("simulator");
    sim.run(&circuit).expect("run");

    let counts = sim.measure(1024).expect("measure");

    println!("Bell state simulation results:");
    for (bitstring, count) in counts.sorted_outcomes() {
        println!("  {}: {}", bitstring, count);
    }
}
