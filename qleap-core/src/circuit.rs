//! Quantum circuit recording
//!
//! A [`Circuit`] accumulates operations without executing anything; all
//! computation is deferred to the simulation engine, which replays the
//! recorded sequence against a fresh initial state.

use crate::error::QuantumError;
use crate::noise::NoiseChannel;
use crate::operation::Operation;
use crate::qubit::QubitId;
use crate::Result;
use std::sync::Arc;

/// An ordered, validated list of quantum operations
///
/// Qubit indices are checked when an operation is appended, so a stored
/// program is always structurally valid for its qubit count.
///
/// # Example
/// ```
/// use qleap_core::Circuit;
///
/// // Bell state preparation
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.h(0).unwrap();
/// circuit.cnot(0, 1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create a new circuit over `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubitCount`] if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits < 1 {
            return Err(QuantumError::InvalidQubitCount { num_qubits });
        }
        Ok(Self {
            num_qubits,
            operations: Vec::new(),
        })
    }

    /// Create a circuit with pre-allocated operation capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Result<Self> {
        let mut circuit = Self::new(num_qubits)?;
        circuit.operations.reserve(capacity);
        Ok(circuit)
    }

    /// Number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of recorded operations
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit has no operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterator over the recorded operations, in program order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Remove all operations
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    fn check_qubit(&self, qubit: usize) -> Result<QubitId> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::invalid_qubit_index(qubit, self.num_qubits));
        }
        Ok(QubitId::new(qubit))
    }

    fn check_pair(&self, control: usize, target: usize) -> Result<(QubitId, QubitId)> {
        let control = self.check_qubit(control)?;
        let target = self.check_qubit(target)?;
        if control == target {
            return Err(QuantumError::ControlTargetOverlap {
                qubit: control.index(),
            });
        }
        Ok((control, target))
    }

    /// Append a Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::Hadamard { qubit });
        Ok(())
    }

    /// Append a Pauli-X gate
    pub fn x(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::PauliX { qubit });
        Ok(())
    }

    /// Append a Pauli-Y gate
    pub fn y(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::PauliY { qubit });
        Ok(())
    }

    /// Append a Pauli-Z gate
    pub fn z(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::PauliZ { qubit });
        Ok(())
    }

    /// Append an S (phase) gate
    pub fn s(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::Phase { qubit });
        Ok(())
    }

    /// Append a T (π/8) gate
    pub fn t(&mut self, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::PiOver8 { qubit });
        Ok(())
    }

    /// Append an X-axis rotation by `theta`
    pub fn rx(&mut self, theta: f64, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::RotationX { qubit, theta });
        Ok(())
    }

    /// Append a Y-axis rotation by `theta`
    pub fn ry(&mut self, theta: f64, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::RotationY { qubit, theta });
        Ok(())
    }

    /// Append a Z-axis rotation by `phi`
    pub fn rz(&mut self, phi: f64, qubit: usize) -> Result<()> {
        let qubit = self.check_qubit(qubit)?;
        self.operations.push(Operation::RotationZ { qubit, phi });
        Ok(())
    }

    /// Append a CNOT gate
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidQubitIndex`] for out-of-range
    /// indices and [`QuantumError::ControlTargetOverlap`] when
    /// `control == target`.
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<()> {
        let (control, target) = self.check_pair(control, target)?;
        self.operations.push(Operation::ControlledX { control, target });
        Ok(())
    }

    /// Append a controlled-Z gate
    pub fn cz(&mut self, control: usize, target: usize) -> Result<()> {
        let (control, target) = self.check_pair(control, target)?;
        self.operations.push(Operation::ControlledZ { control, target });
        Ok(())
    }

    /// Append a SWAP of two qubits
    ///
    /// SWAP is recorded as three alternating CNOTs rather than a
    /// dedicated two-qubit operator. This is a deliberate trade: the
    /// engine keeps a single controlled-gate path, and the identity
    /// SWAP(a,b) = CNOT(a,b)·CNOT(b,a)·CNOT(a,b) is exact.
    pub fn swap(&mut self, qubit_a: usize, qubit_b: usize) -> Result<()> {
        self.cnot(qubit_a, qubit_b)?;
        self.cnot(qubit_b, qubit_a)?;
        self.cnot(qubit_a, qubit_b)
    }

    /// Append a barrier
    ///
    /// Barriers have no computational effect; the engine skips them.
    pub fn barrier(&mut self) {
        self.operations.push(Operation::Barrier);
    }

    /// Append a noise channel on each of the listed qubits
    ///
    /// One `Noise` operation is recorded per qubit, sharing the channel.
    /// Noise only acts in density-matrix mode; in statevector mode the
    /// engine skips it with a warning.
    pub fn add_noise(
        &mut self,
        channel: Arc<dyn NoiseChannel>,
        qubits: &[usize],
    ) -> Result<()> {
        // Validate every index before recording anything, so a failed
        // call leaves the circuit unchanged.
        let checked: Vec<QubitId> = qubits
            .iter()
            .map(|&q| self.check_qubit(q))
            .collect::<Result<_>>()?;
        for qubit in checked {
            self.operations.push(Operation::Noise {
                channel: Arc::clone(&channel),
                qubit,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
