//! The closed set of circuit operations
//!
//! Operations are immutable records; an ordered sequence of them is the
//! circuit program handed to the simulation engine. The set is a closed
//! enum so gate dispatch is checked exhaustively at compile time; there
//! is no "unknown operation" at runtime.

use crate::noise::NoiseChannel;
use crate::qubit::QubitId;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A single recorded circuit operation
///
/// Qubit indices were validated when the operation was appended to a
/// [`Circuit`](crate::Circuit); angle parameters are unrestricted reals.
///
/// `Barrier` carries no computational effect: the engine skips it and
/// external renderers use it as a visual separator.
#[derive(Clone, Debug)]
pub enum Operation {
    /// Hadamard gate
    Hadamard { qubit: QubitId },
    /// Pauli-X gate (bit flip)
    PauliX { qubit: QubitId },
    /// Pauli-Y gate
    PauliY { qubit: QubitId },
    /// Pauli-Z gate (phase flip)
    PauliZ { qubit: QubitId },
    /// S gate (phase gate, √Z)
    Phase { qubit: QubitId },
    /// T gate (π/8 gate, √S)
    PiOver8 { qubit: QubitId },
    /// Rotation about the X axis by `theta`
    RotationX { qubit: QubitId, theta: f64 },
    /// Rotation about the Y axis by `theta`
    RotationY { qubit: QubitId, theta: f64 },
    /// Rotation about the Z axis by `phi`
    RotationZ { qubit: QubitId, phi: f64 },
    /// Controlled-X (CNOT)
    ControlledX { control: QubitId, target: QubitId },
    /// Controlled-Z
    ControlledZ { control: QubitId, target: QubitId },
    /// Visual separator, ignored by the engine
    Barrier,
    /// Noise channel applied to one qubit (density-matrix mode only)
    Noise {
        channel: Arc<dyn NoiseChannel>,
        qubit: QubitId,
    },
}

impl Operation {
    /// Short display name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Hadamard { .. } => "H",
            Operation::PauliX { .. } => "X",
            Operation::PauliY { .. } => "Y",
            Operation::PauliZ { .. } => "Z",
            Operation::Phase { .. } => "S",
            Operation::PiOver8 { .. } => "T",
            Operation::RotationX { .. } => "RX",
            Operation::RotationY { .. } => "RY",
            Operation::RotationZ { .. } => "RZ",
            Operation::ControlledX { .. } => "CNOT",
            Operation::ControlledZ { .. } => "CZ",
            Operation::Barrier => "BARRIER",
            Operation::Noise { .. } => "NOISE",
        }
    }

    /// The qubits this operation touches, in declaration order
    ///
    /// Empty for barriers.
    pub fn qubits(&self) -> SmallVec<[QubitId; 2]> {
        match self {
            Operation::Hadamard { qubit }
            | Operation::PauliX { qubit }
            | Operation::PauliY { qubit }
            | Operation::PauliZ { qubit }
            | Operation::Phase { qubit }
            | Operation::PiOver8 { qubit }
            | Operation::RotationX { qubit, .. }
            | Operation::RotationY { qubit, .. }
            | Operation::RotationZ { qubit, .. }
            | Operation::Noise { qubit, .. } => SmallVec::from_slice(&[*qubit]),
            Operation::ControlledX { control, target }
            | Operation::ControlledZ { control, target } => {
                SmallVec::from_slice(&[*control, *target])
            }
            Operation::Barrier => SmallVec::new(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::RotationX { qubit, theta } => write!(f, "RX({:.4}, {})", theta, qubit),
            Operation::RotationY { qubit, theta } => write!(f, "RY({:.4}, {})", theta, qubit),
            Operation::RotationZ { qubit, phi } => write!(f, "RZ({:.4}, {})", phi, qubit),
            Operation::ControlledX { control, target } => {
                write!(f, "CNOT({}, {})", control, target)
            }
            Operation::ControlledZ { control, target } => write!(f, "CZ({}, {})", control, target),
            Operation::Barrier => write!(f, "BARRIER"),
            Operation::Noise { channel, qubit } => {
                write!(f, "NOISE({}, {})", channel.name(), qubit)
            }
            other => {
                let qubits = other.qubits();
                write!(f, "{}({})", other.name(), qubits[0])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::DepolarizingChannel;

    #[test]
    fn test_single_qubit_display() {
        let op = Operation::Hadamard {
            qubit: QubitId::new(0),
        };
        assert_eq!(format!("{}", op), "H(q0)");
    }

    #[test]
    fn test_rotation_display() {
        let op = Operation::RotationX {
            qubit: QubitId::new(1),
            theta: std::f64::consts::FRAC_PI_2,
        };
        assert_eq!(format!("{}", op), "RX(1.5708, q1)");
    }

    #[test]
    fn test_noise_display() {
        let op = Operation::Noise {
            channel: Arc::new(DepolarizingChannel::new(0.1).unwrap()),
            qubit: QubitId::new(0),
        };
        assert_eq!(format!("{}", op), "NOISE(depolarizing, q0)");
    }

    #[test]
    fn test_qubit_lists() {
        let cnot = Operation::ControlledX {
            control: QubitId::new(2),
            target: QubitId::new(0),
        };
        assert_eq!(cnot.qubits().as_slice(), &[QubitId::new(2), QubitId::new(0)]);
        assert!(Operation::Barrier.qubits().is_empty());
    }
}
