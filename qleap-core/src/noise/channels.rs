//! Implementations of common quantum noise channels

use super::types::NoiseChannel;
use crate::error::QuantumError;
use crate::matrix::Matrix;
use crate::Result;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn validate_probability(probability: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(QuantumError::InvalidProbability { probability });
    }
    Ok(probability)
}

/// Depolarizing noise channel
///
/// Applies a random Pauli error with probability p:
/// - With probability (1−p): no error (identity)
/// - With probability p/3 each: X, Y, or Z error
///
/// This models a general, direction-less loss of information.
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1−p) I
/// K₁ = √(p/3) X
/// K₂ = √(p/3) Y
/// K₃ = √(p/3) Z
/// ```
///
/// # Example
/// ```
/// # use qleap_core::noise::DepolarizingChannel;
/// let channel = DepolarizingChannel::new(0.01).unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepolarizingChannel {
    /// Error probability p ∈ [0, 1]
    probability: f64,
}

impl DepolarizingChannel {
    /// Create a new depolarizing channel
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidProbability`] if p is not in [0, 1]
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: validate_probability(probability)?,
        })
    }
}

impl NoiseChannel for DepolarizingChannel {
    fn kraus_operators(&self) -> Vec<Matrix> {
        let p = self.probability;
        let sqrt_1_minus_p = Complex64::new((1.0 - p).sqrt(), 0.0);
        let sqrt_p_3 = Complex64::new((p / 3.0).sqrt(), 0.0);

        let identity = Matrix::from_2x2(&[[ONE, ZERO], [ZERO, ONE]]);
        let pauli_x = Matrix::from_2x2(&[[ZERO, ONE], [ONE, ZERO]]);
        let pauli_y = Matrix::from_2x2(&[
            [ZERO, Complex64::new(0.0, -1.0)],
            [Complex64::new(0.0, 1.0), ZERO],
        ]);
        let pauli_z = Matrix::from_2x2(&[[ONE, ZERO], [ZERO, Complex64::new(-1.0, 0.0)]]);

        vec![
            identity.scale(sqrt_1_minus_p),
            pauli_x.scale(sqrt_p_3),
            pauli_y.scale(sqrt_p_3),
            pauli_z.scale(sqrt_p_3),
        ]
    }

    fn name(&self) -> &str {
        "depolarizing"
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Amplitude damping channel
///
/// Models energy relaxation (T1 decay): the excited state |1⟩ decays to
/// the ground state |0⟩ with probability γ.
///
/// For a qubit with T1 relaxation time, after time t: γ = 1 − exp(−t/T1).
///
/// # Kraus Operators
/// ```text
/// K₀ = [[1, 0], [0, √(1−γ)]]
/// K₁ = [[0, √γ], [0, 0]]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AmplitudeDamping {
    /// Decay probability γ ∈ [0, 1]
    gamma: f64,
}

impl AmplitudeDamping {
    /// Create a new amplitude damping channel
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidProbability`] if γ is not in [0, 1]
    pub fn new(gamma: f64) -> Result<Self> {
        Ok(Self {
            gamma: validate_probability(gamma)?,
        })
    }

    /// Create from T1 relaxation time and gate duration
    ///
    /// Computes γ = 1 − exp(−gate_time/T1). Times share a unit.
    pub fn from_t1(t1: f64, gate_time: f64) -> Result<Self> {
        if t1 <= 0.0 {
            return Err(QuantumError::ValidationError(
                "T1 must be positive".to_string(),
            ));
        }
        if gate_time < 0.0 {
            return Err(QuantumError::ValidationError(
                "Gate time must be non-negative".to_string(),
            ));
        }
        Self::new(1.0 - (-gate_time / t1).exp())
    }

    /// The decay probability
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl NoiseChannel for AmplitudeDamping {
    fn kraus_operators(&self) -> Vec<Matrix> {
        let sqrt_gamma = Complex64::new(self.gamma.sqrt(), 0.0);
        let sqrt_1_minus_gamma = Complex64::new((1.0 - self.gamma).sqrt(), 0.0);

        vec![
            Matrix::from_2x2(&[[ONE, ZERO], [ZERO, sqrt_1_minus_gamma]]),
            Matrix::from_2x2(&[[ZERO, sqrt_gamma], [ZERO, ZERO]]),
        ]
    }

    fn name(&self) -> &str {
        "amplitude_damping"
    }

    fn probability(&self) -> f64 {
        self.gamma
    }
}

/// Phase damping channel
///
/// Models pure dephasing (T2 decay): loss of phase information without
/// energy exchange. Off-diagonal density matrix elements shrink by
/// √(1−λ) while populations are untouched.
///
/// # Kraus Operators
/// ```text
/// K₀ = [[1, 0], [0, √(1−λ)]]
/// K₁ = [[0, 0], [0, √λ]]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhaseDamping {
    /// Dephasing probability λ ∈ [0, 1]
    lambda: f64,
}

impl PhaseDamping {
    /// Create a new phase damping channel
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidProbability`] if λ is not in [0, 1]
    pub fn new(lambda: f64) -> Result<Self> {
        Ok(Self {
            lambda: validate_probability(lambda)?,
        })
    }

    /// Create from T2 dephasing time and gate duration
    ///
    /// Computes λ = (1 − exp(−gate_time/T2)) / 2. Times share a unit.
    pub fn from_t2(t2: f64, gate_time: f64) -> Result<Self> {
        if t2 <= 0.0 {
            return Err(QuantumError::ValidationError(
                "T2 must be positive".to_string(),
            ));
        }
        if gate_time < 0.0 {
            return Err(QuantumError::ValidationError(
                "Gate time must be non-negative".to_string(),
            ));
        }
        Self::new((1.0 - (-gate_time / t2).exp()) / 2.0)
    }

    /// The dephasing probability
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl NoiseChannel for PhaseDamping {
    fn kraus_operators(&self) -> Vec<Matrix> {
        let sqrt_lambda = Complex64::new(self.lambda.sqrt(), 0.0);
        let sqrt_1_minus_lambda = Complex64::new((1.0 - self.lambda).sqrt(), 0.0);

        vec![
            Matrix::from_2x2(&[[ONE, ZERO], [ZERO, sqrt_1_minus_lambda]]),
            Matrix::from_2x2(&[[ZERO, ZERO], [ZERO, sqrt_lambda]]),
        ]
    }

    fn name(&self) -> &str {
        "phase_damping"
    }

    fn probability(&self) -> f64 {
        self.lambda
    }
}
