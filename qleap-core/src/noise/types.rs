//! The noise channel trait and its completeness invariant

use crate::matrix::Matrix;
use num_complex::Complex64;
use std::fmt;

/// Trait for single-qubit quantum noise channels
///
/// A noise channel describes how errors affect a density matrix, using
/// the Kraus operator formalism: ρ → Σᵢ Kᵢ ρ Kᵢ†.
///
/// Implementations return 2×2 Kraus matrices; the simulation engine
/// embeds each one into the full system exactly like a single-qubit
/// gate. The operators need not be individually unitary; only the
/// completeness relation Σ Kᵢ†Kᵢ = I is required, and it must hold for
/// every valid probability parameter.
pub trait NoiseChannel: Send + Sync + fmt::Debug {
    /// The Kraus operators defining this channel, in a fixed order
    fn kraus_operators(&self) -> Vec<Matrix>;

    /// Name of this channel (e.g., "depolarizing", "amplitude_damping")
    fn name(&self) -> &str;

    /// The probability parameter this channel was built with
    fn probability(&self) -> f64;

    /// Verify the completeness relation Σ Kᵢ†Kᵢ = I
    ///
    /// This is a design invariant checked by tests, not at runtime in
    /// the evolution path.
    fn verify_completeness(&self, tolerance: f64) -> bool {
        let operators = self.kraus_operators();
        if operators.is_empty() {
            return false;
        }

        let dim = operators[0].dimension();
        let mut sum = Matrix::zeros(dim);

        for kraus in &operators {
            let adj = kraus.adjoint();

            // Accumulate adj × kraus
            for i in 0..dim {
                for j in 0..dim {
                    let mut element = Complex64::new(0.0, 0.0);
                    for k in 0..dim {
                        element += adj.get(i, k) * kraus.get(k, j);
                    }
                    sum.set(i, j, sum.get(i, j) + element);
                }
            }
        }

        sum.is_identity(tolerance)
    }
}
