//! Measurement sampling from a basis-state probability distribution
//!
//! Sampling draws independent shots from the categorical distribution
//! over basis-state indices and reports a sparse map from fixed-width
//! bitstring to observed count. It never mutates the state it reads
//! from; repeated calls against the same final state draw fresh
//! samples.

use crate::error::{Result, StateError};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashMap;

/// Counts observed over a number of measurement shots
///
/// The map is sparse: bitstrings never observed are absent, not stored
/// with a zero. Counts always sum to the shot count.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingResult {
    counts: HashMap<String, usize>,
    shots: usize,
}

impl SamplingResult {
    fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    fn add_outcome(&mut self, bitstring: String) {
        *self.counts.entry(bitstring).or_insert(0) += 1;
    }

    /// Map from bitstring to observed count
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Count for one outcome (0 when never observed)
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of shots drawn
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Total of all stored counts
    ///
    /// Equal to [`shots`](Self::shots) by construction; exposed so tests
    /// can assert the invariant directly.
    pub fn total_counts(&self) -> usize {
        self.counts.values().sum()
    }

    /// Observed frequency of one outcome (count / shots)
    pub fn frequency(&self, bitstring: &str) -> f64 {
        self.get(bitstring) as f64 / self.shots as f64
    }

    /// Outcomes sorted by count, most frequent first
    pub fn sorted_outcomes(&self) -> Vec<(String, usize)> {
        let mut outcomes: Vec<_> = self
            .counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        outcomes
    }
}

/// Render a basis-state index as a fixed-width bitstring
///
/// Qubit 0 is the leftmost character (most significant bit).
pub fn bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Draw `shots` samples from a basis-state probability distribution
///
/// Probabilities are clamped to be nonnegative and renormalized to sum
/// to exactly 1 before sampling, guarding against floating-point drift
/// accumulated over many evolution steps.
///
/// # Errors
/// - [`StateError::InvalidShotCount`] if `shots` is 0
/// - [`StateError::DimensionMismatch`] if `probabilities.len()` is not
///   2^`num_qubits`
/// - [`StateError::DegenerateDistribution`] if the distribution carries
///   no mass
pub fn sample_distribution<R: Rng>(
    probabilities: &[f64],
    num_qubits: usize,
    shots: usize,
    rng: &mut R,
) -> Result<SamplingResult> {
    if shots == 0 {
        return Err(StateError::InvalidShotCount { shots });
    }
    let dimension = 1 << num_qubits;
    if probabilities.len() != dimension {
        return Err(StateError::DimensionMismatch {
            expected: dimension,
            actual: probabilities.len(),
        });
    }

    // Tiny negative diagonals can appear after long density-matrix
    // evolutions; clamp before renormalizing.
    let clamped: Vec<f64> = probabilities.iter().map(|&p| p.max(0.0)).collect();
    let sum: f64 = clamped.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return Err(StateError::DegenerateDistribution { sum });
    }
    let normalized: Vec<f64> = clamped.iter().map(|&p| p / sum).collect();

    let distribution = WeightedIndex::new(&normalized)
        .map_err(|_| StateError::DegenerateDistribution { sum })?;

    let mut result = SamplingResult::new(shots);
    for _ in 0..shots {
        let outcome = distribution.sample(rng);
        result.add_outcome(bitstring(outcome, num_qubits));
    }
    Ok(result)
}
