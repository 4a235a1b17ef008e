//! Run summaries: statistics and structured warnings

use qleap_core::QubitId;
use std::fmt;

/// Non-fatal conditions surfaced by a run
///
/// Warnings are collected in program order; the same information is
/// emitted as `tracing::warn!` events while the run executes.
#[derive(Debug, Clone, PartialEq)]
pub enum RunWarning {
    /// A noise operation was skipped because the simulator is not in
    /// density-matrix mode
    NoiseSkipped {
        /// Channel name (e.g. "amplitude_damping")
        channel: String,
        /// Qubit the channel was attached to
        qubit: QubitId,
    },
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunWarning::NoiseSkipped { channel, qubit } => write!(
                f,
                "noise channel '{}' on {} skipped: requires density-matrix mode",
                channel, qubit
            ),
        }
    }
}

/// Counters accumulated while replaying a circuit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Unitary gate operations applied
    pub gates_applied: usize,
    /// Noise channels applied (density-matrix mode)
    pub noise_ops_applied: usize,
    /// Noise channels skipped (statevector mode)
    pub noise_ops_skipped: usize,
    /// Barriers encountered
    pub barriers: usize,
}

/// Outcome of replaying a circuit
///
/// The final state itself stays owned by the simulator for
/// introspection and measurement; the summary carries everything else.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Operation counters
    pub statistics: RunStatistics,
    /// Warnings raised during the run, in program order
    pub warnings: Vec<RunWarning>,
}

impl RunSummary {
    /// Whether the run completed without warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
