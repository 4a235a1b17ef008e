//! Simulator configuration and mode selection

use crate::error::SimulatorError;
use std::fmt;
use std::str::FromStr;

/// State representation used for a run
///
/// Fixed at simulator construction; a circuit cannot switch
/// representations mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// Pure-state simulation over 2^n amplitudes
    Statevector,
    /// Mixed-state simulation over a 2^n × 2^n density matrix
    DensityMatrix,
}

impl FromStr for SimulationMode {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "statevector" => Ok(Self::Statevector),
            "density_matrix" => Ok(Self::DensityMatrix),
            other => Err(SimulatorError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statevector => write!(f, "statevector"),
            Self::DensityMatrix => write!(f, "density_matrix"),
        }
    }
}

/// Configuration for a simulation run
///
/// # Example
///
/// ```
/// use qleap_sim::SimulatorConfig;
///
/// let config = SimulatorConfig::new().with_seed(42).with_validation(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducible sampling
    pub seed: Option<u64>,

    /// Whether to check norm/trace after every operation
    pub validate_state: bool,

    /// Tolerance for validation checks
    pub tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            validate_state: false,
            tolerance: 1e-10,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_state = enabled;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "statevector".parse::<SimulationMode>().unwrap(),
            SimulationMode::Statevector
        );
        assert_eq!(
            "density_matrix".parse::<SimulationMode>().unwrap(),
            SimulationMode::DensityMatrix
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = "phase_space".parse::<SimulationMode>();
        assert!(matches!(
            result,
            Err(SimulatorError::UnsupportedMode { mode }) if mode == "phase_space"
        ));
    }

    #[test]
    fn test_mode_round_trips_through_display() {
        for mode in [SimulationMode::Statevector, SimulationMode::DensityMatrix] {
            assert_eq!(mode.to_string().parse::<SimulationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_config_builders() {
        let config = SimulatorConfig::new()
            .with_seed(7)
            .with_validation(true)
            .with_tolerance(1e-8);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate_state);
        assert_eq!(config.tolerance, 1e-8);
    }
}
