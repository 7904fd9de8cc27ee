use thiserror::Error;

/// Iteration budget used when none is configured.
pub const DEFAULT_STEPS: usize = 10_000;
/// Initial translation scale, in coordinate units (Å).
pub const DEFAULT_STEP_SIZE: f64 = 2.0;
/// Backbone RMSD below which a run is considered converged.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Parameters of a Monte Carlo alignment run.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentConfig {
    /// Maximum number of proposals.
    pub steps: usize,
    /// Standard deviation of each translation component at the start of the run.
    pub step_size: f64,
    /// Convergence threshold on the backbone RMSD.
    pub tolerance: f64,
    /// Seed for the proposal generator; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_size: DEFAULT_STEP_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }
}

impl AlignmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "step_size",
                value: self.step_size,
                reason: "must be a finite positive number",
            });
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance,
                reason: "must be a finite non-negative number",
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct AlignmentConfigBuilder {
    steps: Option<usize>,
    step_size: Option<f64>,
    tolerance: Option<f64>,
    seed: Option<u64>,
}

impl AlignmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration, filling unset values with the defaults.
    pub fn build(self) -> Result<AlignmentConfig, ConfigError> {
        let config = AlignmentConfig {
            steps: self.steps.unwrap_or(DEFAULT_STEPS),
            step_size: self.step_size.unwrap_or(DEFAULT_STEP_SIZE),
            tolerance: self.tolerance.unwrap_or(DEFAULT_TOLERANCE),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
