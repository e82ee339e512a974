//! Benchmark configuration and validation.
//!
//! The `pushbench` binary always runs [`BenchConfig::default()`]. Other
//! values exist for library callers and tests that want a smaller workload.

use std::error::Error;
use std::fmt;

/// Workload parameters for a benchmark run.
///
/// Validated by [`Runner::new`](crate::Runner::new); a config that fails
/// [`validate()`](Self::validate) can never reach the timing loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Name printed in the header and result lines. Default: `"Rust"`.
    pub implementation_name: String,
    /// Payload appended on every push. Default: `"This is my test string"`.
    pub test_value: String,
    /// Pushes into each fresh sequence. Default: 1_000_000.
    pub pushes_per_trial: usize,
    /// Number of trials timed together. Default: 5.
    pub trials: u32,
}

impl BenchConfig {
    /// Default implementation name.
    pub const DEFAULT_IMPLEMENTATION_NAME: &'static str = "Rust";

    /// Default payload.
    pub const DEFAULT_TEST_VALUE: &'static str = "This is my test string";

    /// Default pushes per trial.
    pub const DEFAULT_PUSHES_PER_TRIAL: usize = 1_000_000;

    /// Default trial count.
    pub const DEFAULT_TRIALS: u32 = 5;

    /// Check structural invariants.
    ///
    /// A zero trial count is rejected here so the average can never
    /// divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.implementation_name.is_empty() {
            return Err(ConfigError::EmptyImplementationName);
        }
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.pushes_per_trial == 0 {
            return Err(ConfigError::ZeroPushes);
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            implementation_name: Self::DEFAULT_IMPLEMENTATION_NAME.to_owned(),
            test_value: Self::DEFAULT_TEST_VALUE.to_owned(),
            pushes_per_trial: Self::DEFAULT_PUSHES_PER_TRIAL,
            trials: Self::DEFAULT_TRIALS,
        }
    }
}

/// Errors detected by [`BenchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `trials` is zero; the average would be undefined.
    ZeroTrials,
    /// `pushes_per_trial` is zero; there is no workload to time.
    ZeroPushes,
    /// `implementation_name` is empty.
    EmptyImplementationName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTrials => write!(f, "trial count must be at least 1"),
            Self::ZeroPushes => write!(f, "pushes per trial must be at least 1"),
            Self::EmptyImplementationName => write!(f, "implementation name must not be empty"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_fixed_workload() {
        let config = BenchConfig::default();
        assert_eq!(config.implementation_name, "Rust");
        assert_eq!(config.test_value, "This is my test string");
        assert_eq!(config.pushes_per_trial, 1_000_000);
        assert_eq!(config.trials, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_trials_rejected() {
        let config = BenchConfig {
            trials: 0,
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrials));
    }

    #[test]
    fn zero_pushes_rejected() {
        let config = BenchConfig {
            pushes_per_trial: 0,
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPushes));
    }

    #[test]
    fn empty_name_rejected() {
        let config = BenchConfig {
            implementation_name: String::new(),
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyImplementationName));
    }

    #[test]
    fn empty_test_value_is_allowed() {
        let config = BenchConfig {
            test_value: String::new(),
            ..BenchConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
