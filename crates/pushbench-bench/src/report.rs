//! Benchmark results and their printed form.
//!
//! Output is exactly three lines:
//!
//! ```text
//! =====Executing Benchmark Test in Rust=====
//! Pushing Back 1,000,000 Test strings
//! Rust Average over 5 trials 12.3456 ms
//! ```

use std::fmt;
use std::time::Duration;

use crate::config::{BenchConfig, ConfigError};

/// First output line: identifies the implementation under test.
pub fn header_line(implementation_name: &str) -> String {
    format!("=====Executing Benchmark Test in {implementation_name}=====")
}

/// Second output line: the workload size.
pub fn workload_line(pushes_per_trial: usize) -> String {
    format!("Pushing Back {} Test strings", format_count(pushes_per_trial))
}

/// Format `n` with comma thousands separators, e.g. `1,000,000`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Result of one benchmark run: total elapsed time across all trials.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchReport {
    implementation_name: String,
    pushes_per_trial: usize,
    trials: u32,
    elapsed: Duration,
}

impl BenchReport {
    /// Build a report. Fails with [`ConfigError::ZeroTrials`] when `trials`
    /// is zero, so [`average_ms`](Self::average_ms) is always defined.
    pub fn new(
        implementation_name: impl Into<String>,
        pushes_per_trial: usize,
        trials: u32,
        elapsed: Duration,
    ) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(Self {
            implementation_name: implementation_name.into(),
            pushes_per_trial,
            trials,
            elapsed,
        })
    }

    /// Build a report for a config that already passed
    /// [`BenchConfig::validate`], so `trials` is non-zero.
    pub(crate) fn from_validated(config: &BenchConfig, elapsed: Duration) -> Self {
        Self {
            implementation_name: config.implementation_name.clone(),
            pushes_per_trial: config.pushes_per_trial,
            trials: config.trials,
            elapsed,
        }
    }

    /// Name of the implementation that was measured.
    pub fn implementation_name(&self) -> &str {
        &self.implementation_name
    }

    /// Pushes performed in each trial.
    pub fn pushes_per_trial(&self) -> usize {
        self.pushes_per_trial
    }

    /// Trials timed together.
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Wall-clock time for all trials combined.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total elapsed milliseconds divided by the trial count.
    pub fn average_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0 / f64::from(self.trials)
    }

    /// See [`header_line`].
    pub fn header_line(&self) -> String {
        header_line(&self.implementation_name)
    }

    /// See [`workload_line`].
    pub fn workload_line(&self) -> String {
        workload_line(self.pushes_per_trial)
    }

    /// Third output line: `<name> Average over <trials> trials <ms> ms`.
    pub fn result_line(&self) -> String {
        format!(
            "{} Average over {} trials {} ms",
            self.implementation_name,
            self.trials,
            self.average_ms()
        )
    }

    /// All three output lines, in print order.
    pub fn lines(&self) -> [String; 3] {
        [self.header_line(), self.workload_line(), self.result_line()]
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [header, workload, result] = self.lines();
        write!(f, "{header}\n{workload}\n{result}")
    }
}
