//! The timed trial loop.
//!
//! One start instant is taken before the first trial and one end instant
//! after the last; the total is divided by the trial count. No trial is
//! discarded as warm-up, so any first-touch cost lands in the average.

use std::time::Instant;

use crate::config::{BenchConfig, ConfigError};
use crate::report::BenchReport;
use crate::sequence::Sequence;

/// Runs the append workload described by a validated [`BenchConfig`].
#[derive(Clone, Debug)]
pub struct Runner {
    config: BenchConfig,
}

impl Runner {
    /// Validate `config` and build a runner for it.
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The config this runner was built with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Time the workload using sequence type `S`.
    ///
    /// Each finished accumulator passes through [`std::hint::black_box`]
    /// before it is dropped so the pushes cannot be optimised away.
    pub fn run<'a, S>(&'a self) -> BenchReport
    where
        S: Sequence<&'a str>,
    {
        self.run_observed::<S, _>(|_, accumulator| {
            std::hint::black_box(accumulator);
        })
    }

    /// Time the workload, handing each finished accumulator to `observer`.
    ///
    /// `observer` receives the zero-based trial index and the accumulator
    /// just before it is dropped. It runs inside the timed region.
    pub fn run_observed<'a, S, F>(&'a self, mut observer: F) -> BenchReport
    where
        S: Sequence<&'a str>,
        F: FnMut(u32, &S),
    {
        let value: &'a str = &self.config.test_value;
        let pushes = self.config.pushes_per_trial;
        let trials = self.config.trials;

        tracing::debug!(
            implementation = %self.config.implementation_name,
            pushes,
            trials,
            "starting append benchmark"
        );

        let start = Instant::now();
        for trial in 0..trials {
            let mut accumulator = S::empty();
            for _ in 0..pushes {
                accumulator.push_value(value);
            }
            observer(trial, &accumulator);
            tracing::debug!(trial, len = accumulator.len(), "trial complete");
        }
        let elapsed = start.elapsed();

        let report = BenchReport::from_validated(&self.config, elapsed);
        tracing::info!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            average_ms = report.average_ms(),
            "append benchmark finished"
        );
        report
    }
}
