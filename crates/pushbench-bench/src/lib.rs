//! Append micro-benchmark for growable sequences.
//!
//! Times how long it takes to push one string value into a fresh growable
//! sequence one million times, repeated over five trials, and reports the
//! average per-trial duration in milliseconds:
//!
//! - [`BenchConfig`]: workload parameters, defaulting to the fixed run
//! - [`Sequence`]: the container seam, implemented for `Vec` and [`GrowVec`]
//! - [`Runner`]: the timed trial loop
//! - [`BenchReport`]: the measured result and its three output lines
//!
//! [`GrowVec`]: pushbench_vec::GrowVec

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod logging;
pub mod report;
pub mod runner;
pub mod sequence;

pub use config::{BenchConfig, ConfigError};
pub use report::BenchReport;
pub use runner::Runner;
pub use sequence::Sequence;
