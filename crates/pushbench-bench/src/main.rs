//! `pushbench`: push one million strings into a `Vec`, five times, and
//! print the average trial time.
//!
//! Takes no arguments. Set `RUST_LOG=debug` for diagnostics on stderr.

use std::error::Error;

use pushbench_bench::report::{header_line, workload_line};
use pushbench_bench::{logging, BenchConfig, Runner};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let runner = Runner::new(BenchConfig::default())?;
    let config = runner.config();

    println!("{}", header_line(&config.implementation_name));
    println!("{}", workload_line(config.pushes_per_trial));

    let report = runner.run::<Vec<&str>>();
    println!("{}", report.result_line());

    Ok(())
}
