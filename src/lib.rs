//! runstats - Per-test statistics over interleaved benchmark output
//!
//! Benchmark harnesses append `label:value` pairs to a flat text file, one
//! run after another. This library reads that stream, groups the values into
//! one row per test type, and reports each row's mean and sample standard
//! deviation.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod reader;
pub mod stats;
pub mod table;
pub mod text_output;

pub use analysis::{analyze, Analysis};
pub use error::AnalysisError;
pub use stats::StatisticsResult;
