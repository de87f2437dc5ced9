//! CLI argument parsing for runstats

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default input file, written by the benchmark harness in the working directory
pub const DEFAULT_INPUT: &str = "data.tempdata";

/// Output format for the statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "runstats")]
#[command(version)]
#[command(
    about = "Per-test mean and sample standard deviation of interleaved benchmark output",
    long_about = None
)]
pub struct Cli {
    /// Number of measurements recorded for each test type
    #[arg(value_name = "ITERATIONS", value_parser = clap::value_parser!(u64).range(1..))]
    pub iterations: u64,

    /// Number of distinct test types
    #[arg(value_name = "TESTS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tests: u64,

    /// Benchmark output file to analyze
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Token delimiter (newlines always separate tokens)
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Reject extra trailing values or a trailing label without a value
    #[arg(long = "strict")]
    pub strict: bool,

    /// Load delimiter and mode from a TOML config file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_counts() {
        let cli = Cli::parse_from(["runstats", "5", "3"]);
        assert_eq!(cli.iterations, 5);
        assert_eq!(cli.tests, 3);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["runstats", "5", "3"]);
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.delimiter, None);
        assert!(!cli.strict);
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_rejects_zero_counts() {
        assert!(Cli::try_parse_from(["runstats", "0", "3"]).is_err());
        assert!(Cli::try_parse_from(["runstats", "5", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_missing_counts() {
        assert!(Cli::try_parse_from(["runstats", "5"]).is_err());
        assert!(Cli::try_parse_from(["runstats"]).is_err());
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::parse_from([
            "runstats",
            "--input",
            "bench.out",
            "-d",
            ",",
            "--strict",
            "--format",
            "json",
            "--config",
            "runstats.toml",
            "--debug",
            "10",
            "4",
        ]);
        assert_eq!(cli.input, PathBuf::from("bench.out"));
        assert_eq!(cli.delimiter, Some(','));
        assert!(cli.strict);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("runstats.toml")));
        assert!(cli.debug);
        assert_eq!(cli.iterations, 10);
        assert_eq!(cli.tests, 4);
    }
}
