//! Error taxonomy for the analysis pipeline
//!
//! Every error here is fatal to the current invocation: there are no retries
//! and no partial results.

use thiserror::Error;

/// Errors raised while turning raw benchmark text into statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error(
        "Invalid shape: iteration count and test count must be positive, got {iteration_count} iterations x {test_count} tests"
    )]
    InvalidShape {
        iteration_count: usize,
        test_count: usize,
    },

    #[error("Invalid value token '{token}' at position {position}: not a floating-point number")]
    Parse { token: String, position: usize },

    #[error("Insufficient data: need {required} values, got {actual}")]
    Shape { required: usize, actual: usize },

    #[error("Extra values: expected exactly {required} values, got {actual}")]
    ExtraValues { required: usize, actual: usize },

    #[error("Label '{label}' at position {position} has no value")]
    UnpairedLabel { label: String, position: usize },
}

impl AnalysisError {
    /// Name of the pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            AnalysisError::Parse { .. } | AnalysisError::UnpairedLabel { .. } => "parse",
            AnalysisError::InvalidShape { .. }
            | AnalysisError::Shape { .. }
            | AnalysisError::ExtraValues { .. } => "shape",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
