//! JSON output format for analysis results
//!
//! `--format json` implementation

use crate::analysis::Analysis;
use serde::{Deserialize, Serialize};

/// A measurement statistic as JSON
///
/// JSON has no NaN or infinity, so non-finite values are written as the
/// strings `"NaN"`, `"inf"` and `"-inf"` instead of collapsing to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonFloat {
    Finite(f64),
    NonFinite(String),
}

impl From<f64> for JsonFloat {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            JsonFloat::Finite(value)
        } else {
            JsonFloat::NonFinite(value.to_string())
        }
    }
}

impl JsonFloat {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            JsonFloat::Finite(value) => Some(*value),
            JsonFloat::NonFinite(text) => text.parse().ok(),
        }
    }
}

/// Statistics for one test type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTest {
    /// Row index in the measurement table
    pub index: usize,
    /// Label of the first record in the row
    pub label: String,
    pub mean: JsonFloat,
    /// `null` only when the sample standard deviation is undefined (one iteration)
    pub std_dev: Option<JsonFloat>,
}

/// Top-level JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonOutput {
    pub version: String,
    pub format: String,
    pub iteration_count: usize,
    pub test_count: usize,
    /// False when each test has a single iteration and `std_devs` is empty
    pub std_dev_defined: bool,
    pub tests: Vec<JsonTest>,
    pub means: Vec<JsonFloat>,
    pub std_devs: Vec<JsonFloat>,
}

impl JsonOutput {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let stats = &analysis.statistics;
        let tests = stats
            .means
            .iter()
            .enumerate()
            .map(|(index, &mean)| JsonTest {
                index,
                label: analysis.labels.get(index).cloned().unwrap_or_default(),
                mean: mean.into(),
                std_dev: stats.std_dev(index).map(JsonFloat::from),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "runstats-json-v1".to_string(),
            iteration_count: analysis.shape.iteration_count(),
            test_count: analysis.shape.test_count(),
            std_dev_defined: stats.std_dev_defined(),
            tests,
            means: stats.means.iter().copied().map(JsonFloat::from).collect(),
            std_devs: stats.std_devs.iter().copied().map(JsonFloat::from).collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::table::Shape;

    fn sample(iterations: usize, tests: usize, text: &str) -> Analysis {
        let shape = Shape::new(iterations, tests).unwrap();
        crate::analysis::analyze(text, shape, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_json_contains_tests() {
        let analysis = sample(2, 2, "a:1\na:3\nb:5\nb:5\n");
        let output = JsonOutput::from_analysis(&analysis);
        let json = output.to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["format"], "runstats-json-v1");
        assert_eq!(parsed["test_count"], 2);
        assert_eq!(parsed["tests"][0]["label"], "a");
        assert_eq!(parsed["tests"][0]["mean"], 2.0);
        assert_eq!(parsed["tests"][1]["std_dev"], 0.0);
        assert_eq!(parsed["means"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_undefined_std_dev_is_null() {
        let analysis = sample(1, 2, "a:1\nb:2\n");
        let output = JsonOutput::from_analysis(&analysis);
        let parsed: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert!(parsed["tests"][0]["std_dev"].is_null());
        assert!(parsed["std_devs"].as_array().unwrap().is_empty());
        assert_eq!(parsed["std_dev_defined"], false);
    }

    #[test]
    fn test_json_non_finite_std_dev_is_not_undefined() {
        let analysis = sample(2, 1, "a:inf\na:1\n");
        assert!(analysis.statistics.std_devs[0].is_nan());

        let output = JsonOutput::from_analysis(&analysis);
        let json = output.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["std_dev_defined"], true);
        assert_eq!(parsed["tests"][0]["mean"], "inf");
        assert_eq!(parsed["tests"][0]["std_dev"], "NaN");
        assert_eq!(parsed["std_devs"][0], "NaN");

        let back: JsonOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
        assert!(back.tests[0].std_dev.as_ref().unwrap().to_f64().unwrap().is_nan());
        assert_eq!(back.tests[0].mean.to_f64(), Some(f64::INFINITY));
    }

    #[test]
    fn test_json_deserializes_back() {
        let analysis = sample(2, 1, "x:1\nx:2\n");
        let output = JsonOutput::from_analysis(&analysis);
        let back: JsonOutput = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(back, output);
    }
}
