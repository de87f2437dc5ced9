//! Analysis configuration
//!
//! Settings can come from a TOML file and are then overridden by CLI flags:
//!
//! ```toml
//! delimiter = ","
//! mode = "strict"
//! ```

use crate::reader::{RecordReader, DEFAULT_DELIMITER};
use crate::table::ShapeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Characters `f64::from_str` accepts, including the `inf`/`infinity`/`nan` spellings
const FLOAT_LITERAL_CHARS: &str = "0123456789.+-eEinfinityINFINITYnanNAN";

/// Configuration for reading and reshaping benchmark output
///
/// # Example
/// ```
/// use runstats::config::AnalysisConfig;
/// use runstats::table::ShapeMode;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.delimiter, ':');
/// assert_eq!(config.mode, ShapeMode::Tolerant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Token delimiter, used in addition to newlines
    pub delimiter: char,

    /// Whether extra trailing values and a trailing unpaired label are
    /// ignored (tolerant) or rejected (strict)
    pub mode: ShapeMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            mode: ShapeMode::Tolerant,
        }
    }
}

impl AnalysisConfig {
    /// Reject input that does not exactly match the expected shape
    pub fn strict() -> Self {
        Self {
            mode: ShapeMode::Strict,
            ..Self::default()
        }
    }

    /// Ignore trailing noise after the expected values
    pub fn tolerant() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse analysis config")?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let d = self.delimiter;
        if d == '\n' || d == '\r' {
            return Err("delimiter must not be a line break".to_string());
        }
        if FLOAT_LITERAL_CHARS.contains(d) {
            return Err(format!(
                "delimiter '{}' can appear inside a number",
                d.escape_default()
            ));
        }
        Ok(())
    }

    pub fn reader(&self) -> RecordReader {
        RecordReader::new(self.delimiter)
    }
}
