//! Measurement table: one row per test type, one column per iteration
//!
//! Values are laid out row-major, so row `i`, column `j` is flat value
//! `i * iteration_count + j`.

use crate::error::{AnalysisError, Result};
use crate::reader::RecordStream;
use serde::{Deserialize, Serialize};

/// Expected layout of the measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    iteration_count: usize,
    test_count: usize,
}

impl Shape {
    /// Both counts must be positive and their product must fit in `usize`
    pub fn new(iteration_count: usize, test_count: usize) -> Result<Self> {
        if iteration_count == 0
            || test_count == 0
            || iteration_count.checked_mul(test_count).is_none()
        {
            return Err(AnalysisError::InvalidShape {
                iteration_count,
                test_count,
            });
        }
        Ok(Self {
            iteration_count,
            test_count,
        })
    }

    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Number of values needed to fill the table
    pub fn required(&self) -> usize {
        self.iteration_count * self.test_count
    }
}

/// How to treat input that does not exactly match the shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Ignore extra trailing values and a trailing label with no value
    #[default]
    Tolerant,
    /// Reject anything beyond exactly `test_count * iteration_count` records
    Strict,
}

/// Measurements grouped by test type
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    shape: Shape,
    values: Vec<f64>,
    labels: Vec<String>,
}

impl MeasurementTable {
    /// Reshape a record stream into `test_count` rows of `iteration_count` values
    pub fn from_records(
        stream: &RecordStream<'_>,
        shape: Shape,
        mode: ShapeMode,
    ) -> Result<Self> {
        let required = shape.required();
        let actual = stream.len();

        if actual < required {
            return Err(AnalysisError::Shape { required, actual });
        }

        match mode {
            ShapeMode::Strict => {
                if actual > required {
                    return Err(AnalysisError::ExtraValues { required, actual });
                }
                if let Some(dangling) = stream.dangling_label() {
                    return Err(AnalysisError::UnpairedLabel {
                        label: dangling.label.to_string(),
                        position: dangling.position,
                    });
                }
            }
            ShapeMode::Tolerant => {
                if actual > required {
                    tracing::warn!(
                        required,
                        ignored = actual - required,
                        "ignoring extra trailing values"
                    );
                }
                if let Some(dangling) = stream.dangling_label() {
                    tracing::warn!(
                        label = dangling.label,
                        position = dangling.position,
                        "ignoring trailing label with no value"
                    );
                }
            }
        }

        let records = &stream.records()[..required];
        let values = records.iter().map(|r| r.value).collect();
        let labels = records
            .chunks(shape.iteration_count())
            .map(|row| row[0].label.trim().to_string())
            .collect();

        Ok(Self {
            shape,
            values,
            labels,
        })
    }

    /// Build a table directly from row-major values
    pub fn from_values(values: Vec<f64>, shape: Shape) -> Result<Self> {
        let required = shape.required();
        if values.len() != required {
            return Err(AnalysisError::Shape {
                required,
                actual: values.len(),
            });
        }
        Ok(Self {
            shape,
            values,
            labels: vec![String::new(); shape.test_count()],
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn test_count(&self) -> usize {
        self.shape.test_count()
    }

    pub fn iteration_count(&self) -> usize {
        self.shape.iteration_count()
    }

    /// Measurements of test `index` across all iterations
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        let n = self.shape.iteration_count();
        let start = index.checked_mul(n)?;
        self.values.get(start..start.checked_add(n)?)
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, f64> {
        self.values.chunks(self.shape.iteration_count())
    }

    /// Label of the first record in each row
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
