//! Per-test statistics over a measurement table
//!
//! Mean and Bessel-corrected (sample) standard deviation for each row.

use crate::table::MeasurementTable;
use serde::{Deserialize, Serialize};

/// Mean and sample standard deviation of every test
///
/// `means` always has one entry per test. `std_devs` is empty when each test
/// has a single iteration, since the sample standard deviation is undefined
/// for `n <= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

impl StatisticsResult {
    /// Whether standard deviations were computed
    pub fn std_dev_defined(&self) -> bool {
        !self.std_devs.is_empty() || self.means.is_empty()
    }

    pub fn mean(&self, index: usize) -> Option<f64> {
        self.means.get(index).copied()
    }

    /// Standard deviation of test `index`, `None` when undefined
    pub fn std_dev(&self, index: usize) -> Option<f64> {
        self.std_devs.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Arithmetic mean, `sum / n`
pub fn mean(row: &[f64]) -> f64 {
    row.iter().sum::<f64>() / row.len() as f64
}

/// Sample standard deviation around a precomputed mean
///
/// Returns `None` for fewer than two values.
pub fn sample_std_dev(row: &[f64], mean: f64) -> Option<f64> {
    let n = row.len();
    if n <= 1 {
        return None;
    }
    let sum_sq: f64 = row.iter().map(|x| (x - mean).powi(2)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}

/// Reduce every row of the table to its mean and sample standard deviation
pub fn reduce(table: &MeasurementTable) -> StatisticsResult {
    let means: Vec<f64> = table.rows().map(mean).collect();

    let std_devs = if table.iteration_count() <= 1 {
        tracing::debug!(
            iterations = table.iteration_count(),
            "standard deviation undefined for a single iteration"
        );
        Vec::new()
    } else {
        table
            .rows()
            .zip(&means)
            .filter_map(|(row, &m)| sample_std_dev(row, m))
            .collect()
    };

    StatisticsResult { means, std_devs }
}
