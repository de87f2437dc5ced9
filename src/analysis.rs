//! Text in, statistics out
//!
//! Pure pipeline: record reader, reshape, reduce. No I/O happens here; the
//! caller supplies the file contents and decides how to report the result.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::stats::{self, StatisticsResult};
use crate::table::{MeasurementTable, Shape};

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub shape: Shape,
    /// One label per test, taken from the first record of each row
    pub labels: Vec<String>,
    pub statistics: StatisticsResult,
}

/// Run the whole pipeline over the contents of a benchmark output file
///
/// # Example
/// ```
/// use runstats::analysis::analyze;
/// use runstats::config::AnalysisConfig;
/// use runstats::table::Shape;
///
/// let text = "fast:1\nfast:3\nslow:10\nslow:14\n";
/// let shape = Shape::new(2, 2).unwrap();
/// let analysis = analyze(text, shape, &AnalysisConfig::default()).unwrap();
/// assert_eq!(analysis.statistics.means, vec![2.0, 12.0]);
/// ```
pub fn analyze(text: &str, shape: Shape, config: &AnalysisConfig) -> Result<Analysis> {
    let _span = tracing::debug_span!(
        "analyze",
        iterations = shape.iteration_count(),
        tests = shape.test_count()
    )
    .entered();

    let stream = config.reader().read(text)?;
    let table = MeasurementTable::from_records(&stream, shape, config.mode)?;
    let statistics = stats::reduce(&table);

    tracing::debug!(
        records = stream.len(),
        std_dev_defined = statistics.std_dev_defined(),
        "analysis complete"
    );

    Ok(Analysis {
        shape: table.shape(),
        labels: table.labels().to_vec(),
        statistics,
    })
}
