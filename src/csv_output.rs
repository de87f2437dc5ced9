//! CSV output format for analysis results
//!
//! One row per test type, for spreadsheet analysis and machine parsing.

use crate::analysis::Analysis;

/// CSV record for a single test type
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTest {
    pub index: usize,
    pub label: String,
    pub mean: f64,
    pub std_dev: Option<f64>,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    tests: Vec<CsvTest>,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_analysis(analysis: &Analysis) -> Self {
        let stats = &analysis.statistics;
        let mut output = Self::new();
        for (index, &mean) in stats.means.iter().enumerate() {
            output.add_test(CsvTest {
                index,
                label: analysis.labels.get(index).cloned().unwrap_or_default(),
                mean,
                std_dev: stats.std_dev(index),
            });
        }
        output
    }

    pub fn add_test(&mut self, test: CsvTest) {
        self.tests.push(test);
    }

    fn header() -> &'static str {
        "test,label,mean,std_dev"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_test(test: &CsvTest) -> String {
        let std_dev = test.std_dev.map(|s| s.to_string()).unwrap_or_default();
        format!(
            "{},{},{},{}",
            test.index,
            Self::escape_field(&test.label),
            test.mean,
            std_dev
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for test in &self.tests {
            output.push_str(&Self::format_test(test));
            output.push('\n');
        }

        output
    }
}
