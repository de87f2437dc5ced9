//! Human-readable report (default output format)

use crate::stats::StatisticsResult;

/// Two-line report: per-test averages, then per-test standard deviations
///
/// Values are printed with `{:?}` so whole numbers keep their fractional
/// part (`10.0`, not `10`). The deviation list is empty when undefined.
pub fn format_text(stats: &StatisticsResult) -> String {
    format!(
        "average: {:?}\nstandard deviation: {:?}\n",
        stats.means, stats.std_devs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let stats = StatisticsResult {
            means: vec![2.5, 10.0],
            std_devs: vec![0.5, 0.0],
        };
        assert_eq!(
            format_text(&stats),
            "average: [2.5, 10.0]\nstandard deviation: [0.5, 0.0]\n"
        );
    }

    #[test]
    fn test_text_report_undefined_std_dev() {
        let stats = StatisticsResult {
            means: vec![4.0],
            std_devs: vec![],
        };
        assert_eq!(
            format_text(&stats),
            "average: [4.0]\nstandard deviation: []\n"
        );
    }
}
