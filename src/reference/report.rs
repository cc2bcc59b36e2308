use std::io::Write;
use anyhow::Result;
use log::{info, warn};

use super::cases::ReferenceCase;
use crate::rank::{RankCalculator, Specificity};

/// Largest relative error on rank or index that still counts as a pass
pub const ACCEPTABLE_ERROR: f64 = 0.05;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Relative error, or absolute error when the expected value is zero
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected == 0.0 {
        return (actual - expected).abs();
    }
    (actual - expected).abs() / expected
}

/// Outcome of scoring one reference case
#[derive(Debug, Clone)]
pub struct RegressionRow {
    pub case: ReferenceCase,
    pub actual: Specificity,
    pub rank_error: f64,
    pub index_error: f64,
}

impl RegressionRow {
    pub fn passed(&self) -> bool {
        self.rank_error <= ACCEPTABLE_ERROR && self.index_error <= ACCEPTABLE_ERROR
    }
}

#[derive(Debug, Clone)]
pub struct RegressionReport {
    pub rows: Vec<RegressionRow>,
}

impl RegressionReport {
    /// Score every case with `calculator` and compare against the
    /// published values
    pub fn run(calculator: &RankCalculator, cases: &[ReferenceCase]) -> Result<Self> {
        let mut rows = Vec::with_capacity(cases.len());

        for (i, case) in cases.iter().enumerate() {
            let actual = calculator.score(case.hosts)?;
            let row = RegressionRow {
                case: *case,
                actual,
                rank_error: relative_error(case.rank as f64, actual.rank as f64),
                index_error: relative_error(case.index, actual.index),
            };

            if !row.passed() {
                warn!(
                    "Reference case {} ({}) out of tolerance: rank {} vs {}, index {:.4} vs {:.4}",
                    i, case.hosts, actual.rank, case.rank, actual.index, case.index
                );
            }
            rows.push(row);
        }

        let report = RegressionReport { rows };
        info!("Reference cases passed: {}/{}", report.passed(), report.rows.len());
        Ok(report)
    }

    pub fn passed(&self) -> usize {
        self.rows.iter().filter(|row| row.passed()).count()
    }

    /// Fraction of cases within tolerance
    pub fn pass_rate(&self) -> f64 {
        if self.rows.is_empty() {
            return 1.0;
        }
        self.passed() as f64 / self.rows.len() as f64
    }

    /// Fixed-width table of every case followed by the pass tally
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W, color: bool) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{:>34}{:>49}{:>36}", "Hosts", "Rank", "Index")?;
        writeln!(writer, "{}{}", " ".repeat(6), "-".repeat(126))?;
        writeln!(
            writer,
            "{:<5} |  {:<10} {:<9} {:<11} {:<9} {:<8} |  {:>11}  {:>11} {:>8}  |  {:<11} {:<9} {:<6} |  {}",
            "Test", "Species", "Genera", "Families", "Orders", "Classes",
            "Expected", "Actual", "Error", "Expected", "Actual", "Error", "Pass"
        )?;
        writeln!(writer, "{}", "-".repeat(138))?;

        for (i, row) in self.rows.iter().enumerate() {
            let hosts = &row.case.hosts;
            writeln!(
                writer,
                "{:<5} |  {:<10} {:<9} {:<11} {:<9} {:<8} |  {:>11}  {:>11} {:>8.3}  |  {:<11.3} {:<9.4} {:<6.3} |  {}",
                i,
                hosts.species,
                hosts.genera,
                hosts.families,
                hosts.orders,
                hosts.classes,
                row.case.rank,
                row.actual.rank,
                row.rank_error,
                row.case.index,
                row.actual.index,
                row.index_error,
                if row.passed() { "ok" } else { "FAIL" },
            )?;
        }

        let tally = format!("Passed {}/{}", self.passed(), self.rows.len());
        if color {
            let rate = self.pass_rate();
            let code = if rate == 1.0 {
                GREEN
            } else if rate >= 0.75 {
                YELLOW
            } else {
                RED
            };
            writeln!(writer, "\n{}{}{}\n", code, tally, RESET)?;
        } else {
            writeln!(writer, "\n{}\n", tally)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::HostProfile;
    use crate::reference::REFERENCE_CASES;
    use approx::assert_abs_diff_eq;

    fn report() -> RegressionReport {
        RegressionReport::run(&RankCalculator::default(), REFERENCE_CASES).unwrap()
    }

    #[test]
    fn test_relative_error() {
        assert_abs_diff_eq!(relative_error(100.0, 105.0), 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(relative_error(0.0, 0.25), 0.25);
        assert_abs_diff_eq!(relative_error(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_every_reference_case_within_tolerance() {
        let report = report();
        for (i, row) in report.rows.iter().enumerate() {
            assert!(
                row.passed(),
                "case {} ({}) rank error {:.4} index error {:.4}",
                i,
                row.case.hosts,
                row.rank_error,
                row.index_error
            );
        }
        assert_eq!(report.passed(), REFERENCE_CASES.len());
    }

    #[test]
    fn test_reference_ranks_pinned() {
        // these three differ from the published ranks but stay in tolerance
        let ranks: Vec<i64> = report().rows.iter().map(|row| row.actual.rank).collect();
        assert_eq!(ranks[17], 91_325_602);
        assert_eq!(ranks[18], 312_908_095);
        assert_eq!(ranks[20], 46_411_303);
        for i in [0, 4, 8, 12, 13, 14, 16, 26] {
            assert_eq!(ranks[i], REFERENCE_CASES[i].rank, "case {}", i);
        }
    }

    #[test]
    fn test_failing_case_reported() {
        let cases = [ReferenceCase {
            hosts: HostProfile::new(10, 1, 1, 1, 1),
            rank: 20,
            index: 1.0,
        }];
        let report = RegressionReport::run(&RankCalculator::default(), &cases).unwrap();
        assert_eq!(report.passed(), 0);
        assert_abs_diff_eq!(report.rows[0].rank_error, 0.5);

        let mut out = Vec::new();
        report.render(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("FAIL"));
        assert!(text.contains(&format!("{}Passed 0/1{}", RED, RESET)));
    }

    #[test]
    fn test_render_plain_tally() {
        let mut out = Vec::new();
        report().render(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Passed 27/27"));
        assert!(!text.contains('\x1b'));
        // column header plus one line per case
        let table_lines = text.lines().filter(|line| line.contains(" |  ")).count();
        assert_eq!(table_lines, REFERENCE_CASES.len() + 1);
    }
}
