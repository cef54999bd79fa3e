//! Run statistics

use std::collections::BTreeMap;

use crate::privacy::{Category, LineOutcome};

/// Counters for one processed input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows written to the output
    pub rows_processed: usize,
    /// Rows whose payload contained PII
    pub rows_flagged: usize,
    /// Rows skipped for having fewer than two columns
    pub rows_skipped: usize,
    /// Rows whose payload was not a JSON object
    pub malformed_rows: usize,
    /// Rows per detected category
    pub categories: BTreeMap<Category, usize>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.rows_processed += 1;
        if outcome.found {
            self.rows_flagged += 1;
        }
        if outcome.malformed {
            self.malformed_rows += 1;
        }
        for category in &outcome.categories {
            *self.categories.entry(*category).or_default() += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.rows_skipped += 1;
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rows processed: {}", self.rows_processed)?;
        writeln!(f, "Rows with PII: {}", self.rows_flagged)?;
        writeln!(f, "Rows skipped: {}", self.rows_skipped)?;
        write!(f, "Malformed rows: {}", self.malformed_rows)?;
        for (category, count) in &self.categories {
            write!(f, "\n  {}: {}", category, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn outcome(found: bool, malformed: bool, categories: &[Category]) -> LineOutcome {
        LineOutcome {
            text: String::new(),
            found,
            malformed,
            categories: categories.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_counts() {
        let mut summary = RunSummary::default();
        summary.record(&outcome(true, false, &[Category::Email, Category::Phone]));
        summary.record(&outcome(true, true, &[Category::Phone]));
        summary.record(&outcome(false, false, &[]));
        summary.record_skipped();

        assert_eq!(summary.rows_processed, 3);
        assert_eq!(summary.rows_flagged, 2);
        assert_eq!(summary.malformed_rows, 1);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.categories.get(&Category::Phone), Some(&2));
        assert_eq!(summary.categories.get(&Category::Email), Some(&1));
    }

    #[test]
    fn test_display() {
        let mut summary = RunSummary::default();
        summary.record(&outcome(true, false, &[Category::Passport]));
        let text = summary.to_string();
        assert!(text.contains("Rows processed: 1"));
        assert!(text.contains("passport: 1"));
    }
}
