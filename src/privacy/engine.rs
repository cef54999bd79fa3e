//! Decision engine
//!
//! Combines the standalone pass (single field, unambiguous PII) with the
//! combinatorial pass (several weak signals across a record) and merges both
//! into a redacted copy of the record.
//!
//! ```text
//! line ──► JSON object? ──yes──► standalone pass ──┐
//!              │                                    ├──► merge ──► redacted JSON, found
//!              │               combinatorial pass ──┘
//!              no
//!              └──► raw-text scan ──► substituted text, found
//! ```

use std::collections::BTreeSet;

use super::category::Category;
use super::classifier;
use super::evidence;
use super::patterns::PatternLibrary;
use super::value::{FieldValue, Record};
use crate::config::PrivacyConfig;
use crate::error::Result;

/// Outcome of redacting one structured record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    /// Redacted copy with the same keys as the input
    pub redacted: Record,
    /// Standalone PII found, or the combinatorial trigger fired
    pub found: bool,
    /// Whether combinatorial evidence was applied
    pub combination_triggered: bool,
    /// Categories that changed the record
    pub categories: BTreeSet<Category>,
}

/// Outcome of processing one raw input line
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// Serialized redacted record, or the substituted raw text
    pub text: String,
    pub found: bool,
    /// The line was not a JSON object and went through the raw-text scan
    pub malformed: bool,
    pub categories: BTreeSet<Category>,
}

/// PII redaction engine.
///
/// Holds only immutable state, so a single engine can be shared across
/// threads and records.
pub struct RedactionEngine {
    library: PatternLibrary,
    combination_threshold: usize,
}

impl RedactionEngine {
    /// Build an engine from privacy configuration
    pub fn new(config: &PrivacyConfig) -> Result<Self> {
        Ok(Self {
            library: PatternLibrary::new(config)?,
            combination_threshold: config.combination_threshold,
        })
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Redact a structured record, returning the redacted copy and whether any
    /// PII was found
    pub fn classify_and_mask(&self, record: &Record) -> (Record, bool) {
        let report = self.inspect(record);
        (report.redacted, report.found)
    }

    /// Redact a structured record and report which categories contributed.
    ///
    /// Combinatorial masks are written after standalone masks and may
    /// overwrite them. Combinatorial masks are always derived from the
    /// original values.
    pub fn inspect(&self, record: &Record) -> RecordReport {
        let mut redacted = record.clone();
        let mut categories = BTreeSet::new();
        let mut standalone_found = false;

        for (key, value) in record.iter() {
            let classification = classifier::classify(&self.library, value);
            if classification.is_pii {
                redacted.replace(key, classification.masked);
                categories.extend(classification.category);
                standalone_found = true;
            }
        }

        let evidence = evidence::collect(&self.library, record);
        let combination_triggered = evidence.is_triggered(self.combination_threshold);
        if combination_triggered {
            for entry in evidence.iter() {
                for (key, masked) in &entry.replacements {
                    redacted.replace(key, FieldValue::String(masked.clone()));
                }
                categories.insert(entry.category);
            }
        }

        RecordReport {
            redacted,
            found: standalone_found || combination_triggered,
            combination_triggered,
            categories,
        }
    }

    /// Degraded mode for text that is not a JSON record: mask every substring
    /// that matches a recognizer. `found` is true when the text changed.
    pub fn scan_and_mask(&self, text: &str) -> (String, bool) {
        let (scanned, _) = self.scan(text);
        let found = scanned != text;
        (scanned, found)
    }

    fn scan(&self, text: &str) -> (String, BTreeSet<Category>) {
        let mut current = text.to_string();
        let mut categories = BTreeSet::new();

        for rule in self.library.scan_rules() {
            let mut matches: Vec<String> = Vec::new();
            for m in rule.regex.find_iter(&current) {
                let candidate = m.as_str();
                if (rule.accept)(&self.library, candidate)
                    && !matches.iter().any(|seen| seen == candidate)
                {
                    matches.push(candidate.to_string());
                }
            }

            for matched in matches {
                let masked = (rule.mask)(&matched);
                if masked != matched && current.contains(matched.as_str()) {
                    current = current.replace(matched.as_str(), &masked);
                    categories.insert(rule.category);
                }
            }
        }

        (current, categories)
    }

    /// Process one raw line: structured redaction when it is a JSON object,
    /// raw-text scanning otherwise
    pub fn process_line(&self, line: &str) -> Result<LineOutcome> {
        match Record::parse(line) {
            Some(record) => {
                let report = self.inspect(&record);
                Ok(LineOutcome {
                    text: report.redacted.to_json()?,
                    found: report.found,
                    malformed: false,
                    categories: report.categories,
                })
            }
            None => {
                let (text, categories) = self.scan(line);
                let found = text != line;
                Ok(LineOutcome {
                    text,
                    found,
                    malformed: true,
                    categories,
                })
            }
        }
    }
}
