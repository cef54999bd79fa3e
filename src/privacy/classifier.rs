//! Standalone classification: one field value at a time, independent of its name

use super::category::Category;
use super::patterns::{PatternLibrary, STANDALONE_RULES};
use super::value::FieldValue;

/// Classification result for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Whether the value is standalone PII
    pub is_pii: bool,
    /// Category of the first rule that matched
    pub category: Option<Category>,
    /// Replacement value (the original value when nothing matched)
    pub masked: FieldValue,
}

impl Classification {
    fn clean(value: &FieldValue) -> Self {
        Self {
            is_pii: false,
            category: None,
            masked: value.clone(),
        }
    }
}

/// Classify a field value against the standalone rules.
///
/// Only string values are considered. The value is trimmed before matching
/// and the masked replacement is derived from the trimmed text.
pub fn classify(library: &PatternLibrary, value: &FieldValue) -> Classification {
    let Some(text) = value.as_str() else {
        return Classification::clean(value);
    };
    let text = text.trim();

    STANDALONE_RULES
        .iter()
        .find(|rule| (rule.recognize)(library, text))
        .map(|rule| Classification {
            is_pii: true,
            category: Some(rule.category),
            masked: FieldValue::String((rule.mask)(text)),
        })
        .unwrap_or_else(|| Classification::clean(value))
}
