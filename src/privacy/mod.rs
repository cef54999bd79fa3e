//! PII detection and masking
//!
//! Provides the pattern library and the decision engine:
//! - Regex and shape based recognizers per PII category
//! - One-way masking transforms per category
//! - Standalone classification of single field values
//! - Combinatorial evidence across the fields of a record
//! - Raw-text scanning for lines that are not JSON records

pub mod category;
pub mod classifier;
pub mod engine;
pub mod evidence;
pub mod masking;
pub mod patterns;
pub mod value;

pub use category::Category;
pub use classifier::{classify, Classification};
pub use engine::{LineOutcome, RecordReport, RedactionEngine};
pub use evidence::{Evidence, EvidenceSet};
pub use patterns::{PatternLibrary, Rule, ScanRule, STANDALONE_RULES};
pub use value::{FieldValue, Record};
