//! Pattern library: recognizers and rule tables for every PII category
//!
//! The library is built once from [`PrivacyConfig`] and shared read-only by
//! every record the engine processes.

use super::category::Category;
use super::masking;
use crate::config::{PrivacyConfig, RedactionMarkers};
use crate::error::{Error, Result};
use regex::Regex;

/// Ten digits, optionally behind `+91`, `91` or `(0)`. Searched anywhere.
const PHONE_PATTERN: &str = r"(?:\+91[-\s]?|91[-\s]?|\(0\))?[0-9]{10}\b";

/// Twelve digits, optionally grouped 4-4-4 with spaces or hyphens.
const NATIONAL_ID_PATTERN: &str = r"\b(?:[0-9]{4}[-\s]?[0-9]{4}[-\s]?[0-9]{4}|[0-9]{12})\b";

const PASSPORT_PATTERN: &str = r"\b[A-Z][0-9]{7}\b";

const EMAIL_PATTERN: &str = r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9._-]+\.[a-zA-Z]{2,}\b";

/// Broader than email: the handle needs no dot.
const UPI_PATTERN: &str = r"\b[a-zA-Z0-9._-]+@[a-zA-Z0-9]+\b";

/// A standalone rule: recognizer and masker for one category.
#[derive(Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub recognize: fn(&PatternLibrary, &str) -> bool,
    pub mask: fn(&str) -> String,
}

/// Standalone pass rules in priority order. First match wins.
pub const STANDALONE_RULES: &[Rule] = &[
    Rule {
        category: Category::Email,
        recognize: PatternLibrary::is_email,
        mask: masking::mask_handle,
    },
    Rule {
        category: Category::UpiHandle,
        recognize: PatternLibrary::is_upi_handle,
        mask: masking::mask_handle,
    },
    Rule {
        category: Category::Phone,
        recognize: PatternLibrary::contains_phone,
        mask: masking::mask_phone,
    },
    Rule {
        category: Category::Passport,
        recognize: PatternLibrary::is_passport,
        mask: masking::mask_passport,
    },
    Rule {
        category: Category::NationalId,
        recognize: PatternLibrary::has_national_id_digits,
        mask: masking::mask_national_id,
    },
];

/// A raw-text scan rule used when a line is not a JSON record.
pub struct ScanRule<'a> {
    pub category: Category,
    pub regex: &'a Regex,
    /// Secondary check applied to each matched substring
    pub accept: fn(&PatternLibrary, &str) -> bool,
    pub mask: fn(&str) -> String,
}

/// Compiled recognizers plus the address vocabulary and redaction markers
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    phone: Regex,
    national_id: Regex,
    passport: Regex,
    email: Regex,
    upi: Regex,
    address_indicators: Vec<String>,
    markers: RedactionMarkers,
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::Privacy(format!("Invalid regex pattern for '{}': {}", name, e))
    })
}

/// True when `re` matches starting at the first character of `value`
fn matches_at_start(re: &Regex, value: &str) -> bool {
    re.find(value).is_some_and(|m| m.start() == 0)
}

impl PatternLibrary {
    /// Compile the library from privacy configuration
    pub fn new(config: &PrivacyConfig) -> Result<Self> {
        let library = Self {
            phone: compile("phone", PHONE_PATTERN)?,
            national_id: compile("national_id", NATIONAL_ID_PATTERN)?,
            passport: compile("passport", PASSPORT_PATTERN)?,
            email: compile("email", EMAIL_PATTERN)?,
            upi: compile("upi_handle", UPI_PATTERN)?,
            address_indicators: config
                .address_indicators
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            markers: config.markers.clone(),
        };
        tracing::debug!(
            indicators = library.address_indicators.len(),
            "Compiled PII pattern library"
        );
        Ok(library)
    }

    pub fn is_email(&self, value: &str) -> bool {
        matches_at_start(&self.email, value)
    }

    pub fn is_upi_handle(&self, value: &str) -> bool {
        matches_at_start(&self.upi, value)
    }

    /// Phone numbers are searched, not anchored
    pub fn contains_phone(&self, value: &str) -> bool {
        self.phone.is_match(value)
    }

    pub fn is_passport(&self, value: &str) -> bool {
        matches_at_start(&self.passport, value)
    }

    /// Exactly twelve digits once everything else is stripped
    pub fn has_national_id_digits(&self, value: &str) -> bool {
        value.chars().filter(char::is_ascii_digit).count() == 12
    }

    /// At least two words, each made only of letters (periods ignored)
    pub fn is_full_name(&self, value: &str) -> bool {
        let words: Vec<&str> = value.split_whitespace().collect();
        words.len() >= 2
            && words.iter().all(|word| {
                let mut letters = word.chars().filter(|c| *c != '.').peekable();
                letters.peek().is_some() && letters.all(char::is_alphabetic)
            })
    }

    /// At least three words with a digit, and either an address keyword or a
    /// comma with at least four words
    pub fn is_address(&self, value: &str) -> bool {
        let words = value.split_whitespace().count();
        if words < 3 {
            return false;
        }
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        if !has_digit {
            return false;
        }
        let lower = value.to_lowercase();
        let has_indicator = self
            .address_indicators
            .iter()
            .any(|k| lower.contains(k.as_str()));
        has_indicator || (value.contains(',') && words >= 4)
    }

    pub fn markers(&self) -> &RedactionMarkers {
        &self.markers
    }

    /// Fallback scan rules in priority order
    pub fn scan_rules(&self) -> [ScanRule<'_>; 5] {
        [
            ScanRule {
                category: Category::Email,
                regex: &self.email,
                accept: Self::is_email,
                mask: masking::mask_handle,
            },
            ScanRule {
                category: Category::UpiHandle,
                regex: &self.upi,
                accept: Self::is_upi_handle,
                mask: masking::mask_handle,
            },
            ScanRule {
                category: Category::NationalId,
                regex: &self.national_id,
                accept: Self::has_national_id_digits,
                mask: masking::mask_national_id,
            },
            ScanRule {
                category: Category::Phone,
                regex: &self.phone,
                accept: accept_any,
                mask: masking::mask_phone,
            },
            ScanRule {
                category: Category::Passport,
                regex: &self.passport,
                accept: accept_any,
                mask: masking::mask_passport,
            },
        ]
    }
}

fn accept_any(_: &PatternLibrary, _: &str) -> bool {
    true
}
