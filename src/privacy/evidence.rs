//! Combinatorial evidence
//!
//! Names, addresses and device or network identifiers are weak signals on
//! their own. This pass looks at field names together with values and
//! collects one evidence entry per category. The engine only acts on the
//! collected evidence once enough distinct categories are present.

use super::category::Category;
use super::masking;
use super::patterns::PatternLibrary;
use super::value::Record;

/// Evidence gathered for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub category: Category,
    /// Original (trimmed) value; name combos join both halves with a space
    pub original: String,
    /// Field key and masked value pairs to write when the evidence is applied
    pub replacements: Vec<(String, String)>,
}

impl Evidence {
    fn single(category: Category, key: &str, original: &str, masked: String) -> Self {
        Self {
            category,
            original: original.to_string(),
            replacements: vec![(key.to_string(), masked)],
        }
    }

    /// Keys this evidence rewrites
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.replacements.iter().map(|(k, _)| k.as_str())
    }
}

/// Evidence keyed by category, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct EvidenceSet {
    entries: Vec<Evidence>,
}

impl EvidenceSet {
    /// Record evidence; a later entry for the same category replaces the
    /// earlier one in place
    pub fn record(&mut self, evidence: Evidence) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.category == evidence.category)
        {
            Some(slot) => *slot = evidence,
            None => self.entries.push(evidence),
        }
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether at least `threshold` distinct categories were collected
    pub fn is_triggered(&self, threshold: usize) -> bool {
        self.entries.len() >= threshold
    }

    pub fn get(&self, category: Category) -> Option<&Evidence> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evidence> {
        self.entries.iter()
    }
}

/// Collect combinatorial evidence from every string field of `record`.
///
/// Rules per field, first match wins:
/// 1. `first_name` with a non-empty `last_name` sibling: name combo
/// 2. key containing `name` with a full-name shaped value
/// 3. email shaped value
/// 4. address shaped value
/// 5. key `ip` / `ip_address`
/// 6. key `device_id` / `device_identifier`
///
/// A `first_name` field whose `last_name` sibling is missing, blank or not a
/// string is not a name combo and continues with rules 2 to 6.
pub fn collect(library: &PatternLibrary, record: &Record) -> EvidenceSet {
    let mut set = EvidenceSet::default();
    for (key, value) in record.iter() {
        let Some(text) = value.as_str() else {
            continue;
        };
        if let Some(evidence) = field_evidence(library, record, key, text.trim()) {
            set.record(evidence);
        }
    }
    set
}

fn field_evidence(
    library: &PatternLibrary,
    record: &Record,
    key: &str,
    value: &str,
) -> Option<Evidence> {
    let markers = library.markers();
    name_combo(record, key, value)
        .or_else(|| {
            (key.to_lowercase().contains("name") && library.is_full_name(value)).then(|| {
                Evidence::single(Category::FullName, key, value, masking::mask_name(value))
            })
        })
        .or_else(|| {
            library.is_email(value).then(|| {
                Evidence::single(Category::Email, key, value, masking::mask_handle(value))
            })
        })
        .or_else(|| {
            library.is_address(value).then(|| {
                Evidence::single(Category::Address, key, value, markers.address.clone())
            })
        })
        .or_else(|| {
            (key.eq_ignore_ascii_case("ip_address") || key.eq_ignore_ascii_case("ip")).then(|| {
                Evidence::single(Category::IpAddress, key, value, markers.ip_address.clone())
            })
        })
        .or_else(|| {
            (key.eq_ignore_ascii_case("device_id") || key.eq_ignore_ascii_case("device_identifier"))
                .then(|| {
                    Evidence::single(Category::DeviceId, key, value, markers.device_id.clone())
                })
        })
}

fn name_combo(record: &Record, key: &str, first: &str) -> Option<Evidence> {
    if !key.eq_ignore_ascii_case("first_name") {
        return None;
    }
    let (last_key, last_value) = record.find_ignore_case("last_name")?;
    let last = last_value.as_str()?.trim();
    if last.is_empty() {
        return None;
    }
    Some(Evidence {
        category: Category::NameCombo,
        original: format!("{} {}", first, last),
        replacements: vec![
            (key.to_string(), masking::mask_name(first)),
            (last_key.to_string(), masking::mask_name(last)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrivacyConfig;
    use crate::privacy::value::FieldValue;

    fn library() -> PatternLibrary {
        PatternLibrary::new(&PrivacyConfig::default()).unwrap()
    }

    fn record(text: &str) -> Record {
        Record::parse(text).unwrap()
    }

    #[test]
    fn test_name_combo() {
        let set = collect(
            &library(),
            &record(r#"{"first_name": "Amit", "last_name": "Kumar"}"#),
        );
        assert_eq!(set.len(), 1);
        let combo = set.get(Category::NameCombo).unwrap();
        assert_eq!(combo.original, "Amit Kumar");
        assert_eq!(
            combo.replacements,
            vec![
                ("first_name".to_string(), "AXXX".to_string()),
                ("last_name".to_string(), "KXXXX".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_combo_preferred_for_first_name() {
        let set = collect(
            &library(),
            &record(r#"{"first_name": "Amit Raj", "last_name": "Kumar"}"#),
        );
        assert!(set.get(Category::NameCombo).is_some());
        assert!(set.get(Category::FullName).is_none());
    }

    #[test]
    fn test_first_name_without_sibling_falls_back_to_full_name() {
        let set = collect(
            &library(),
            &record(r#"{"first_name": "Amit Raj", "last_name": "  "}"#),
        );
        assert!(set.get(Category::NameCombo).is_none());
        let keys: Vec<_> = set.get(Category::FullName).unwrap().keys().collect();
        assert_eq!(keys, vec!["first_name"]);
    }

    #[test]
    fn test_first_name_with_blank_last_name_continues_rule_chain() {
        let set = collect(
            &library(),
            &record(r#"{"first_name": "a@b.co", "last_name": "", "ip": "10.0.0.5"}"#),
        );
        let categories: Vec<_> = set.categories().collect();
        assert_eq!(categories, vec![Category::Email, Category::IpAddress]);
        let keys: Vec<_> = set.get(Category::Email).unwrap().keys().collect();
        assert_eq!(keys, vec!["first_name"]);
    }

    #[test]
    fn test_name_combo_uses_actual_key_casing() {
        let set = collect(
            &library(),
            &record(r#"{"First_Name": "Amit", "LAST_NAME": "Kumar"}"#),
        );
        let keys: Vec<_> = set.get(Category::NameCombo).unwrap().keys().collect();
        assert_eq!(keys, vec!["First_Name", "LAST_NAME"]);
    }

    #[test]
    fn test_full_name_requires_name_key() {
        let lib = library();
        let set = collect(&lib, &record(r#"{"customer_name": "Priya Sharma"}"#));
        assert_eq!(set.get(Category::FullName).unwrap().replacements[0].1, "PXXXX SXXXXX");

        let set = collect(&lib, &record(r#"{"city": "New Delhi"}"#));
        assert!(set.is_empty());
    }

    #[test]
    fn test_markers_for_address_ip_and_device() {
        let set = collect(
            &library(),
            &record(
                r#"{"address": "221B Baker Street London", "IP": "10.0.0.5", "device_identifier": "abc-123"}"#,
            ),
        );
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.get(Category::Address).unwrap().replacements[0].1,
            "[REDACTED_ADDRESS]"
        );
        assert_eq!(set.get(Category::IpAddress).unwrap().replacements[0].1, "[REDACTED_IP]");
        assert_eq!(
            set.get(Category::DeviceId).unwrap().replacements[0].1,
            "[REDACTED_DEVICE_ID]"
        );
    }

    #[test]
    fn test_email_tracked_separately() {
        let set = collect(&library(), &record(r#"{"contact": "riya@example.org"}"#));
        let email = set.get(Category::Email).unwrap();
        assert_eq!(email.replacements[0].1, "riXX@example.org");
    }

    #[test]
    fn test_later_field_replaces_same_category() {
        let set = collect(
            &library(),
            &record(r#"{"ip": "10.0.0.1", "name": "Amit Kumar", "ip_address": "10.0.0.2"}"#),
        );
        let categories: Vec<_> = set.categories().collect();
        assert_eq!(categories, vec![Category::IpAddress, Category::FullName]);
        assert_eq!(set.get(Category::IpAddress).unwrap().original, "10.0.0.2");
    }

    #[test]
    fn test_non_string_values_ignored() {
        let mut rec = Record::new();
        rec.insert("ip", FieldValue::Null);
        rec.insert("device_id", FieldValue::Number(42.into()));
        assert!(collect(&library(), &rec).is_empty());
    }

    #[test]
    fn test_threshold() {
        let set = collect(
            &library(),
            &record(r#"{"first_name": "Amit", "last_name": "Kumar", "ip": "10.0.0.5"}"#),
        );
        assert!(set.is_triggered(2));
        assert!(!set.is_triggered(3));
    }
}
