use piishield::config::PrivacyConfig;
use piishield::privacy::masking::{mask_handle, mask_name, mask_national_id, mask_phone};
use piishield::privacy::{classify, Category, FieldValue, Record, RedactionEngine};
use proptest::prelude::*;

fn engine() -> RedactionEngine {
    RedactionEngine::new(&PrivacyConfig::default()).unwrap()
}

// ── Phone masks keep the first two and last two core digits ──────────────

proptest! {
    #[test]
    fn phone_mask_shape(
        core in "[6-9][0-9]{9}",
        prefix in prop_oneof![
            Just(""),
            Just("+91"),
            Just("+91 "),
            Just("+91-"),
            Just("91"),
            Just("91 "),
            Just("(0)"),
        ]
    ) {
        let phone = format!("{prefix}{core}");
        let expected = format!("{}XXXXXX{}", &core[..2], &core[8..]);
        prop_assert_eq!(mask_phone(&phone), expected.clone());

        let lib_engine = engine();
        let result = classify(lib_engine.library(), &FieldValue::String(phone.clone()));
        prop_assert_eq!(result.category, Some(Category::Phone));
        prop_assert_eq!(result.masked, FieldValue::String(expected));
    }
}

// ── National ids keep grouping, first and last four digits ───────────────

proptest! {
    #[test]
    fn national_id_mask_preserves_grouping(
        a in "[0-9]{4}",
        b in "[0-9]{4}",
        c in "[0-9]{4}",
        sep in prop_oneof![Just(""), Just(" "), Just("-")]
    ) {
        let id = format!("{a}{sep}{b}{sep}{c}");
        prop_assert_eq!(mask_national_id(&id), format!("{a}{sep}XXXX{sep}{c}"));
    }
}

// ── Handles keep the domain and never grow or shrink the local part ──────

proptest! {
    #[test]
    fn handle_mask_keeps_domain(
        local in "[a-z0-9._]{1,20}",
        domain in "[a-z]{2,10}\\.(com|in|org)"
    ) {
        let masked = mask_handle(&format!("{local}@{domain}"));
        let (masked_local, masked_domain) = masked.split_once('@').unwrap();
        prop_assert_eq!(masked_domain, domain.as_str());
        prop_assert_eq!(masked_local.chars().count(), local.chars().count().max(2));
        prop_assert!(masked_local.chars().skip(2).all(|ch| ch == 'X'));
    }

    #[test]
    fn name_mask_keeps_word_count(words in prop::collection::vec("[a-zA-Z]{1,10}", 1..5)) {
        let name = words.join(" ");
        let masked = mask_name(&name);
        prop_assert_eq!(masked.split(' ').count(), words.len());
        prop_assert!(!masked.chars().any(|ch| ch.is_ascii_lowercase()));
    }
}

// ── Redaction never adds or removes keys ─────────────────────────────────

proptest! {
    #[test]
    fn redaction_preserves_keys(
        fields in prop::collection::vec(("[a-z_]{1,12}", ".{0,40}"), 0..8)
    ) {
        let record: Record = fields.into_iter().collect();
        let (redacted, _) = engine().classify_and_mask(&record);
        let before: Vec<_> = record.keys().collect();
        let after: Vec<_> = redacted.keys().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn scan_never_panics_and_flags_changes(text in ".{0,200}") {
        let (masked, found) = engine().scan_and_mask(&text);
        prop_assert_eq!(found, masked != text);
    }
}
