use piishield::config::PrivacyConfig;
use piishield::privacy::RedactionEngine;

fn engine() -> RedactionEngine {
    RedactionEngine::new(&PrivacyConfig::default()).unwrap()
}

fn check(input: &str, expected: &str, found: bool) {
    let outcome = engine().process_line(input).unwrap();
    assert_eq!(outcome.text, expected, "input: {input}");
    assert_eq!(outcome.found, found, "input: {input}");
}

#[test]
fn golden_standalone_records() {
    check(
        r#"{"phone": "9876543210", "order_value": 1299}"#,
        r#"{"phone": "98XXXXXX10", "order_value": 1299}"#,
        true,
    );
    check(
        r#"{"aadhar": "1234 5678 9012", "product": "Laptop"}"#,
        r#"{"aadhar": "1234 XXXX 9012", "product": "Laptop"}"#,
        true,
    );
    check(
        r#"{"passport": "M7381924", "status": "active"}"#,
        r#"{"passport": "MXXX1924", "status": "active"}"#,
        true,
    );
    check(
        r#"{"upi_id": "priya.s@okhdfc", "amount": 500.5}"#,
        r#"{"upi_id": "prXXXXX@okhdfc", "amount": 500.5}"#,
        true,
    );
}

#[test]
fn golden_combinatorial_records() {
    check(
        r#"{"name": "Rahul Verma", "email": "rahul.v@mail.com", "city": "Pune"}"#,
        r#"{"name": "RXXXX VXXXX", "email": "raXXXXX@mail.com", "city": "Pune"}"#,
        true,
    );
    check(
        r#"{"name": "Rahul Verma", "city": "Pune", "pin_code": "411001"}"#,
        r#"{"name": "Rahul Verma", "city": "Pune", "pin_code": "411001"}"#,
        false,
    );
    check(
        r#"{"address": "14 Park Street, Kolkata 700016", "device_id": "DEV-8841", "note": "ok"}"#,
        r#"{"address": "[REDACTED_ADDRESS]", "device_id": "[REDACTED_DEVICE_ID]", "note": "ok"}"#,
        true,
    );
}

#[test]
fn golden_malformed_records() {
    check(
        r#"{"contact": "amit@example.com", "phone": "+91 9876543210""#,
        r#"{"contact": "amXX@example.com", "phone": "98XXXXXX10""#,
        true,
    );
    check("plain text, nothing here", "plain text, nothing here", false);
}
