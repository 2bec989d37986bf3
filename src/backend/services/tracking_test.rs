use super::*;

#[test]
fn parse_normalizes_case_spaces_and_dashes() {
    let number = TrackingNumber::parse("  gv-12 34-ab ").expect("valid");
    assert_eq!(number.as_str(), "GV1234AB");
    assert_eq!(number.to_string(), "GV1234AB");
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!(TrackingNumber::parse("   "), Err("Enter a tracking number."));
    assert_eq!(TrackingNumber::parse("--"), Err("Enter a tracking number."));
}

#[test]
fn parse_rejects_symbols() {
    assert_eq!(
        TrackingNumber::parse("ABC/123"),
        Err("Tracking numbers only contain letters and digits.")
    );
    assert_eq!(
        TrackingNumber::parse("ÄBC1234"),
        Err("Tracking numbers only contain letters and digits.")
    );
}

#[test]
fn parse_enforces_length_bounds() {
    assert!(TrackingNumber::parse("ABC12").is_err());
    assert!(TrackingNumber::parse("ABC123").is_ok());
    assert!(TrackingNumber::parse(&"A".repeat(24)).is_ok());
    assert!(TrackingNumber::parse(&"A".repeat(25)).is_err());
}
