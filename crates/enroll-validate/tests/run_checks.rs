//! Unit tests for identifier and email validation.

use enroll_validate::{
    RunClass, check_character, classify, is_valid_email, parse, validate, validate_text,
};

#[test]
fn check_character_matches_hand_computation() {
    // 12345678: 8*2+7*3+6*4+5*5+4*6+3*7+2*2+1*3 = 138; 11 - (138 % 11) = 5
    assert_eq!(check_character(12_345_678), '5');
    // 23762615 leaves remainder 1, expected value 10 maps to K
    assert_eq!(check_character(23_762_615), 'K');
    // 11111111: sum 32, remainder 10, expected 1
    assert_eq!(check_character(11_111_111), '1');
}

#[test]
fn remainder_eleven_maps_to_zero() {
    // 11111117: weighted sum 44 = 4 * 11, so the expected value is 11 -> '0'
    assert_eq!(check_character(11_111_117), '0');
    assert!(validate(11_111_117, '0').valid);
}

#[test]
fn valid_regular_identifiers() {
    let result = validate(12_345_678, '5');
    assert_eq!(result.class, RunClass::Regular);
    assert!(result.valid);
    assert_eq!(result.canonical, "12345678-5");
}

#[test]
fn check_is_case_insensitive_for_k() {
    let lower = validate(23_762_615, 'k');
    assert!(lower.valid);
    assert_eq!(lower.canonical, "23762615-K");
}

#[test]
fn invalid_check_digit_reports_not_valid() {
    let result = validate(12_345_678, '9');
    assert_eq!(result.class, RunClass::Regular);
    assert!(!result.valid);
    assert_eq!(result.canonical, "12345678-9");
}

#[test]
fn provisional_ranges_accept_any_check_character() {
    for body in [100_123_456, 199_999_999, 200_123_456, 299_999_999] {
        for check in ['0', '5', '9', 'K', 'Z'] {
            let result = validate(body, check);
            assert_eq!(result.class, RunClass::Provisional, "body {body}");
            assert!(result.valid, "body {body} check {check}");
        }
    }
}

#[test]
fn provisional_boundaries() {
    assert_eq!(classify(99_999_999), RunClass::Regular);
    assert_eq!(classify(100_000_000), RunClass::Provisional);
    assert_eq!(classify(199_999_999), RunClass::Provisional);
    assert_eq!(classify(200_000_000), RunClass::Provisional);
    assert_eq!(classify(299_999_999), RunClass::Provisional);
    assert_eq!(classify(300_000_000), RunClass::Regular);
}

#[test]
fn regular_boundaries_still_use_check_digit() {
    // 99999999: all-nines sum 288, remainder 2, expected 9
    assert!(validate(99_999_999, '9').valid);
    assert!(!validate(99_999_999, 'K').valid);
    // 300000000: single weighted digit 3 * 4 = 12, remainder 1, expected K
    assert!(validate(300_000_000, 'K').valid);
    assert!(!validate(300_000_000, '0').valid);
}

#[test]
fn parse_accepts_plain_and_dotted_forms() {
    assert_eq!(parse("12345678-5"), Some((12_345_678, '5')));
    assert_eq!(parse("12.345.678-5"), Some((12_345_678, '5')));
    assert_eq!(parse("23762615-k"), Some((23_762_615, 'K')));
    assert_eq!(parse(" 100123456-Z "), Some((100_123_456, 'Z')));
}

#[test]
fn parse_rejects_malformed_text() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("invalid"), None);
    assert_eq!(parse("123-4"), None);
    assert_eq!(parse("12345678901-2"), None);
}

#[test]
fn validate_text_combines_parse_and_check() {
    assert!(validate_text("12345678-5").is_some_and(|r| r.valid));
    assert!(validate_text("12345678-9").is_some_and(|r| !r.valid));
    assert!(validate_text("100123456-K").is_some_and(|r| r.valid));
    assert!(validate_text("garbage").is_none());
}

#[test]
fn email_accepts_common_shapes() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("test.user@domain.co.uk"));
    assert!(is_valid_email("apoderado+hijo@colegio.cl"));
}

#[test]
fn email_rejects_malformed_shapes() {
    assert!(!is_valid_email("invalid"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@domain"));
    assert!(!is_valid_email(""));
}
