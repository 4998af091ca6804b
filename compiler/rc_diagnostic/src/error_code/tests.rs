use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    assert_eq!(ErrorCode::E9001.to_string(), "E9001");
}

#[test]
fn test_descriptions() {
    assert_eq!(ErrorCode::E0001.description(), "unterminated logic string");
    assert_eq!(ErrorCode::E1003.description(), "unclosed delimiter");
}

#[test]
fn test_codes_are_unique_and_described() {
    let mut seen = std::collections::HashSet::new();
    for code in [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E9001,
    ] {
        assert!(seen.insert(code.as_str()), "duplicate {code}");
        assert!(!code.description().is_empty());
    }
}
