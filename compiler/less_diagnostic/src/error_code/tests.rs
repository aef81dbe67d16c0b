use super::*;

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn families() {
    assert!(ErrorCode::E1002.is_name_error());
    assert!(ErrorCode::E2001.is_resolution_error());
    assert!(ErrorCode::E3001.is_binding_error());
    assert!(ErrorCode::E4001.is_expression_error());
    assert!(!ErrorCode::E4001.is_name_error());
}

#[test]
fn parse_round_trips_all_codes() {
    for &code in ErrorCode::ALL {
        assert_eq!(parse_error_code(code.as_str()), Some(code));
        assert!(!code.description().is_empty());
    }
    assert_eq!(parse_error_code("e2003"), Some(ErrorCode::E2003));
    assert_eq!(parse_error_code("E0000"), None);
}
