use stock_trend::{parse_window, TrendError};

#[test]
fn test_default_long_and_short_windows() {
    assert_eq!(parse_window("4w").unwrap(), 28.0);
    assert_eq!(parse_window("2w").unwrap(), 14.0);
}

#[test]
fn test_days_suffix() {
    assert_eq!(parse_window("10d").unwrap(), 10.0);
}

#[test]
fn test_bare_number_means_weeks() {
    assert_eq!(parse_window("3").unwrap(), 21.0);
}

#[test]
fn test_fractional_values() {
    assert_eq!(parse_window("1.5w").unwrap(), 10.5);
    assert_eq!(parse_window("0.5d").unwrap(), 0.5);
}

#[test]
fn test_malformed_window_is_parse_error() {
    for input in ["", "w", "d", "abc", "4x", "w4"] {
        let err = parse_window(input).unwrap_err();
        assert!(matches!(err, TrendError::Parse(_)), "input {input:?} gave {err:?}");
    }
}
