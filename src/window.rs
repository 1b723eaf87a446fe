//! Window-string parsing for the smoothing spans
//!
//! Windows are given on the command line as `<number>[w|d]`: a trailing `w`
//! means weeks (multiplied by 7), a trailing `d` means days, and no suffix
//! defaults to weeks.

use crate::error::{Result, TrendError};

const DAYS_PER_WEEK: f64 = 7.0;

/// Convert a window string into a number of days.
///
/// `"4w"` gives 28.0, `"10d"` gives 10.0, and a bare `"3"` gives 21.0.
pub fn parse_window(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let (body, factor) = if let Some(rest) = trimmed.strip_suffix('w') {
        (rest, DAYS_PER_WEEK)
    } else if let Some(rest) = trimmed.strip_suffix('d') {
        (rest, 1.0)
    } else {
        (trimmed, DAYS_PER_WEEK)
    };

    let value: f64 = body
        .parse()
        .map_err(|_| TrendError::Parse(format!("invalid window '{input}'")))?;

    Ok(value * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_suffix() {
        assert_eq!(parse_window("4w").unwrap(), 28.0);
        assert_eq!(parse_window("2w").unwrap(), 14.0);
    }

    #[test]
    fn test_days_suffix() {
        assert_eq!(parse_window("10d").unwrap(), 10.0);
    }

    #[test]
    fn test_no_suffix_defaults_to_weeks() {
        assert_eq!(parse_window("3").unwrap(), 21.0);
    }

    #[test]
    fn test_fractional_window() {
        assert_eq!(parse_window("1.5w").unwrap(), 10.5);
    }

    #[test]
    fn test_malformed_windows() {
        assert!(parse_window("").is_err());
        assert!(parse_window("w").is_err());
        assert!(parse_window("d").is_err());
        assert!(parse_window("fourw").is_err());
        assert!(parse_window("4x").is_err());
    }
}
