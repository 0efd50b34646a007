//! Duration parsing utilities.

use std::time::Duration;

use crate::config::{AmbiguousUnitPolicy, ParseOptions};
use crate::errors::{DurationParseError, ErrorCode};
use crate::features::duration::DurationParser;

/// Parses a timeout/TTL style string like "30s", "5m", "1h" into a `Duration`.
///
/// A bare `m` means minutes here, as it does in most configuration files.
/// Negative values are rejected.
///
/// # Arguments
/// * `parser` - Shared parser instance
/// * `s` - Duration string (e.g., "30s", "5m", "1.5h")
///
/// # Returns
/// * `Ok(Duration)` on success
/// * `Err(DurationParseError)` with the failure code and any suggestions
pub fn parse_duration(parser: &DurationParser, s: &str) -> Result<Duration, DurationParseError> {
    let options = ParseOptions::default().with_ambiguous_unit(AmbiguousUnitPolicy::Minutes);
    let ms = parser.parse(s, &options)?;
    to_std_duration(ms).ok_or_else(|| {
        DurationParseError::new(
            ErrorCode::InvalidNumber,
            s,
            format!("Duration \"{s}\" does not fit in std::time::Duration"),
        )
    })
}

/// Converts a non-negative millisecond count into a `Duration`.
pub fn to_std_duration(ms: f64) -> Option<Duration> {
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(ms / 1_000.0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_style_durations() {
        let parser = DurationParser::new();
        assert_eq!(parse_duration(&parser, "30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration(&parser, "5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration(&parser, "1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration(&parser, "250").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_duration_errors_keep_code() {
        let parser = DurationParser::new();
        let err = parse_duration(&parser, "10 secz").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownUnit);
        assert_eq!(parse_duration(&parser, "-1s").unwrap_err().code, ErrorCode::NegativeNotAllowed);
    }

    #[test]
    fn test_to_std_duration() {
        assert_eq!(to_std_duration(1_500.0), Some(Duration::from_millis(1_500)));
        assert_eq!(to_std_duration(-1.0), None);
        assert_eq!(to_std_duration(f64::NAN), None);
        assert_eq!(to_std_duration(f64::MAX), None);
    }
}
