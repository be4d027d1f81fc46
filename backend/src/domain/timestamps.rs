//! Conversions between `DateTime<Utc>` and the strings used on the wire and in storage.
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Current time at the millisecond precision timestamps are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-01-15T00:00:00.000Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Strict RFC 3339 parse for values we wrote ourselves.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid stored timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Lenient ISO 8601 parse for client input.
///
/// Accepts full RFC 3339 (any offset), a date-time without offset (read as UTC)
/// and a bare `YYYY-MM-DD` date (UTC midnight).
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    parse_iso8601_exact(value.trim()).map(|parsed| parsed.trunc_subsecs(3))
}

fn parse_iso8601_exact(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_millis_and_z() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2024-01-15T08:30:00.000Z");
    }

    #[test]
    fn test_stored_timestamps_round_trip() {
        let timestamp = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(&timestamp)).unwrap(), timestamp);
        assert!(parse_timestamp("2023-12-31").is_err());
    }

    #[test]
    fn test_parse_date_only_is_utc_midnight() {
        assert_eq!(
            parse_iso8601("2024-03-02"),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_offsets_are_normalised_to_utc() {
        assert_eq!(
            parse_iso8601("2024-03-01T22:00:00-04:00"),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 2, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_without_offset_reads_as_utc() {
        assert_eq!(
            parse_iso8601("2024-03-02T10:15:30.250"),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 30).unwrap() + chrono::Duration::milliseconds(250))
        );
        assert_eq!(
            parse_iso8601("2024-03-02T10:15"),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_truncates_to_millis() {
        assert_eq!(
            parse_iso8601("2024-03-02T10:15:30.123456789Z"),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 30).unwrap() + chrono::Duration::milliseconds(123))
        );
    }

    #[test]
    fn test_now_round_trips_through_storage_format() {
        let timestamp = now();
        assert_eq!(parse_timestamp(&format_timestamp(&timestamp)).unwrap(), timestamp);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_iso8601("yesterday"), None);
        assert_eq!(parse_iso8601("2024-13-01"), None);
        assert_eq!(parse_iso8601(""), None);
    }
}
