use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date or date-time. Offsets are honored; values without
/// one are taken as UTC, and a bare date means midnight UTC.
pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn is_valid_iso_datetime(value: &str) -> bool {
    parse_iso_datetime(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_with_millis() {
        let dt = parse_iso_datetime("2025-01-01T00:00:00.000Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_offset_converted_to_utc() {
        let dt = parse_iso_datetime("2025-03-10T09:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-03-10T07:30:00+00:00");
    }

    #[test]
    fn test_naive_forms() {
        assert!(is_valid_iso_datetime("2025-03-10T09:30:00"));
        assert!(is_valid_iso_datetime("2025-03-10T09:30"));
        assert!(is_valid_iso_datetime("2025-03-10 09:30:00"));
        assert!(is_valid_iso_datetime("2025-03-10"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_iso_datetime("not-a-date"));
        assert!(!is_valid_iso_datetime(""));
        assert!(!is_valid_iso_datetime("2025-13-45"));
    }
}
