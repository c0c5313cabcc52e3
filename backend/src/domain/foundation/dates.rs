//! Calendar parsing for wire-form dates and times.
//!
//! Clients send ISO strings and may append a time or zone suffix. Only the
//! leading `YYYY-MM-DD` (dates) or `HH:MM` (times) portion is read.

use chrono::{NaiveDate, NaiveTime};

use super::ValidationError;

/// Parses the first 10 characters of `value` as `YYYY-MM-DD`.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let head = leading_chars(value, 10);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

/// Parses the first 5 characters of `value` as `HH:MM`.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    let head = leading_chars(value, 5);
    NaiveTime::parse_from_str(head, "%H:%M")
        .map_err(|_| ValidationError::invalid_format(field, "expected HH:MM"))
}

fn leading_chars(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parse_date_reads_plain_iso_date() {
        let date = parse_date("startDate", "2026-05-14").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 5, 14));
    }

    #[test]
    fn parse_date_ignores_trailing_time() {
        let date = parse_date("startDate", "2026-05-14T09:30:00Z").unwrap();
        assert_eq!(date.month(), 5);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("endDate", "14/05/2026").unwrap_err();
        assert_eq!(err.field(), "endDate");
    }

    #[test]
    fn parse_time_ignores_seconds() {
        let time = parse_time("startTime", "14:45:59").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(14, 45, 0).unwrap());
    }

    #[test]
    fn parse_time_rejects_short_input() {
        assert!(parse_time("startTime", "9").is_err());
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(parse_date("startDate", "ééééééééééééé").is_err());
    }
}
