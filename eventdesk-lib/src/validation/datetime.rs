//! Lenient date-time parsing for form input.
//!
//! Accepts the forms a browser date picker or a hand-typed ISO value
//! produce. Values without an offset are local time, except the date-only
//! forms (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`), which are UTC midnight.

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Minute-precision forms with an explicit offset. RFC 3339 requires seconds.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Parses a date-time, returning `None` if the text is not recognized.
pub fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(utc) = raw.strip_suffix(['Z', 'z']) {
        return NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(utc, format).ok())
            .map(|naive| naive.and_utc());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(local_to_utc(naive));
        }
    }

    date_only(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn date_only(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let year = digits(parts.next()?, 4)?;
    let month = parts.next().map_or(Some(1), |m| digits(m, 2))?;
    let day = parts.next().map_or(Some(1), |d| digits(d, 2))?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// Times skipped by a DST transition fall back to their UTC reading.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_rfc3339() {
        let dt = parse_date_time("2030-05-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);

        let dt = parse_date_time("2030-05-01T12:30:00Z").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_picker_and_naive_forms() {
        assert!(parse_date_time("2030-05-01T12:30").is_some());
        assert!(parse_date_time("2030-05-01T12:30:15").is_some());
        assert!(parse_date_time("2030-05-01T12:30:15.250").is_some());
        assert!(parse_date_time("2030-05-01 12:30").is_some());
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        let dt = parse_date_time("2030-05-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2030, 5, 1));
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
    }

    #[test]
    fn test_minute_precision_with_offset() {
        let dt = parse_date_time("2030-06-01T09:00Z").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (9, 0));

        let dt = parse_date_time("2030-06-01T09:00+02:00").unwrap();
        assert_eq!((dt.day(), dt.hour()), (1, 7));

        let dt = parse_date_time("2030-06-01T01:30-0300").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (4, 30));
    }

    #[test]
    fn test_zulu_suffix_on_naive_forms() {
        let dt = parse_date_time("2030-06-01T09:00:00.000Z").unwrap();
        assert_eq!(dt.hour(), 9);

        let dt = parse_date_time("2030-06-01 23:15:00z").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (23, 15));
    }

    #[test]
    fn test_year_and_month_only() {
        let dt = parse_date_time("2030-06").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2030, 6, 1, 0));

        let dt = parse_date_time("2030").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2030, 1, 1, 0));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_date_time(""), None);
        assert_eq!(parse_date_time("   "), None);
        assert_eq!(parse_date_time("tomorrow"), None);
        assert_eq!(parse_date_time("2030-13-01T00:00"), None);
        assert_eq!(parse_date_time("2030-02-30"), None);
        assert_eq!(parse_date_time("2030-13"), None);
        assert_eq!(parse_date_time("203"), None);
        assert_eq!(parse_date_time("2030-6"), None);
        assert_eq!(parse_date_time("2030-06-01-02"), None);
        assert_eq!(parse_date_time("Z"), None);
    }
}
