use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Parse a share/collection timestamp. Accepts RFC 3339 or a bare
/// `YYYY-MM-DD` date (taken as midnight UTC). Anything unparseable maps to
/// the earliest representable instant, so broken timestamps sort after
/// every real one in a newest-first ordering.
pub fn parse_timestamp(value: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_time(NaiveTime::MIN).and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

/// Year of a date string, if it parses at all.
pub fn parse_year(value: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.year());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parses_bare_date() {
        let dt = parse_timestamp("2026-02-16");
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 16);
    }

    #[test]
    fn test_parses_rfc3339() {
        let dt = parse_timestamp("2026-02-16T14:30:00+01:00");
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_garbage_sorts_earliest() {
        assert_eq!(parse_timestamp("not a date"), DateTime::<Utc>::MIN_UTC);
        assert!(parse_timestamp("not a date") < parse_timestamp("1970-01-01"));
    }

    #[test]
    fn test_year_extraction() {
        assert_eq!(parse_year("2026-02-15"), Some(2026));
        assert_eq!(parse_year("2026-02-15T09:00:00Z"), Some(2026));
        assert_eq!(parse_year("soon"), None);
    }
}
