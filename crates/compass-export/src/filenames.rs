//! Download file-name conventions.
//!
//! Pure string functions. Dates are the UTC calendar date of the timestamp.

use jiff::tz::TimeZone;

fn utc_date(at: jiff::Timestamp) -> jiff::civil::Date {
    at.to_zoned(TimeZone::UTC).date()
}

pub fn assessment_report(at: jiff::Timestamp) -> String {
    format!("values-assessment-{}.json", utc_date(at))
}

pub fn history_export(at: jiff::Timestamp) -> String {
    format!("values-compass-history-{}.json", utc_date(at))
}
