//! Date helpers: donor age and display formatting

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::PortalError;

/// Whole years between `dob` and `today`.
///
/// One less than the calendar-year difference while this year's birthday is
/// still ahead (earlier month, or same month and earlier day).
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    let month_diff = today.month() as i32 - dob.month() as i32;

    if month_diff < 0 || (month_diff == 0 && today.day() < dob.day()) {
        age -= 1;
    }

    age
}

/// Age on `today` for a `YYYY-MM-DD` date of birth
pub fn age_on(dob: &str, today: NaiveDate) -> Result<i32, PortalError> {
    let dob = parse_date(dob).ok_or_else(|| PortalError::InvalidDate(dob.to_string()))?;
    Ok(calculate_age(dob, today))
}

/// Long US form, e.g. "October 16, 2026". Accepts `YYYY-MM-DD` or RFC 3339.
pub fn format_date(date: &str) -> Option<String> {
    let date = parse_date(date)?;
    Some(date.format("%B %-d, %Y").to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
