// Date text utilities
// Formatting and pattern matching for the MM/DD/YYYY picker format

use chrono::{Datelike, NaiveDate};

use crate::models::date_input::{DateFields, DateInput};

/// Human readable form of the only accepted date format
pub const DATE_FORMAT_HINT: &str = "MM/DD/YYYY";

/// Message shown under the input while the text does not match the format
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format, should be MM/DD/YYYY";

/// Earliest year that formats as four digits
pub const MIN_DISPLAY_YEAR: i32 = 0;

/// Latest year that formats as four digits
pub const MAX_DISPLAY_YEAR: i32 = 9999;

/// Whether `year` can be written back as `MM/DD/YYYY` text that matches the
/// pattern again.
pub fn is_displayable_year(year: i32) -> bool {
    (MIN_DISPLAY_YEAR..=MAX_DISPLAY_YEAR).contains(&year)
}

/// Format a date as `MM/DD/YYYY` with zero padded month and day.
pub fn format_date(date: NaiveDate) -> String {
    format_date_parts(date.month(), date.day(), date.year())
}

/// Format a 1-based month, day and year as `MM/DD/YYYY`.
///
/// The parts are not checked against each other, so `(2, 30, 2023)` yields
/// `"02/30/2023"`. Only years in `0..=9999` produce text that
/// [`is_valid_date_text`] accepts; see [`is_displayable_year`].
pub fn format_date_parts(month: u32, day: u32, year: i32) -> String {
    format!("{:02}/{:02}/{:04}", month, day, year)
}

/// Check whether `text` matches the `MM/DD/YYYY` pattern.
///
/// Month must be 1-12 and day 1-31, either with or without a leading zero.
/// The year must be exactly four digits. Month length and leap years are not
/// considered.
pub fn is_valid_date_text(text: &str) -> bool {
    match_date_fields(text).is_some()
}

/// Interpret typed text as either a pattern match or pending input.
pub fn parse_date_text(text: &str) -> DateInput {
    match match_date_fields(text) {
        Some(fields) => DateInput::Valid(fields),
        None => DateInput::Pending(text.to_string()),
    }
}

fn match_date_fields(text: &str) -> Option<DateFields> {
    let mut parts = text.split('/');
    let month = parse_short_component(parts.next()?)?;
    let day = parse_short_component(parts.next()?)?;
    let year_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(DateFields { month, day, year })
}

/// One or two ASCII digits.
fn parse_short_component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
