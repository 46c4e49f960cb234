//! Date formatting for due dates.
//!
//! The store keeps due dates as ISO strings, either a plain date
//! (`2024-03-15`) or a full timestamp (`2024-03-15T10:00:00`). Cards show
//! them as `15/03/2024`; forms edit them as `YYYY-MM-DD`.

use crate::libs::task::truncate_to_date;
use chrono::NaiveDate;

/// Input/output format of the date-only form field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used on cards and exports.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Calendar date of an ISO date or timestamp string.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(truncate_to_date(value.trim()), DATE_FORMAT).ok()
}

/// Localized rendering of a due date. Unparseable values are shown as-is.
pub fn format_due_date(value: &str) -> String {
    match parse_due_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Accepts an empty field (no due date) or a `YYYY-MM-DD` date.
pub fn is_valid_due_date_input(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || NaiveDate::parse_from_str(input, DATE_FORMAT).is_ok()
}
