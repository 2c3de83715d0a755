//! Date parsing and formatting for the hunt log's `DD.MM.YYYY` format.

use chrono::NaiveDate;

/// The date format used by the hunt log and the report tables.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date field.
///
/// Day and month may be written without a leading zero (`1.1.2020`), matching
/// the leniency of the log's producers. Any other format is rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Render a date in the report's `DD.MM.YYYY` format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
