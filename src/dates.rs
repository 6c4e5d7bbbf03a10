use chrono::NaiveDate;

use crate::errors::{LedgerError, Result};
use crate::types::DateFormat;

/// parse a strict YYYY-MM-DD calendar date
///
/// all dates entering the library pass through here, so malformed input is
/// rejected before it can reach the timeline sort or the day-equality check
pub fn parse_ymd(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| LedgerError::InvalidDate {
        message: format!("{}: {}", s, e),
    })
}

/// number of whole days from start to end (negative if end precedes start)
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// render a date for reports and exports
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::DayMonthYear => date.format("%d/%m/%Y").to_string(),
        DateFormat::MonthDayYear => date.format("%m/%d/%Y").to_string(),
    }
}
