//! Gregorian → Bikram Sambat date conversion

use crate::types::BsDate;
use chrono::{Datelike, NaiveDate};

/// Fixed year offset between the Gregorian and Bikram Sambat calendars.
///
/// Placeholder rule: the BS year is the Gregorian year plus this offset,
/// month and day carry over unchanged. A calendrically correct conversion
/// would replace this with a proper BS month-length table; the
/// out-of-range-is-a-value contract must survive that swap.
pub const BS_YEAR_OFFSET: i32 = 56;

/// Convert a Gregorian date to its Bikram Sambat counterpart.
///
/// A missing date maps to `OutOfRange`, as does any arithmetic failure.
/// Deterministic, no side effects.
pub fn to_bikram_sambat(date: Option<NaiveDate>) -> BsDate {
    let Some(date) = date else {
        return BsDate::OutOfRange;
    };

    match date.year().checked_add(BS_YEAR_OFFSET) {
        Some(year) => BsDate::Date {
            year,
            month: date.month(),
            day: date.day(),
        },
        None => BsDate::OutOfRange,
    }
}

/// Leniently parse a Gregorian date from a cell's textual representation.
///
/// Takes only the date portion (text before any whitespace or `T` separator)
/// and accepts `%Y-%m-%d`. Anything else is missing, not an error.
pub fn parse_gregorian(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split([' ', 'T']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
