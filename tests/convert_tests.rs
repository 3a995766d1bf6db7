//! Core conversion tests: date conversion, fiscal quarters, month names

use bsdate::core::{fiscal_quarter, month_label, parse_gregorian, to_bikram_sambat};
use bsdate::types::{BsDate, FiscalQuarter, MonthLabel, NepaliMonth};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn greg(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

// ═══════════════════════════════════════════════════════════════════════════
// DATE CONVERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_conversion_is_deterministic() {
    let date = greg(2024, 4, 13);
    let first = to_bikram_sambat(date);
    let second = to_bikram_sambat(date);
    assert_eq!(first, second);
}

#[test]
fn test_missing_date_is_out_of_range() {
    assert_eq!(to_bikram_sambat(None), BsDate::OutOfRange);
    assert_eq!(to_bikram_sambat(None).to_string(), "Out of range");
}

#[test]
fn test_conversion_applies_year_offset() {
    assert_eq!(to_bikram_sambat(greg(2024, 4, 13)).to_string(), "2080-04-13");
    assert_eq!(to_bikram_sambat(greg(2000, 1, 1)).to_string(), "2056-01-01");
    assert_eq!(
        to_bikram_sambat(greg(1999, 12, 31)).to_string(),
        "2055-12-31"
    );
}

#[test]
fn test_conversion_zero_pads_month_and_day() {
    assert_eq!(to_bikram_sambat(greg(2023, 1, 2)).to_string(), "2079-01-02");
}

// ═══════════════════════════════════════════════════════════════════════════
// FISCAL QUARTERS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_quarter_table_covers_all_months() {
    let cases = [
        (1, "FY2079/2080 Q4"),
        (2, "FY2079/2080 Q4"),
        (3, "FY2079/2080 Q4"),
        (4, "FY2080/2081 Q1"),
        (5, "FY2080/2081 Q1"),
        (6, "FY2080/2081 Q1"),
        (7, "FY2080/2081 Q2"),
        (8, "FY2080/2081 Q2"),
        (9, "FY2080/2081 Q2"),
        (10, "FY2080/2081 Q3"),
        (11, "FY2080/2081 Q3"),
        (12, "FY2080/2081 Q3"),
    ];

    for (month, expected) in cases {
        let date = BsDate::Date {
            year: 2080,
            month,
            day: 15,
        };
        assert_eq!(fiscal_quarter(&date).to_string(), expected);
    }
}

#[test]
fn test_quarter_out_of_range_is_invalid_format() {
    assert_eq!(
        fiscal_quarter(&BsDate::OutOfRange),
        FiscalQuarter::InvalidFormat
    );
    assert_eq!(
        fiscal_quarter(&BsDate::OutOfRange).to_string(),
        "Invalid Format"
    );
}

#[test]
fn test_quarter_ignores_day_field() {
    let first = BsDate::Date {
        year: 2080,
        month: 7,
        day: 1,
    };
    let last = BsDate::Date {
        year: 2080,
        month: 7,
        day: 30,
    };
    assert_eq!(fiscal_quarter(&first), fiscal_quarter(&last));
}

// ═══════════════════════════════════════════════════════════════════════════
// MONTH NAMES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_month_name_from_label() {
    assert_eq!(
        month_label(&BsDate::from_label("2080-01-15")),
        MonthLabel::Month(NepaliMonth::Baisakh)
    );
    assert_eq!(
        month_label(&BsDate::from_label("2080-12-01")),
        MonthLabel::Month(NepaliMonth::Chaitra)
    );
}

#[test]
fn test_month_name_sentinels() {
    assert_eq!(month_label(&BsDate::OutOfRange), MonthLabel::InvalidDate);

    let bad_month = BsDate::Date {
        year: 2080,
        month: 13,
        day: 1,
    };
    assert_eq!(month_label(&bad_month), MonthLabel::InvalidMonth);
    assert_eq!(month_label(&bad_month).to_string(), "Invalid Month");
}

// ═══════════════════════════════════════════════════════════════════════════
// END-TO-END SCENARIO
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_scenario_2024_04_13() {
    let bs_date = to_bikram_sambat(parse_gregorian("2024-04-13"));
    assert_eq!(bs_date.to_string(), "2080-04-13");
    assert_eq!(fiscal_quarter(&bs_date).to_string(), "FY2080/2081 Q1");
    assert_eq!(month_label(&bs_date).to_string(), "Shrawan");
}

#[test]
fn test_sentinel_cascade_agrees_on_missing_date() {
    let bs_date = to_bikram_sambat(parse_gregorian("definitely not a date"));
    assert_eq!(bs_date.to_string(), "Out of range");
    assert_eq!(fiscal_quarter(&bs_date).to_string(), "Invalid Format");
    assert_eq!(month_label(&bs_date).to_string(), "Invalid Date");
}
