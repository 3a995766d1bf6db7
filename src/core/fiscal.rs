//! Fiscal-quarter and month-name derivation from Bikram Sambat dates

use crate::types::{BsDate, FiscalQuarter, MonthLabel, NepaliMonth};

/// Resolve the fiscal-year/quarter for a Bikram Sambat date.
///
/// The Nepali fiscal year starts in month 4 (Shrawan), so months 1-3 belong
/// to Q4 of the previous fiscal year. The day field is ignored. Malformed
/// input degrades to `InvalidFormat`, never an error.
pub fn fiscal_quarter(date: &BsDate) -> FiscalQuarter {
    let BsDate::Date { year, month, .. } = date else {
        return FiscalQuarter::InvalidFormat;
    };

    match month {
        1..=3 => FiscalQuarter::Quarter {
            fy_start: year - 1,
            quarter: 4,
        },
        4..=6 => FiscalQuarter::Quarter {
            fy_start: *year,
            quarter: 1,
        },
        7..=9 => FiscalQuarter::Quarter {
            fy_start: *year,
            quarter: 2,
        },
        10..=12 => FiscalQuarter::Quarter {
            fy_start: *year,
            quarter: 3,
        },
        _ => FiscalQuarter::InvalidFormat,
    }
}

/// Map a Bikram Sambat date to its Nepali month name.
///
/// `OutOfRange` dates yield `InvalidDate`; a month number outside 1-12
/// yields `InvalidMonth`. Pure function.
pub fn month_label(date: &BsDate) -> MonthLabel {
    let BsDate::Date { month, .. } = date else {
        return MonthLabel::InvalidDate;
    };

    match NepaliMonth::from_number(*month) {
        Some(m) => MonthLabel::Month(m),
        None => MonthLabel::InvalidMonth,
    }
}
