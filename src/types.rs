use chrono::NaiveDate;
use std::fmt;

//==============================================================================
// Bikram Sambat date
//==============================================================================

/// A Bikram Sambat calendar date, or the out-of-range sentinel.
///
/// Conversion failure is a data value, not an exceptional control path: a row
/// whose source cell holds no usable date flows through the whole pipeline as
/// `OutOfRange` and every derived column renders its own sentinel for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BsDate {
    Date { year: i32, month: u32, day: u32 },
    OutOfRange,
}

impl BsDate {
    /// Parse an external textual label (`YYYY-MM-DD` or `YYYY-MM`).
    ///
    /// Splits on `-`; year and month must be numeric, the day field is
    /// optional and defaults to 1 when absent or unparseable. Anything else,
    /// including the rendered `Out of range` sentinel itself, parses to
    /// `OutOfRange`.
    pub fn from_label(label: &str) -> Self {
        let parts: Vec<&str> = label.trim().split('-').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return BsDate::OutOfRange;
        }

        let year = match parts[0].parse::<i32>() {
            Ok(y) => y,
            Err(_) => return BsDate::OutOfRange,
        };
        let month = match parts[1].parse::<u32>() {
            Ok(m) => m,
            Err(_) => return BsDate::OutOfRange,
        };
        let day = parts
            .get(2)
            .and_then(|d| d.parse::<u32>().ok())
            .unwrap_or(1);

        BsDate::Date { year, month, day }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            BsDate::Date { year, .. } => Some(*year),
            BsDate::OutOfRange => None,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match self {
            BsDate::Date { month, .. } => Some(*month),
            BsDate::OutOfRange => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, BsDate::OutOfRange)
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BsDate::Date { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02}")
            }
            BsDate::OutOfRange => write!(f, "Out of range"),
        }
    }
}

//==============================================================================
// Fiscal year and quarter
//==============================================================================

/// A Bikram Sambat fiscal-year/quarter label, or the invalid-format sentinel.
///
/// The fiscal year starts in month 4 (Shrawan), so `fy_start` is the BS year
/// the fiscal year began in and the label spans `fy_start`/`fy_start + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiscalQuarter {
    Quarter { fy_start: i32, quarter: u8 },
    InvalidFormat,
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiscalQuarter::Quarter { fy_start, quarter } => {
                write!(f, "FY{}/{} Q{}", fy_start, fy_start + 1, quarter)
            }
            FiscalQuarter::InvalidFormat => write!(f, "Invalid Format"),
        }
    }
}

//==============================================================================
// Nepali months
//==============================================================================

/// Month of the Bikram Sambat year, numbered 1-12 (Baisakh = 1, Chaitra = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NepaliMonth {
    Baisakh = 1,
    Jestha = 2,
    Ashadh = 3,
    Shrawan = 4,
    Bhadra = 5,
    Ashwin = 6,
    Kartik = 7,
    Mangsir = 8,
    Poush = 9,
    Magh = 10,
    Falgun = 11,
    Chaitra = 12,
}

impl NepaliMonth {
    /// Construct from a month number (1 = Baisakh ... 12 = Chaitra).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(NepaliMonth::Baisakh),
            2 => Some(NepaliMonth::Jestha),
            3 => Some(NepaliMonth::Ashadh),
            4 => Some(NepaliMonth::Shrawan),
            5 => Some(NepaliMonth::Bhadra),
            6 => Some(NepaliMonth::Ashwin),
            7 => Some(NepaliMonth::Kartik),
            8 => Some(NepaliMonth::Mangsir),
            9 => Some(NepaliMonth::Poush),
            10 => Some(NepaliMonth::Magh),
            11 => Some(NepaliMonth::Falgun),
            12 => Some(NepaliMonth::Chaitra),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            NepaliMonth::Baisakh => "Baisakh",
            NepaliMonth::Jestha => "Jestha",
            NepaliMonth::Ashadh => "Ashadh",
            NepaliMonth::Shrawan => "Shrawan",
            NepaliMonth::Bhadra => "Bhadra",
            NepaliMonth::Ashwin => "Ashwin",
            NepaliMonth::Kartik => "Kartik",
            NepaliMonth::Mangsir => "Mangsir",
            NepaliMonth::Poush => "Poush",
            NepaliMonth::Magh => "Magh",
            NepaliMonth::Falgun => "Falgun",
            NepaliMonth::Chaitra => "Chaitra",
        }
    }
}

impl fmt::Display for NepaliMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month-name column value: a real month or one of the two sentinels.
///
/// `InvalidDate` marks rows whose source date was missing (`OutOfRange`);
/// `InvalidMonth` marks labels whose month number is outside 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthLabel {
    Month(NepaliMonth),
    InvalidMonth,
    InvalidDate,
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthLabel::Month(m) => f.write_str(m.name()),
            MonthLabel::InvalidMonth => write!(f, "Invalid Month"),
            MonthLabel::InvalidDate => write!(f, "Invalid Date"),
        }
    }
}

//==============================================================================
// Result table
//==============================================================================

/// Header names for the three derived columns, in output order.
pub const DERIVED_HEADERS: [&str; 3] = ["Nepali Date", "Fiscal Year and Quarter", "BS_Month"];

/// One row of an input sheet, extended with the three derived values.
///
/// Built once per source row and never mutated after being appended to the
/// combined table. The derived columns are pure functions of `bs_date`.
#[derive(Debug, Clone)]
pub struct SheetRecord {
    /// The coerced source date; `None` for missing/unparseable cells.
    pub source_date: Option<NaiveDate>,
    pub bs_date: BsDate,
    pub quarter: FiscalQuarter,
    pub month: MonthLabel,
    /// Source cells after the date column, carried through verbatim.
    pub rest: Vec<String>,
}

/// The ordered concatenation of all processed sheets.
///
/// Output column ordering: source date (0), Nepali date (1), fiscal quarter
/// (2), month name (3), then the remaining source cells.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub records: Vec<SheetRecord>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of rows that carried no usable source date.
    pub fn out_of_range_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.bs_date.is_out_of_range())
            .count()
    }
}
