//! bsdate - Gregorian to Bikram Sambat workbook converter
//!
//! This library reads every sheet of an Excel workbook, converts the first
//! column of each sheet from Gregorian to Bikram Sambat dates, derives a
//! fiscal-year/quarter label and a Nepali month name per row, and writes one
//! combined annotated workbook.
//!
//! # Features
//!
//! - Gregorian → Bikram Sambat conversion with an out-of-range sentinel
//!   instead of errors for unusable cells
//! - Fiscal-year/quarter derivation (fiscal year starts in month 4)
//! - Nepali month names (Baisakh .. Chaitra)
//! - Multi-sheet batch processing into one combined table
//! - Date display styling on the Nepali-date column of the output
//!
//! # Example
//!
//! ```no_run
//! use bsdate::excel::{WorkbookProcessor, WorkbookWriter};
//! use std::path::Path;
//!
//! let table = WorkbookProcessor::process_path("dates.xlsx")?;
//! println!("Rows: {}", table.len());
//!
//! WorkbookWriter::new(table).write_file(Path::new("BS_Date_converted.xlsx"))?;
//! # Ok::<(), bsdate::error::BsDateError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{BsDateError, BsDateResult};
pub use types::{BsDate, FiscalQuarter, MonthLabel, NepaliMonth, ResultTable, SheetRecord};
