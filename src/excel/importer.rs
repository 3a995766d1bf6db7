//! Excel importer: batch-process every sheet of a workbook into one table

use crate::core::{converter, fiscal};
use crate::error::{BsDateError, BsDateResult};
use crate::types::{ResultTable, SheetRecord, DERIVED_HEADERS};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveDate;
use std::io::Cursor;
use std::path::Path;

/// Batch processor for input workbooks.
///
/// Each sheet is processed independently: the first column is coerced to
/// Gregorian dates, the three derived columns are computed per row, and all
/// sheets are concatenated in the workbook's natural order into one table
/// with no sheet-identity column retained.
pub struct WorkbookProcessor;

impl WorkbookProcessor {
    /// Process a workbook from a file path.
    pub fn process_path<P: AsRef<Path>>(path: P) -> BsDateResult<ResultTable> {
        let mut workbook: Xlsx<_> = open_workbook(path.as_ref())
            .map_err(|e| BsDateError::Workbook(format!("Failed to open Excel file: {}", e)))?;
        Self::process_workbook(&mut workbook)
    }

    /// Process a workbook from an in-memory buffer (one uploaded file).
    pub fn process_bytes(bytes: &[u8]) -> BsDateResult<ResultTable> {
        let mut workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| BsDateError::Workbook(format!("Failed to read uploaded file: {}", e)))?;
        Self::process_workbook(&mut workbook)
    }

    fn process_workbook<RS: std::io::Read + std::io::Seek>(
        workbook: &mut Xlsx<RS>,
    ) -> BsDateResult<ResultTable> {
        let mut table = ResultTable::default();

        // Natural workbook order, preserved in the output.
        let sheet_names = workbook.sheet_names().to_vec();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                BsDateError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            Self::process_sheet(&range, &mut table);
        }

        if table.headers.is_empty() {
            return Err(BsDateError::Schema(
                "Workbook contains no sheets with data".to_string(),
            ));
        }

        Ok(table)
    }

    /// Process a single worksheet: header in row 0, one record per data row.
    fn process_sheet(range: &Range<Data>, table: &mut ResultTable) {
        let (height, width) = range.get_size();
        if height == 0 || width == 0 {
            return; // Skip empty sheets
        }

        // The combined table takes its header from the first sheet that has
        // one; the derived column names slot in right after the date column.
        if table.headers.is_empty() {
            let mut headers = vec![Self::cell_to_string(range.get((0, 0)))];
            headers.extend(DERIVED_HEADERS.iter().map(|h| h.to_string()));
            for col in 1..width {
                headers.push(Self::cell_to_string(range.get((0, col))));
            }
            table.headers = headers;
        }

        for row in 1..height {
            let source_date = range.get((row, 0)).and_then(Self::cell_to_date);
            let bs_date = converter::to_bikram_sambat(source_date);

            let rest = (1..width)
                .map(|col| Self::cell_to_string(range.get((row, col))))
                .collect();

            table.records.push(SheetRecord {
                source_date,
                bs_date,
                quarter: fiscal::fiscal_quarter(&bs_date),
                month: fiscal::month_label(&bs_date),
                rest,
            });
        }
    }

    /// Coerce a cell to a Gregorian date, leniently.
    ///
    /// Native datetime cells keep only their date component; text cells are
    /// parsed as `%Y-%m-%d` after dropping any time-of-day portion. Every
    /// other cell kind is missing.
    fn cell_to_date(cell: &Data) -> Option<NaiveDate> {
        match cell {
            Data::DateTime(dt) => dt.as_datetime().map(|ndt| ndt.date()),
            Data::DateTimeIso(s) => converter::parse_gregorian(s),
            Data::String(s) => converter::parse_gregorian(s),
            _ => None,
        }
    }

    /// Render a carried-through cell as text.
    fn cell_to_string(cell: Option<&Data>) -> String {
        let Some(cell) = cell else {
            return String::new();
        };
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Float(f) => f.to_string(),
            Data::Int(i) => i.to_string(),
            Data::Bool(b) => b.to_string(),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(|ndt| ndt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
            Data::Error(e) => format!("#{:?}", e),
        }
    }
}
