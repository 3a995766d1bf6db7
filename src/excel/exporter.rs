//! Excel exporter: combined table → .xlsx with date display styling

use crate::error::{BsDateError, BsDateResult};
use crate::types::ResultTable;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Display format applied to every data-row cell of the Nepali-date column.
pub const BS_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Index of the Nepali-date column in the output table.
const BS_DATE_COL: u16 = 1;

/// Excel writer for the combined annotated table.
///
/// The reference behavior serialized the table, reopened the document, styled
/// the Nepali-date column, and serialized again; with a write-once workbook
/// library the per-cell format is applied during the single serialization
/// pass, which produces the same document.
pub struct WorkbookWriter {
    table: ResultTable,
}

impl WorkbookWriter {
    pub fn new(table: ResultTable) -> Self {
        Self { table }
    }

    /// Write the table to an .xlsx file.
    pub fn write_file(&self, path: &Path) -> BsDateResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(path)
            .map_err(|e| BsDateError::Export(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }

    /// Serialize the table to an in-memory .xlsx buffer.
    pub fn write_buffer(&self) -> BsDateResult<Vec<u8>> {
        let mut workbook = self.build()?;
        workbook
            .save_to_buffer()
            .map_err(|e| BsDateError::Export(format!("Failed to serialize Excel file: {}", e)))
    }

    fn build(&self) -> BsDateResult<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        // Header row (row 0)
        for (col_idx, header) in self.table.headers.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, header)
                .map_err(|e| BsDateError::Export(format!("Failed to write header: {}", e)))?;
        }

        let date_format = Format::new().set_num_format(BS_DATE_FORMAT);

        // Data rows (row 1 onward; row 2 onward in spreadsheet terms)
        for (row_idx, record) in self.table.records.iter().enumerate() {
            let row = row_idx as u32 + 1;

            if let Some(date) = record.source_date {
                worksheet
                    .write_string(row, 0, date.format("%Y-%m-%d").to_string())
                    .map_err(|e| BsDateError::Export(format!("Failed to write date: {}", e)))?;
            }

            // Every data row of the Nepali-date column carries the date
            // display style, sentinel rows included.
            worksheet
                .write_string_with_format(
                    row,
                    BS_DATE_COL,
                    record.bs_date.to_string(),
                    &date_format,
                )
                .map_err(|e| BsDateError::Export(format!("Failed to write Nepali date: {}", e)))?;

            worksheet
                .write_string(row, 2, record.quarter.to_string())
                .map_err(|e| {
                    BsDateError::Export(format!("Failed to write fiscal quarter: {}", e))
                })?;
            worksheet
                .write_string(row, 3, record.month.to_string())
                .map_err(|e| BsDateError::Export(format!("Failed to write month name: {}", e)))?;

            Self::write_rest(worksheet, row, &record.rest)?;
        }

        Ok(workbook)
    }

    /// Write the carried-through source cells after the derived columns.
    fn write_rest(worksheet: &mut Worksheet, row: u32, rest: &[String]) -> BsDateResult<()> {
        for (idx, value) in rest.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row, idx as u16 + 4, value)
                .map_err(|e| BsDateError::Export(format!("Failed to write cell: {}", e)))?;
        }
        Ok(())
    }
}
