//! Excel read/write module for the conversion pipeline
//!
//! - Import: every sheet of an input workbook → one combined annotated table
//! - Export: combined table → .xlsx with a date display style on the
//!   Nepali-date column

mod exporter;
mod importer;

pub use exporter::{WorkbookWriter, BS_DATE_FORMAT};
pub use importer::WorkbookProcessor;

use crate::error::BsDateResult;

/// Run the full pipeline over an in-memory workbook: read every sheet,
/// derive the three Bikram Sambat columns, and serialize the combined
/// table back to .xlsx bytes.
///
/// This is the single entry point the upload handler uses; any failure
/// aborts with no partial output.
pub fn convert_workbook_bytes(bytes: &[u8]) -> BsDateResult<Vec<u8>> {
    let table = WorkbookProcessor::process_bytes(bytes)?;
    WorkbookWriter::new(table).write_buffer()
}
