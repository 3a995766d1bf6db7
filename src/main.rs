use bsdate::cli;
use bsdate::error::BsDateResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bsdate")]
#[command(about = "Convert Gregorian spreadsheet dates to Bikram Sambat with fiscal-quarter labels.")]
#[command(long_about = "bsdate - Gregorian to Bikram Sambat workbook converter

Annotates every sheet of an Excel workbook with the Nepali date, the
fiscal-year/quarter label, and the Nepali month name derived from the
first column of each sheet.

COMMANDS:
  convert - Annotate every sheet of an .xlsx workbook
  date    - Convert a single Gregorian date

EXAMPLES:
  bsdate convert input.xlsx BS_Date_converted.xlsx
  bsdate convert input.xlsx out.xlsx --verbose
  bsdate date 2024-04-13

Rows whose first column holds no usable date are carried through with the
'Out of range' / 'Invalid Format' / 'Invalid Date' sentinels instead of
failing the run.

Docs: https://github.com/sudbrl/bsdate")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Annotate every sheet of an .xlsx workbook.

Each sheet's first column is coerced to Gregorian dates (text cells must be
YYYY-MM-DD; native date cells use their date component; anything else counts
as missing). Three derived columns are inserted after the date column:

  Nepali Date             - Bikram Sambat date, YYYY-MM-DD
  Fiscal Year and Quarter - e.g. FY2080/2081 Q1 (fiscal year starts month 4)
  BS_Month                - Baisakh .. Chaitra

All sheets are concatenated, in workbook order, into a single output sheet.
The Nepali Date column carries a yyyy-mm-dd display style.

The whole run either succeeds with one output file covering all sheets or
fails with a single error message and no output.")]
    /// Annotate every sheet of an .xlsx workbook
    Convert {
        /// Path to the input Excel file (.xlsx)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Convert a single Gregorian date.

Prints the Bikram Sambat date, the fiscal-year/quarter label, and the
Nepali month name for one YYYY-MM-DD date.

EXAMPLE:
  bsdate date 2024-04-13
  → Nepali Date 2080-04-13, FY2080/2081 Q1, Shrawan

An unparseable date prints the sentinel values rather than failing, the
same way an unparseable spreadsheet cell would.")]
    /// Convert a single Gregorian date
    Date {
        /// Gregorian date, YYYY-MM-DD
        date: String,
    },
}

fn main() -> BsDateResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            verbose,
        } => cli::convert(input, output, verbose),

        Commands::Date { date } => cli::date(date),
    }
}
