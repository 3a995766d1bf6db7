use crate::core::{fiscal_quarter, month_label, parse_gregorian, to_bikram_sambat};
use crate::error::{BsDateError, BsDateResult};
use crate::excel::{WorkbookProcessor, WorkbookWriter};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command
pub fn convert(input: PathBuf, output: PathBuf, verbose: bool) -> BsDateResult<()> {
    println!("{}", "📅 bsdate - Converting workbook".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if !input.exists() {
        return Err(BsDateError::Schema(format!(
            "File not found: {}",
            input.display()
        )));
    }

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let table = WorkbookProcessor::process_path(&input)?;

    if verbose {
        println!("   {} rows across all sheets", table.len());
        let out_of_range = table.out_of_range_count();
        if out_of_range > 0 {
            println!(
                "   {}",
                format!("{} rows had no usable date", out_of_range).yellow()
            );
        }
        println!();
        println!("{}", "💾 Writing annotated workbook...".cyan());
    }

    WorkbookWriter::new(table).write_file(&output)?;

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}

/// Execute the date command - convert a single Gregorian date
pub fn date(input: String) -> BsDateResult<()> {
    println!("{}", "📅 bsdate - Single date conversion".bold().green());
    println!("   Gregorian: {}\n", input.bright_blue().bold());

    let parsed = parse_gregorian(&input);
    if parsed.is_none() {
        println!(
            "{}",
            "⚠️  Could not parse the date; reporting sentinels".yellow()
        );
    }

    let bs_date = to_bikram_sambat(parsed);
    let quarter = fiscal_quarter(&bs_date);
    let month = month_label(&bs_date);

    println!("   Nepali Date:             {}", bs_date.to_string().bold());
    println!(
        "   Fiscal Year and Quarter: {}",
        quarter.to_string().bold()
    );
    println!("   BS_Month:                {}\n", month.to_string().bold());

    Ok(())
}
