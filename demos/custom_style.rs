//! Custom Style Example
//!
//! This example demonstrates caption, row headers and even-odd (zebra) styling,
//! reading the paste from a file given on the command line or from stdin.

use std::fs::File;
use std::io;
use sheet2wiki::ConverterBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let converter = ConverterBuilder::new()
        // Caption shown above the table
        .with_caption("Quarterly results")
        // Sortable table
        .with_table_style("class='wikitable sortable'")
        // First cell of each body row is a header cell
        .with_row_header(true)
        .with_row_header_style("scope=row")
        // Zebra striping for body rows
        .with_row_style("style='background:#ffffff'")
        .with_other_row_style("style='background:#f2f2f2'")
        // Right-align numbers
        .with_cell_style("align=right")
        .build()?;

    let markup = match std::env::args().nth(1) {
        Some(path) => converter.convert_to_string(File::open(&path)?)?,
        None => converter.convert_to_string(io::stdin().lock())?,
    };

    println!("{}", markup);
    println!("\nSettings used:");
    println!("{}", converter.config().to_json_pretty()?);

    Ok(())
}
