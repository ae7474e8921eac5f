//! Basic Conversion Example
//!
//! This example demonstrates the simplest way to convert a spreadsheet paste
//! (tab-separated text) into a MediaWiki table with default settings.

use sheet2wiki::{convert, StyleConfig};

fn main() {
    // What you get when copying A1:C3 from a spreadsheet
    let paste = "Fruit\tColor\tPrice\nApple\tRed\t1.20\nBanana\tYellow\t0.50\n";

    // Default settings: first row is the column header, class='wikitable'
    let markup = convert(paste, &StyleConfig::default());

    println!("{}", markup);
}
