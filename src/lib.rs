//! sheet2wiki - Spreadsheet copy & paste to MediaWiki table converter
//!
//! This crate converts a block of tab-separated, newline-delimited text (what you
//! get when copying a range from Excel, LibreOffice Calc or Google Sheets) into
//! MediaWiki table markup, with configurable caption, header and even/odd styling.
//!
//! # Quick Start
//!
//! ```rust
//! use sheet2wiki::{convert, StyleConfig};
//!
//! let markup = convert("Name\tScore\nAlice\t10", &StyleConfig::default());
//! assert_eq!(
//!     markup,
//!     "{|class='wikitable'\n|-\n!Name\n!Score\n|- \n|Alice\n|10\n|}"
//! );
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use sheet2wiki::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_caption("Scores")                             // Caption line
//!         .with_row_header(true)                              // First cell of each row is a header
//!         .with_other_row_style("style='background:#eee'")    // Zebra striping
//!         .build()?;
//!
//!     let markup = converter.convert_str("Name\tScore\nAlice\t10\nBob\t7");
//!     println!("{}", markup);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Convert from a Reader
//!
//! ```rust,no_run
//! use std::fs::File;
//! use sheet2wiki::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!     let input = File::open("paste.tsv")?;
//!
//!     // Write to stdout instead of collecting a String
//!     converter.convert(input, std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod grid;
mod output;
mod parser;
mod security;
mod style;

// 公開API
pub use api::{StyleConfig, DEFAULT_TABLE_STYLE};
pub use builder::{Converter, ConverterBuilder};
pub use error::WikiTableError;
pub use grid::{Grid, Row};
pub use output::{render, render_to};
pub use parser::{parse, CELL_SEPARATOR, ROW_SEPARATOR, TRIM_CHARS};
pub use security::DEFAULT_MAX_INPUT_SIZE;
pub use style::{cell_style_for, row_style_for, Parity};

/// 貼り付けテキストを解析し、MediaWikiテーブルに変換する
///
/// `render(&parse(raw), config)`と同じです。失敗しません。
pub fn convert(raw: &str, config: &StyleConfig) -> String {
    render(&parse(raw), config)
}
