//! Parser Module
//!
//! スプレッドシートからコピー＆ペーストしたテキスト（TSV）を
//! グリッドに変換するモジュール。

mod paste;

pub use paste::{parse, CELL_SEPARATOR, ROW_SEPARATOR, TRIM_CHARS};
