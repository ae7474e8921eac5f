//! Paste Parser
//!
//! 改行で行を、タブでセルを区切り、各セルの前後の空白を取り除きます。
//! 区切り文字以外の解釈（引用符、エスケープなど）は行いません。

use crate::grid::{Grid, Row};

/// 行の区切り文字
pub const ROW_SEPARATOR: char = '\n';

/// セルの区切り文字
pub const CELL_SEPARATOR: char = '\t';

/// セルの前後から取り除く文字
///
/// 空白、タブ、改行、復帰、NUL、垂直タブのみ。NBSP（U+00A0）や
/// 全角空白（U+3000）などその他のUnicode空白は内容として保持します。
pub const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// 貼り付けテキストをグリッドに変換する
///
/// 空文字列を含むあらゆる入力を受け付け、失敗しません。
/// 空の入力は「空セルが1つだけの行」を1行持つグリッドになります。
/// CRLF改行の`'\r'`はセルのトリムで取り除かれます。
///
/// # 使用例
///
/// ```rust
/// use sheet2wiki::parse;
///
/// let grid = parse("A\tB\nC\tD");
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.row(1).unwrap(), ["C", "D"]);
/// ```
pub fn parse(raw: &str) -> Grid {
    Grid::from_rows(raw.split(ROW_SEPARATOR).map(parse_row).collect())
}

/// 1行分の文字列をトリム済みセルに分割する
fn parse_row(line: &str) -> Row {
    line.split(CELL_SEPARATOR)
        .map(|cell| cell.trim_matches(TRIM_CHARS).to_string())
        .collect()
}
