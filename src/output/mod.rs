//! Output Module
//!
//! グリッドとスタイル設定からMediaWikiテーブルのマークアップを生成するモジュール。
//!
//! 出力順序:
//!
//! 1. テーブル開始記号（`{|` + テーブルスタイル）
//! 2. キャプション（`|+`、空でない場合のみ）
//! 3. 列見出しブロック（先頭行、`column_header`が有効な場合）
//! 4. 本体行（`|-` + 行スタイル、続いて各セル）
//! 5. テーブル終了記号（`|}`、末尾改行なし）

mod markup;

use std::io::Write;

use crate::api::StyleConfig;
use crate::error::WikiTableError;
use crate::grid::Grid;
use crate::style::{cell_style_for, non_empty, row_style_for};

use markup::MarkupBuffer;

/// グリッドをMediaWikiテーブルのマークアップに変換する
///
/// どのようなグリッドと設定の組み合わせでも文字列を返し、失敗しません。
/// セル内容のエスケープは行わないため、セル内のウィキ記法はそのまま出力されます。
///
/// # 使用例
///
/// ```rust
/// use sheet2wiki::{parse, render, StyleConfig};
///
/// let grid = parse("A\tB\nC\tD");
/// let markup = render(&grid, &StyleConfig::default());
/// assert_eq!(markup, "{|class='wikitable'\n|-\n!A\n!B\n|- \n|C\n|D\n|}");
/// ```
pub fn render(grid: &Grid, config: &StyleConfig) -> String {
    let mut out = MarkupBuffer::new();

    out.table_open(non_empty(&config.table_style));
    if let Some(caption) = non_empty(&config.table_caption) {
        out.caption(caption);
    }

    if grid.is_renderable() {
        for (row_index, row) in grid.iter().enumerate() {
            if row_index == 0 && config.column_header {
                render_column_header(&mut out, row, config);
            } else {
                render_body_row(&mut out, row_index, row, config);
            }
        }
    }

    out.table_close();
    out.finish()
}

/// マークアップを任意のライターに書き出す
///
/// # 戻り値
///
/// * `Ok(())` - 出力に成功した場合
/// * `Err(WikiTableError::Io)` - 書き込みに失敗した場合
pub fn render_to<W: Write>(
    grid: &Grid,
    config: &StyleConfig,
    writer: &mut W,
) -> Result<(), WikiTableError> {
    writer.write_all(render(grid, config).as_bytes())?;
    Ok(())
}

/// 列見出しブロックを出力
///
/// 行・セルのスタイルと`row_header`は無視します。
fn render_column_header(out: &mut MarkupBuffer, row: &[String], config: &StyleConfig) {
    out.header_row_separator();
    let style = non_empty(&config.column_header_style);
    for cell in row {
        out.header_cell(style, cell);
    }
}

/// 本体行を出力
fn render_body_row(out: &mut MarkupBuffer, row_index: usize, row: &[String], config: &StyleConfig) {
    out.body_row_separator(row_style_for(config, row_index));

    for (cell_index, cell) in row.iter().enumerate() {
        if cell_index == 0 && config.row_header {
            out.header_cell(non_empty(&config.row_header_style), cell);
        } else {
            out.data_cell(cell_style_for(config, cell_index), cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn render_raw(raw: &str, config: &StyleConfig) -> String {
        render(&parse(raw), config)
    }

    #[test]
    fn test_empty_input_default_config() {
        assert_eq!(
            render_raw("", &StyleConfig::default()),
            "{|class='wikitable'\n|}"
        );
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(
            render(&Grid::default(), &StyleConfig::default()),
            "{|class='wikitable'\n|}"
        );
    }

    #[test]
    fn test_whitespace_only_first_row_emits_wrapper_only() {
        let config = StyleConfig {
            table_caption: "Cap".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("   \nA\tB", &config),
            "{|class='wikitable'\n|+Cap\n|}"
        );
    }

    #[test]
    fn test_simple_table_with_column_header() {
        assert_eq!(
            render_raw("A\tB\nC\tD", &StyleConfig::default()),
            "{|class='wikitable'\n|-\n!A\n!B\n|- \n|C\n|D\n|}"
        );
    }

    #[test]
    fn test_row_header() {
        let config = StyleConfig {
            row_header: true,
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("A\tB\nC\tD", &config),
            "{|class='wikitable'\n|-\n!A\n!B\n|- \n!C\n|D\n|}"
        );
    }

    #[test]
    fn test_row_header_style() {
        let config = StyleConfig {
            row_header: true,
            row_header_style: "scope=row".to_string(),
            ..StyleConfig::default()
        };
        let out = render_raw("A\tB\nC\tD", &config);
        assert!(out.contains("\n!scope=row|C\n"));
        // 列見出しには行見出しスタイルを適用しない
        assert!(out.contains("\n!A\n!B\n"));
    }

    #[test]
    fn test_column_header_style() {
        let config = StyleConfig {
            column_header_style: "scope=col".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("A\tB", &config),
            "{|class='wikitable'\n|-\n!scope=col|A\n!scope=col|B\n|}"
        );
    }

    #[test]
    fn test_column_header_ignores_row_and_cell_styles() {
        let config = StyleConfig {
            row_header: true,
            row_style: "r".to_string(),
            cell_style: "c".to_string(),
            ..StyleConfig::default()
        };
        let out = render_raw("A\tB", &config);
        assert_eq!(out, "{|class='wikitable'\n|-\n!A\n!B\n|}");
    }

    #[test]
    fn test_no_column_header() {
        let config = StyleConfig {
            column_header: false,
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("A\tB\nC\tD", &config),
            "{|class='wikitable'\n|- \n|A\n|B\n|- \n|C\n|D\n|}"
        );
    }

    #[test]
    fn test_caption_and_empty_table_style() {
        let config = StyleConfig {
            table_style: String::new(),
            table_caption: "Results".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(render_raw("A", &config), "{|\n|+Results\n|-\n!A\n|}");
    }

    #[test]
    fn test_other_row_style_uses_raw_index() {
        let config = StyleConfig {
            column_header: false,
            other_row_style: "background:#eee".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("a\nb\nc", &config),
            "{|class='wikitable'\n|- \n|a\n|- background:#eee\n|b\n|- \n|c\n|}"
        );
    }

    #[test]
    fn test_first_body_row_after_header_is_odd() {
        let config = StyleConfig {
            row_style: "even".to_string(),
            other_row_style: "odd".to_string(),
            ..StyleConfig::default()
        };
        let out = render_raw("H\n1\n2", &config);
        assert_eq!(
            out,
            "{|class='wikitable'\n|-\n!H\n|- odd\n|1\n|- even\n|2\n|}"
        );
    }

    #[test]
    fn test_cell_style_alternation() {
        let config = StyleConfig {
            column_header: false,
            cell_style: "c0".to_string(),
            other_cell_style: "c1".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("a\tb\tc", &config),
            "{|class='wikitable'\n|- \n|c0|a\n|c1|b\n|c0|c\n|}"
        );
    }

    #[test]
    fn test_row_header_cell_skips_cell_style() {
        let config = StyleConfig {
            column_header: false,
            row_header: true,
            cell_style: "c".to_string(),
            ..StyleConfig::default()
        };
        assert_eq!(
            render_raw("a\tb", &config),
            "{|class='wikitable'\n|- \n!a\n|c|b\n|}"
        );
    }

    #[test]
    fn test_ragged_rows_render_independently() {
        let out = render_raw("A\tB\tC\nD\nE\tF", &StyleConfig::default());
        assert_eq!(
            out,
            "{|class='wikitable'\n|-\n!A\n!B\n!C\n|- \n|D\n|- \n|E\n|F\n|}"
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let out = render_raw("x\n[[Page|label]]\t{{tmpl}}", &StyleConfig::default());
        assert!(out.contains("\n|[[Page|label]]\n|{{tmpl}}\n"));
    }

    #[test]
    fn test_render_to_writer() {
        let mut buffer = Vec::new();
        render_to(&parse("A"), &StyleConfig::default(), &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{|class='wikitable'\n|-\n!A\n|}"
        );
    }
}
