//! Boundary Tests for sheet2wiki
//!
//! 空入力、不揃いな行、空白のみの行など、境界条件での出力を検証します。

use sheet2wiki::{convert, parse, Grid, StyleConfig};

fn defaults() -> StyleConfig {
    StyleConfig::default()
}

#[test]
fn test_empty_grid_with_caption() {
    let config = StyleConfig {
        table_caption: "Nothing here".to_string(),
        ..defaults()
    };
    assert_eq!(
        sheet2wiki::render(&Grid::default(), &config),
        "{|class='wikitable'\n|+Nothing here\n|}"
    );
}

#[test]
fn test_all_empty_configuration() {
    let config = StyleConfig {
        column_header: false,
        table_style: String::new(),
        ..defaults()
    };
    assert_eq!(convert("", &config), "{|\n|}");
    assert_eq!(convert("a", &config), "{|\n|- \n|a\n|}");
}

#[test]
fn test_newline_only_input() {
    // 先頭行が空のため本体は出力しない
    assert_eq!(convert("\n\n", &defaults()), "{|class='wikitable'\n|}");
    assert_eq!(convert("\r\n", &defaults()), "{|class='wikitable'\n|}");
}

#[test]
fn test_tab_only_first_row_is_rendered() {
    // タブで区切られた空セルは2セルの行として扱う
    assert_eq!(
        convert("\t", &defaults()),
        "{|class='wikitable'\n|-\n!\n!\n|}"
    );
}

#[test]
fn test_empty_rows_after_first_are_rendered() {
    let config = StyleConfig {
        column_header: false,
        ..defaults()
    };
    assert_eq!(
        convert("a\n\nb", &config),
        "{|class='wikitable'\n|- \n|a\n|- \n|\n|- \n|b\n|}"
    );
}

#[test]
fn test_ragged_rows_no_padding_no_truncation() {
    let raw = "A\tB\tC\tD\n1\n2\t3\n4\t5\t6\t7\t8";
    let markup = convert(raw, &defaults());

    assert_eq!(
        markup,
        "{|class='wikitable'\n\
         |-\n!A\n!B\n!C\n!D\n\
         |- \n|1\n\
         |- \n|2\n|3\n\
         |- \n|4\n|5\n|6\n|7\n|8\n\
         |}"
    );
}

#[test]
fn test_single_cell() {
    assert_eq!(convert("only", &defaults()), "{|class='wikitable'\n|-\n!only\n|}");
}

#[test]
fn test_very_long_cell_content() {
    let long = "x".repeat(100_000);
    let markup = convert(&format!("H\n{}", long), &defaults());
    assert!(markup.contains(&format!("\n|{}\n", long)));
}

#[test]
fn test_many_rows_alternate_consistently() {
    let raw: Vec<String> = (0..1_000).map(|i| i.to_string()).collect();
    let config = StyleConfig {
        column_header: false,
        row_style: "e".to_string(),
        other_row_style: "o".to_string(),
        ..defaults()
    };
    let markup = convert(&raw.join("\n"), &config);
    let separators: Vec<&str> = markup.lines().filter(|l| l.starts_with("|-")).collect();

    assert_eq!(separators.len(), 1_000);
    for (i, sep) in separators.iter().enumerate() {
        let expected = if i % 2 == 1 { "|- o" } else { "|- e" };
        assert_eq!(*sep, expected, "row {}", i);
    }
}

#[test]
fn test_wiki_markup_in_cells_passes_through() {
    let markup = convert("|}\t{|\n!x\t|-", &defaults());
    assert_eq!(
        markup,
        "{|class='wikitable'\n|-\n!|}\n!{|\n|- \n|!x\n||-\n|}"
    );
}

#[test]
fn test_multibyte_content() {
    let grid = parse("名前\t点数\n山田\t９０");
    assert_eq!(grid.row(1).unwrap(), ["山田", "９０"]);
    assert_eq!(
        convert("名前\t点数\n山田\t９０", &defaults()),
        "{|class='wikitable'\n|-\n!名前\n!点数\n|- \n|山田\n|９０\n|}"
    );
}

#[test]
fn test_unicode_spaces_survive_cell_trimming() {
    // NBSPと全角空白は内容として残り、NULは取り除かれる
    assert_eq!(
        convert("\u{a0}A\t\u{3000}\0", &defaults()),
        "{|class='wikitable'\n|-\n!\u{a0}A\n!\u{3000}\n|}"
    );
}
