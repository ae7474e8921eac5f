//! Style Resolution Module
//!
//! 偶数・奇数の交互スタイル（alternation）の解決ルールを提供するモジュール。
//!
//! インデックスは「生の位置」で判定します。列見出し行を除いた後に
//! 番号を振り直すことはしません。列見出しが有効な場合、最初の本体行は
//! インデックス1（奇数）です。

use crate::api::StyleConfig;

/// インデックスの偶奇
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// 0始まりのインデックスから偶奇を判定
    pub fn of(index: usize) -> Self {
        if index % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

/// 2つのスタイルから実効スタイルを選ぶ
///
/// 奇数位置かつ`other`が空でない場合は`other`、それ以外は`base`。
/// 結果が空文字列の場合は`None`を返します。
fn alternate<'a>(parity: Parity, base: &'a str, other: &'a str) -> Option<&'a str> {
    let style = match parity {
        Parity::Odd if !other.is_empty() => other,
        _ => base,
    };

    (!style.is_empty()).then_some(style)
}

/// 行インデックス`row_index`の本体行に適用する行スタイル
pub fn row_style_for(config: &StyleConfig, row_index: usize) -> Option<&str> {
    alternate(
        Parity::of(row_index),
        &config.row_style,
        &config.other_row_style,
    )
}

/// セルインデックス`cell_index`の本体セルに適用するセルスタイル
pub fn cell_style_for(config: &StyleConfig, cell_index: usize) -> Option<&str> {
    alternate(
        Parity::of(cell_index),
        &config.cell_style,
        &config.other_cell_style,
    )
}

/// 空でない場合のみ値を返す
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
