//! Public API Types
//!
//! 公開APIで使用するスタイル設定型を定義するモジュール。

use serde::{Deserialize, Serialize};

use crate::error::WikiTableError;

/// `tableStyle`のデフォルト値
pub const DEFAULT_TABLE_STYLE: &str = "class='wikitable'";

/// テーブルのスタイル設定
///
/// 10個の独立した設定項目を持ち、すべてにデフォルト値があります。
/// 空文字列のスタイルは「指定なし」として扱われ、マークアップには出力されません。
///
/// JSONとの相互変換ではcamelCaseのキー（`columnHeader`, `otherRowStyle`など）を使用し、
/// 省略されたキーはデフォルト値になります。
///
/// # 使用例
///
/// ```rust
/// use sheet2wiki::{convert, StyleConfig};
///
/// let config = StyleConfig {
///     row_header: true,
///     other_row_style: "style='background:#eee'".to_string(),
///     ..StyleConfig::default()
/// };
///
/// let markup = convert("Name\tScore\nAlice\t10", &config);
/// assert!(markup.contains("!Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// 先頭行を列見出しとして扱うか（デフォルト: `true`）
    pub column_header: bool,

    /// 本体行の先頭セルを行見出しとして扱うか（デフォルト: `false`）
    pub row_header: bool,

    /// テーブルのキャプション（空の場合は出力しない）
    pub table_caption: String,

    /// テーブル開始記号`{|`に付ける属性（デフォルト: `class='wikitable'`）
    pub table_style: String,

    /// 列見出しセルの属性
    pub column_header_style: String,

    /// 行見出しセルの属性
    pub row_header_style: String,

    /// 本体行の区切り`|-`に付ける属性
    pub row_style: String,

    /// 本体セルの属性
    pub cell_style: String,

    /// 奇数インデックスのセルで`cell_style`の代わりに使う属性（空なら無効）
    pub other_cell_style: String,

    /// 奇数インデックスの行で`row_style`の代わりに使う属性（空なら無効）
    pub other_row_style: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            column_header: true,
            row_header: false,
            table_caption: String::new(),
            table_style: DEFAULT_TABLE_STYLE.to_string(),
            column_header_style: String::new(),
            row_header_style: String::new(),
            row_style: String::new(),
            cell_style: String::new(),
            other_cell_style: String::new(),
            other_row_style: String::new(),
        }
    }
}

impl StyleConfig {
    /// JSON文字列からスタイル設定を読み込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(StyleConfig)` - 解析に成功した場合
    /// * `Err(WikiTableError::Json)` - JSONが不正な場合
    pub fn from_json(json: &str) -> Result<Self, WikiTableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// スタイル設定を整形済みJSON文字列に変換する
    pub fn to_json_pretty(&self) -> Result<String, WikiTableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 文字列型の設定項目を（JSONキー名, 値）の組で列挙する
    pub(crate) fn text_options(&self) -> [(&'static str, &str); 8] {
        [
            ("tableCaption", self.table_caption.as_str()),
            ("tableStyle", self.table_style.as_str()),
            ("columnHeaderStyle", self.column_header_style.as_str()),
            ("rowHeaderStyle", self.row_header_style.as_str()),
            ("rowStyle", self.row_style.as_str()),
            ("cellStyle", self.cell_style.as_str()),
            ("otherCellStyle", self.other_cell_style.as_str()),
            ("otherRowStyle", self.other_row_style.as_str()),
        ]
    }
}
