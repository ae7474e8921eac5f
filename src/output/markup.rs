//! MediaWiki Table Markup
//!
//! テーブル記法の各行を組み立てる出力バッファ。

/// テーブル開始記号
pub(crate) const TABLE_OPEN: &str = "{|";
/// テーブル終了記号
pub(crate) const TABLE_CLOSE: &str = "|}";
/// キャプション記号
pub(crate) const CAPTION: &str = "|+";
/// 行区切り記号
pub(crate) const ROW_SEPARATOR: &str = "|-";
/// 見出しセル記号
pub(crate) const HEADER_CELL: &str = "!";
/// データセル記号、および属性とセル内容の区切り
pub(crate) const DATA_CELL: &str = "|";

/// マークアップを行単位で蓄積するバッファ
#[derive(Debug, Default)]
pub(crate) struct MarkupBuffer {
    out: String,
}

impl MarkupBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{|` + テーブルスタイル
    pub fn table_open(&mut self, style: Option<&str>) {
        self.out.push_str(TABLE_OPEN);
        if let Some(style) = style {
            self.out.push_str(style);
        }
        self.out.push('\n');
    }

    pub fn caption(&mut self, caption: &str) {
        self.out.push_str(CAPTION);
        self.out.push_str(caption);
        self.out.push('\n');
    }

    /// 列見出しブロックの行区切り（属性なし、末尾空白なし）
    pub fn header_row_separator(&mut self) {
        self.out.push_str(ROW_SEPARATOR);
        self.out.push('\n');
    }

    /// 本体行の行区切り
    ///
    /// スタイルの有無にかかわらず`|-`の後に空白を1つ置きます。
    pub fn body_row_separator(&mut self, style: Option<&str>) {
        self.out.push_str(ROW_SEPARATOR);
        self.out.push(' ');
        if let Some(style) = style {
            self.out.push_str(style);
        }
        self.out.push('\n');
    }

    /// `!` + (属性 + `|`) + セル内容
    pub fn header_cell(&mut self, style: Option<&str>, content: &str) {
        self.cell(HEADER_CELL, style, content);
    }

    /// `|` + (属性 + `|`) + セル内容
    pub fn data_cell(&mut self, style: Option<&str>, content: &str) {
        self.cell(DATA_CELL, style, content);
    }

    fn cell(&mut self, marker: &str, style: Option<&str>, content: &str) {
        self.out.push_str(marker);
        if let Some(style) = style {
            self.out.push_str(style);
            self.out.push_str(DATA_CELL);
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    pub fn table_close(&mut self) {
        self.out.push_str(TABLE_CLOSE);
    }

    pub fn finish(self) -> String {
        self.out
    }
}
