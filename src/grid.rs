//! Grid Module
//!
//! 貼り付けテキストから構築される行×セルのグリッド構造を提供するモジュール。
//! 行ごとのセル数は揃えません（パディングも切り詰めも行わない）。

/// 1行分のセル（トリム済みの文字列）
pub type Row = Vec<String>;

/// 解析済みのグリッド
///
/// `parse()`で一度だけ構築され、以後は読み取り専用です。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// グリッドデータ（行 × セル）
    rows: Vec<Row>,
}

impl Grid {
    /// 行データからグリッドを構築
    ///
    /// セル内容はそのまま保持されます（トリムは行いません）。
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 行が1つもないか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 指定インデックスの行を取得
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// すべての行
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// 行のイテレータ
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// 最も長い行のセル数
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// 本体を出力できるグリッドかどうか
    ///
    /// グリッドが空、または先頭行が空の場合は`false`を返します。
    /// 先頭行が空とは、セルが無いか、唯一のセルが空文字列である状態
    /// （空行・空白のみの行から生成された行）を指します。
    pub fn is_renderable(&self) -> bool {
        match self.rows.first() {
            None => false,
            Some(first) => match first.as_slice() {
                [] => false,
                [only] => !only.is_empty(),
                _ => true,
            },
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
