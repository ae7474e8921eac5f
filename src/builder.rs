//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::io::{BufWriter, Read, Write};

use rayon::prelude::*;

use crate::api::StyleConfig;
use crate::error::WikiTableError;
use crate::security::InputLimits;

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use sheet2wiki::ConverterBuilder;
///
/// # fn main() -> Result<(), sheet2wiki::WikiTableError> {
/// let converter = ConverterBuilder::new()
///     .with_row_header(true)
///     .with_caption("Monthly sales")
///     .with_other_row_style("style='background:#f2f2f2'")
///     .build()?;
///
/// let markup = converter.convert_str("Month\tSales\nJan\t100");
/// assert!(markup.starts_with("{|class='wikitable'\n|+Monthly sales\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// スタイル設定（構築中）
    config: StyleConfig,

    /// 入力制限
    limits: InputLimits,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 列見出し: 有効（先頭行を見出しとして出力）
    /// - 行見出し: 無効
    /// - テーブルスタイル: `class='wikitable'`
    /// - キャプション・その他のスタイル: なし
    /// - 入力サイズ上限: 64MiB
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のスタイル設定から開始する
    ///
    /// JSONファイルから読み込んだ設定を、個別のセッターで上書きする場合に使用します。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheet2wiki::{ConverterBuilder, StyleConfig};
    ///
    /// # fn main() -> Result<(), sheet2wiki::WikiTableError> {
    /// let config = StyleConfig::from_json(r#"{"rowHeader": true}"#)?;
    /// let converter = ConverterBuilder::new()
    ///     .with_style_config(config)
    ///     .with_caption("Overridden")
    ///     .build()?;
    /// assert!(converter.config().row_header);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_style_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    /// 先頭行を列見出しとして扱うかを指定する
    pub fn with_column_header(mut self, enabled: bool) -> Self {
        self.config.column_header = enabled;
        self
    }

    /// 本体行の先頭セルを行見出しとして扱うかを指定する
    pub fn with_row_header(mut self, enabled: bool) -> Self {
        self.config.row_header = enabled;
        self
    }

    /// テーブルのキャプションを指定する（空文字列でキャプションなし）
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.config.table_caption = caption.into();
        self
    }

    /// テーブル全体の属性を指定する（例: `class='wikitable sortable'`）
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_table_style(mut self, style: impl Into<String>) -> Self {
        self.config.table_style = style.into();
        self
    }

    /// 列見出しセルの属性を指定する
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_column_header_style(mut self, style: impl Into<String>) -> Self {
        self.config.column_header_style = style.into();
        self
    }

    /// 行見出しセルの属性を指定する
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_row_header_style(mut self, style: impl Into<String>) -> Self {
        self.config.row_header_style = style.into();
        self
    }

    /// 本体行の属性を指定する
    ///
    /// 偶数・奇数の交互パターンにするには`with_other_row_style()`も指定します。
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_row_style(mut self, style: impl Into<String>) -> Self {
        self.config.row_style = style.into();
        self
    }

    /// 本体セルの属性を指定する
    ///
    /// 偶数・奇数の交互パターンにするには`with_other_cell_style()`も指定します。
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_cell_style(mut self, style: impl Into<String>) -> Self {
        self.config.cell_style = style.into();
        self
    }

    /// 奇数インデックスのセルに使う属性を指定する
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_other_cell_style(mut self, style: impl Into<String>) -> Self {
        self.config.other_cell_style = style.into();
        self
    }

    /// 奇数インデックスの行に使う属性を指定する
    ///
    /// インデックスはグリッド上の生の位置です。列見出しが有効な場合、
    /// 最初の本体行（インデックス1）がこのスタイルになります。
    ///
    /// 改行（`'\n'` / `'\r'`）を含む値は`build()`で`WikiTableError::Config`になります。
    pub fn with_other_row_style(mut self, style: impl Into<String>) -> Self {
        self.config.other_row_style = style.into();
        self
    }

    /// ストリーム入力の最大サイズ（バイト）を指定する
    ///
    /// # 制約
    ///
    /// * 0より大きくなければならない（違反時は`build()`で`WikiTableError::Config`）
    pub fn with_max_input_size(mut self, bytes: usize) -> Self {
        self.limits.max_input_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `WikiTableError::Config(String)`: 設定の検証に失敗した場合
    ///   * キャプションやスタイルに改行が含まれている
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<Converter, WikiTableError> {
        // 1. 文字列設定の検証（改行は行構造を壊す）
        for (name, value) in self.config.text_options() {
            if value.contains(['\n', '\r']) {
                return Err(WikiTableError::Config(format!(
                    "{} must not contain a line break: {:?}",
                    name, value
                )));
            }
        }

        // 2. 入力制限の検証
        if self.limits.max_input_size == 0 {
            return Err(WikiTableError::Config(
                "Invalid max input size: must be greater than 0".to_string(),
            ));
        }

        Ok(Converter::new(self.config, self.limits))
    }
}

/// 変換処理のファサード
///
/// 貼り付けテキストをMediaWikiテーブルに変換するためのメインエントリーポイントです。
/// 構築後の設定は不変で、`Converter`はスレッド間で共有できます。
#[derive(Debug, Clone)]
pub struct Converter {
    /// スタイル設定
    config: StyleConfig,

    /// 入力制限
    limits: InputLimits,
}

impl Converter {
    pub(crate) fn new(config: StyleConfig, limits: InputLimits) -> Self {
        Self { config, limits }
    }

    /// 変換に使用するスタイル設定
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// 貼り付けテキストを変換する
    ///
    /// 文字列を直接受け取る経路では入力サイズ制限を適用せず、失敗しません。
    pub fn convert_str(&self, raw: &str) -> String {
        let grid = crate::parser::parse(raw);
        tracing::debug!(
            rows = grid.len(),
            max_width = grid.max_width(),
            "parsed pasted grid"
        );
        crate::output::render(&grid, &self.config)
    }

    /// リーダーから貼り付けテキストを読み込み、マークアップをライターに書き出す
    ///
    /// # 処理フロー
    ///
    /// 1. 入力サイズ上限までを読み込み、UTF-8として検証
    /// 2. グリッドの構築
    /// 3. マークアップの生成と出力
    /// 4. 出力バッファをフラッシュ
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheet2wiki::ConverterBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), sheet2wiki::WikiTableError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let mut output = Vec::new();
    /// converter.convert(Cursor::new("A\tB"), &mut output)?;
    /// assert_eq!(output, b"{|class='wikitable'\n|-\n!A\n!B\n|}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read, W: Write>(&self, input: R, output: W) -> Result<(), WikiTableError> {
        // 1. 入力の読み込み
        let raw = self.read_input(input)?;
        tracing::debug!(bytes = raw.len(), "read pasted input");

        // 2-3. 変換
        let markup = self.convert_str(&raw);

        // 4. 出力とフラッシュ
        let mut writer = BufWriter::new(output);
        writer.write_all(markup.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    /// リーダーから貼り付けテキストを読み込み、マークアップ文字列を返す
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, WikiTableError> {
        let raw = self.read_input(input)?;
        Ok(self.convert_str(&raw))
    }

    /// 入力サイズ上限を適用してリーダーからテキストを読み込む
    ///
    /// `convert_batch()`に渡す入力を集める場合に使用します。
    pub fn read_input<R: Read>(&self, input: R) -> Result<String, WikiTableError> {
        self.limits.read_to_string(input)
    }

    /// 複数の貼り付けテキストを並列に変換する
    ///
    /// 各変換は独立しているため、rayonで並列に処理します。
    /// 結果は入力と同じ順序で返されます。
    pub fn convert_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<String> {
        tracing::debug!(count = inputs.len(), "converting batch");
        inputs
            .par_iter()
            .map(|raw| self.convert_str(raw.as_ref()))
            .collect()
    }
}
