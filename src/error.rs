//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! 変換処理の中核（`parse` / `render`）は失敗しません。ここで定義するエラーは、
//! ストリーム入出力、設定の検証、JSON設定の読み込みでのみ発生します。

use thiserror::Error;

/// sheet2wikiクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: 入力の読み込み・出力の書き込み中に発生したエラー
/// - `Utf8`: 入力ストリームが有効なUTF-8ではない
/// - `Json`: JSON形式のスタイル設定の解析エラー
/// - `Config`: `ConverterBuilder::build()`時の設定検証エラー
/// - `SecurityViolation`: 入力サイズ制限に違反した
///
/// # 使用例
///
/// ```rust,no_run
/// use sheet2wiki::{ConverterBuilder, WikiTableError};
/// use std::fs::File;
///
/// fn convert_file(path: &str) -> Result<String, WikiTableError> {
///     let converter = ConverterBuilder::new().build()?;
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     converter.convert_to_string(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum WikiTableError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 入力をUTF-8文字列に変換できなかったエラー
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON形式のスタイル設定の解析・生成エラー
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// 例えば、スタイル文字列に改行が含まれている場合に発生します。
    /// 改行を含むスタイルはマークアップの行構造を壊すためです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use sheet2wiki::{ConverterBuilder, WikiTableError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_row_style("color:red\nbackground:blue")
    ///     .build();
    ///
    /// match result {
    ///     Err(WikiTableError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ストリームが`max_input_size`を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
