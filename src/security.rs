//! Security Module
//!
//! ストリーム入力に対する制限を定義するモジュール。
//! 文字列を直接渡す`parse` / `render`には適用されません。

use std::io::Read;

use crate::error::WikiTableError;

/// 入力サイズのデフォルト上限: 64MiB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// 入力制限の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InputLimits {
    /// 入力の最大サイズ（バイト）
    /// デフォルト: 64MiB
    pub max_input_size: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl InputLimits {
    /// 上限を超えないようにリーダーから全体を読み込む
    ///
    /// 上限+1バイトまでしか読まないため、巨大な入力でもメモリを使い切りません。
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 読み込んだUTF-8文字列
    /// * `Err(WikiTableError::SecurityViolation)` - 上限を超えた場合
    /// * `Err(WikiTableError::Utf8)` - UTF-8として不正な場合
    /// * `Err(WikiTableError::Io)` - 読み込みに失敗した場合
    pub fn read_to_string<R: Read>(&self, input: R) -> Result<String, WikiTableError> {
        let mut buffer = Vec::new();
        let limit = self.max_input_size as u64;
        let bytes_read = input.take(limit.saturating_add(1)).read_to_end(&mut buffer)?;

        if bytes_read as u64 > limit {
            tracing::warn!(max = self.max_input_size, "input exceeds size limit");
            return Err(WikiTableError::SecurityViolation(format!(
                "Input size exceeds maximum: more than {} bytes",
                self.max_input_size
            )));
        }

        Ok(String::from_utf8(buffer)?)
    }
}
