//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
