//! 台帳の型定義
//!
//! - FileRecord: 走査で見つかった1ファイル
//! - InventoryRow: Inventoryシートの1行

use crate::classifier::Classification;
use crate::key::SortKey;
use std::path::PathBuf;

/// 走査で見つかったファイル（生成後は変更しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// 絶対パス
    pub path: PathBuf,
    /// 拡張子なしのファイル名
    pub stem: String,
    pub key: SortKey,
    pub classification: Classification,
}

/// Inventoryシートの1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRow {
    pub file_name: String,
    pub format: String,
    pub extent: String,
    /// 手入力用（常に空で出力）
    pub scanning_notes: String,
    /// 手入力用（常に空で出力）
    pub description: String,
}

impl From<&FileRecord> for InventoryRow {
    fn from(record: &FileRecord) -> Self {
        Self {
            file_name: record.stem.clone(),
            format: record.classification.format.clone(),
            extent: record.classification.extent.clone(),
            scanning_notes: String::new(),
            description: String::new(),
        }
    }
}
