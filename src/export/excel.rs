//! Excel生成（CLI版）
//!
//! ワークブック本体は共通ライブラリでメモリ上に組み立て、成功したときだけ書き出す

use super::output_path;
use crate::error::Result;
use slide_inventory_common::export::generate_inventory_buffer;
use slide_inventory_common::{InventoryRow, ReferenceLists};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 台帳を書き出し、実際に書いたパス（絶対パス）を返す
pub fn write_inventory(rows: &[InventoryRow], lists: &ReferenceLists, output: &Path) -> Result<PathBuf> {
    let path = output_path(output);
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };

    let buffer = generate_inventory_buffer(rows, lists)?;
    std::fs::write(&path, &buffer)?;
    debug!(bytes = buffer.len(), path = %path.display(), "workbook written");

    Ok(path)
}
