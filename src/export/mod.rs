pub mod excel;

use std::path::{Path, PathBuf};

const XLSX_EXTENSION: &str = "xlsx";

/// 出力パスの拡張子を `.xlsx` にそろえる
///
/// 既存の拡張子は置き換える（`out.csv` → `out.xlsx`）。
pub fn output_path(output: &Path) -> PathBuf {
    match output.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(XLSX_EXTENSION) => output.to_path_buf(),
        _ => output.with_extension(XLSX_EXTENSION),
    }
}
