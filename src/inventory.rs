//! 台帳の組み立て
//!
//! 走査 → ソート → 分類 → 行の作成 → Excel出力 を順に行う。

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::export;
use crate::scanner;
use slide_inventory_common::{extract_key, ordering_key, Classifier, FileRecord, InventoryRow};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 出力結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub rows: usize,
    pub output: PathBuf,
}

/// フォルダを走査し、ソート済みの FileRecord を作る
///
/// TIFFが1件もなければ [`InventoryError::NoTiffFound`]。
pub fn collect_records(folder: &Path, classifier: &Classifier) -> Result<Vec<FileRecord>> {
    let folder = folder
        .canonicalize()
        .map_err(|_| InventoryError::FolderNotFound(folder.display().to_string()))?;

    let mut paths = scanner::scan_folder(&folder)?;
    if paths.is_empty() {
        return Err(InventoryError::NoTiffFound(folder.display().to_string()));
    }

    // 同じキー同士は走査順のまま（安定ソート）
    paths.sort_by_cached_key(|p| ordering_key(&file_stem(p)));

    let records = paths
        .into_iter()
        .map(|path| {
            let stem = file_stem(&path);
            // 分類はフルパスに対して行う（フォルダ名も手がかりになる）
            let classification = classifier.classify(&path.to_string_lossy()).clone();
            debug!(
                file = %stem,
                format = %classification.format,
                extent = %classification.extent,
                "classified"
            );
            FileRecord {
                key: extract_key(&stem),
                stem,
                path,
                classification,
            }
        })
        .collect();

    Ok(records)
}

/// 台帳Excelを生成する
///
/// 出力先の拡張子は `.xlsx` にそろえる。既存ファイルは上書き。
pub fn build_inventory(folder: &Path, output: &Path, config: &Config) -> Result<InventorySummary> {
    let classifier = config.classifier()?;
    let lists = config.reference_lists();

    let records = collect_records(folder, &classifier)?;
    info!(count = records.len(), "tiff files collected");

    let rows: Vec<InventoryRow> = records.iter().map(InventoryRow::from).collect();
    let output = export::excel::write_inventory(&rows, &lists, output)?;

    Ok(InventorySummary {
        rows: rows.len(),
        output,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_collect_records_sorted_by_key() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "A-2_01.tif");
        touch(dir.path(), "A-1_10.tif");
        touch(dir.path(), "A-1_002.tif");
        touch(dir.path(), "aaa.tif");
        touch(dir.path(), "B-10_1.tif");

        let classifier = Classifier::builtin().unwrap();
        let records = collect_records(dir.path(), &classifier).unwrap();
        let stems: Vec<&str> = records.iter().map(|r| r.stem.as_str()).collect();

        assert_eq!(stems, vec!["A-1_002", "A-1_10", "A-2_01", "B-10_1", "aaa"]);
        assert_eq!(records[0].key, (1, 2));
        assert_eq!(records[4].key, (999, 999));
    }

    #[test]
    fn test_unmatched_after_large_keys() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "000.tif");
        touch(dir.path(), "x-1000_1.tif");

        let classifier = Classifier::builtin().unwrap();
        let records = collect_records(dir.path(), &classifier).unwrap();
        assert_eq!(records[0].stem, "x-1000_1");
        assert_eq!(records[1].stem, "000");
    }

    #[test]
    fn test_collect_records_nested_and_classified() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("prints");
        fs::create_dir_all(&sub).unwrap();
        touch(&sub, "fam_4x6-1_1.TIF");
        touch(dir.path(), "roll_bw_-1_2.tiff");

        let classifier = Classifier::builtin().unwrap();
        let records = collect_records(dir.path(), &classifier).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stem, "fam_4x6-1_1");
        assert_eq!(records[0].classification.extent, "4 x 6 in (print)");
        assert_eq!(records[1].classification.format, "b&w slide");
        assert!(records[0].path.is_absolute());
    }

    #[test]
    fn test_collect_records_no_tiff() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "readme.txt");

        let classifier = Classifier::builtin().unwrap();
        let result = collect_records(dir.path(), &classifier);
        assert!(matches!(result, Err(InventoryError::NoTiffFound(_))));
    }

    #[test]
    fn test_collect_records_missing_folder() {
        let classifier = Classifier::builtin().unwrap();
        let result = collect_records(Path::new("/nonexistent/path/12345"), &classifier);
        assert!(matches!(result, Err(InventoryError::FolderNotFound(_))));
    }

    #[test]
    fn test_stem_keeps_inner_dots() {
        assert_eq!(file_stem(Path::new("/a/B.v2-1_3.tif")), "B.v2-1_3");
    }
}
