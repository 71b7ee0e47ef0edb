use crate::error::{InventoryError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const TIFF_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// フォルダ以下を再帰的に走査し、TIFFファイルのパスを返す
///
/// 順序は走査順（ディレクトリ内はファイル名順）。並べ替えは呼び出し側で行う。
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(InventoryError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // シンボリックリンク先も対象にする
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().is_some_and(|ext| is_tiff_extension(&ext.to_string_lossy())) {
            files.push(path.to_path_buf());
        }
    }

    debug!(count = files.len(), folder = %folder.display(), "scan complete");
    Ok(files)
}

/// 拡張子がTIFFか（大文字小文字は区別しない）
pub fn is_tiff_extension(ext: &str) -> bool {
    TIFF_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_is_tiff_extension() {
        assert!(is_tiff_extension("tif"));
        assert!(is_tiff_extension("TIF"));
        assert!(is_tiff_extension("tiff"));
        assert!(is_tiff_extension("TiFf"));
        assert!(!is_tiff_extension("jpg"));
        assert!(!is_tiff_extension("txt"));
        assert!(!is_tiff_extension("tifff"));
        assert!(!is_tiff_extension(""));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(InventoryError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.tif");
        File::create(&file).unwrap();

        let result = scan_folder(&file);
        assert!(matches!(result, Err(InventoryError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        assert!(scan_folder(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("box1").join("strip2");
        fs::create_dir_all(&nested).unwrap();

        File::create(dir.path().join("a.tif")).unwrap();
        File::create(dir.path().join("box1").join("b.TIFF")).unwrap();
        File::create(nested.join("c.Tif")).unwrap();
        File::create(nested.join("d.jpg")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.is_absolute() || p.starts_with(dir.path())));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_folder_follows_symlinked_tiff() {
        let dir = tempdir().unwrap();
        let store = tempdir().unwrap();
        File::create(dir.path().join("A-1_02.tif")).unwrap();
        File::create(store.path().join("original.tif")).unwrap();
        std::os::unix::fs::symlink(store.path().join("original.tif"), dir.path().join("A-1_01.tif")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("A-1_01.tif")));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_folder_skips_dangling_symlink() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.tif"), dir.path().join("A-1_01.tif")).unwrap();

        assert!(scan_folder(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_folder_skips_tiff_named_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scans.tif")).unwrap();
        File::create(dir.path().join("scans.tif").join("x.tif")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("scans.tif/x.tif"));
    }
}
