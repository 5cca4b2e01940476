use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描下載目錄，回傳名稱符合條件的資料夾（不再深入已符合的資料夾）
///
/// 指向資料夾的符號連結也會被回傳，但不會跟著連結往下掃描
pub fn scan_download_dirs<F>(directory: &Path, matches: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> bool,
{
    let mut found = Vec::new();
    let mut walker = WalkDir::new(directory)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let Ok(entry) = entry else {
            continue;
        };
        let is_real_dir = entry.file_type().is_dir();
        if !is_real_dir && !entry.path().is_dir() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(&matches) {
            // 未跟隨的連結不在走訪堆疊上，略過它會誤跳過同層其他項目
            if is_real_dir {
                walker.skip_current_dir();
            }
            found.push(entry.into_path());
        }
    }

    found
}

/// 資料夾是否沒有任何項目
pub fn is_directory_empty(path: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next().is_none())
}

/// 列出資料夾下所有檔案（相對路徑）
pub fn list_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(directory)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn is_ufc(name: &str) -> bool {
        name.to_uppercase().starts_with("UFC.")
    }

    #[test]
    fn test_scan_download_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("UFC.300.1080p")).unwrap();
        fs::create_dir_all(root.join("movies").join("ufc.301.720p")).unwrap();
        fs::create_dir_all(root.join("Other.Show.S01E01")).unwrap();
        fs::write(root.join("UFC.302.mkv"), b"file, not a directory").unwrap();

        let dirs = scan_download_dirs(root, is_ufc);
        assert_eq!(
            dirs,
            vec![
                root.join("UFC.300.1080p"),
                root.join("movies").join("ufc.301.720p"),
            ]
        );
    }

    #[test]
    fn test_scan_does_not_descend_into_matches() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("UFC.300.1080p").join("UFC.300.Sample")).unwrap();

        let dirs = scan_download_dirs(root, is_ufc);
        assert_eq!(dirs, vec![root.join("UFC.300.1080p")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_includes_symlinked_directories() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let storage = temp_dir.path().join("storage");
        let root = temp_dir.path().join("completed");
        fs::create_dir_all(storage.join("UFC.300.1080p")).unwrap();
        fs::create_dir_all(storage.join("misc").join("UFC.299.720p")).unwrap();
        fs::create_dir_all(root.join("UFC.302.1080p")).unwrap();
        symlink(storage.join("UFC.300.1080p"), root.join("UFC.301.1080p")).unwrap();
        symlink(storage.join("misc"), root.join("linked")).unwrap();

        let dirs = scan_download_dirs(&root, is_ufc);
        // 連結本身符合時回傳，且不影響同層後續項目；不符合的連結不往下掃
        assert_eq!(
            dirs,
            vec![root.join("UFC.301.1080p"), root.join("UFC.302.1080p")]
        );
    }

    #[test]
    fn test_scan_skips_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("UFC.root");
        fs::create_dir_all(&root).unwrap();
        assert!(scan_download_dirs(&root, is_ufc).is_empty());
    }

    #[test]
    fn test_is_directory_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_directory_empty(temp_dir.path()).unwrap());

        fs::write(temp_dir.path().join("a.mkv"), b"x").unwrap();
        assert!(!is_directory_empty(temp_dir.path()).unwrap());
        assert!(is_directory_empty(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_list_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Subs")).unwrap();
        fs::write(temp_dir.path().join("ufc.300.mkv"), b"x").unwrap();
        fs::write(temp_dir.path().join("Subs").join("en.srt"), b"x").unwrap();

        let files = list_files(temp_dir.path());
        assert_eq!(
            files,
            vec![PathBuf::from("Subs").join("en.srt"), PathBuf::from("ufc.300.mkv")]
        );
    }
}
