pub mod error;

pub use error::*;

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// catalog ファイルを直接指定する環境変数
pub const CATALOG_PATH_ENV: &str = "ARMPATH_CATALOG";

/// カレントディレクトリ・`.armpath/` で探すファイル名（優先順）
const CANDIDATES: [&str; 4] = [
    "armpath.local.kdl",
    ".armpath.local.kdl",
    "armpath.kdl",
    ".armpath.kdl",
];

/// armpath のグローバル設定ディレクトリ（`~/.config/armpath` など）
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("armpath"))
}

/// catalog ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 ARMPATH_CATALOG (直接パス指定)
/// 2. カレントディレクトリ: armpath.local.kdl, .armpath.local.kdl, armpath.kdl, .armpath.kdl
/// 3. ./.armpath/ ディレクトリ内: 同様の順序
/// 4. ~/.config/armpath/catalog.kdl (グローバル設定)
///
/// catalog は必須ではないため、見つからない場合は `Ok(None)` を返す。
#[tracing::instrument]
pub fn find_catalog_file() -> Result<Option<PathBuf>> {
    // 1. 環境変数で直接指定
    if let Ok(path_str) = std::env::var(CATALOG_PATH_ENV) {
        let path = PathBuf::from(&path_str);
        if path.exists() {
            info!(catalog_path = %path.display(), "Found catalog from environment variable");
            return Ok(Some(path));
        }
        warn!(env_path = %path_str, "ARMPATH_CATALOG is set but file does not exist");
    }

    let current_dir = std::env::current_dir()?;

    // 2. カレントディレクトリ → 3. ./.armpath/
    if let Some(path) = find_catalog_in(&current_dir) {
        return Ok(Some(path));
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join("armpath").join("catalog.kdl");
        if global.exists() {
            info!(catalog_path = %global.display(), "Found global catalog");
            return Ok(Some(global));
        }
    }

    debug!("Catalog file not found, using built-in resource types only");
    Ok(None)
}

/// 指定ディレクトリとその `.armpath/` から catalog ファイルを探す
pub fn find_catalog_in(dir: &Path) -> Option<PathBuf> {
    debug!(dir = %dir.display(), "Searching for catalog file");

    let local_dir = dir.join(".armpath");
    let search_dirs = [dir.to_path_buf(), local_dir];

    for search_dir in search_dirs.iter().filter(|d| d.is_dir()) {
        for filename in CANDIDATES {
            let path = search_dir.join(filename);
            if path.exists() {
                info!(catalog_path = %path.display(), "Found catalog file");
                return Some(path);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_get_config_dir() {
        let config_dir = get_config_dir().unwrap();
        assert!(config_dir.ends_with("armpath"));
    }

    #[test]
    fn test_find_catalog_in_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("armpath.kdl"), "// test").unwrap();

        let found = find_catalog_in(temp_dir.path()).unwrap();
        assert!(found.ends_with("armpath.kdl"));
    }

    #[test]
    fn test_find_catalog_in_empty_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(find_catalog_in(temp_dir.path()).is_none());
    }

    #[test]
    fn test_local_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("armpath.kdl"), "// shared").unwrap();
        fs::write(temp_dir.path().join("armpath.local.kdl"), "// local").unwrap();

        // armpath.local.kdl が優先される
        let found = find_catalog_in(temp_dir.path()).unwrap();
        assert!(found.ends_with("armpath.local.kdl"));
    }

    #[test]
    fn test_hidden_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".armpath.local.kdl"), "// hidden local").unwrap();
        fs::write(temp_dir.path().join("armpath.kdl"), "// visible").unwrap();

        let found = find_catalog_in(temp_dir.path()).unwrap();
        assert!(found.ends_with(".armpath.local.kdl"));
    }

    #[test]
    fn test_current_dir_wins_over_armpath_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let armpath_dir = temp_dir.path().join(".armpath");
        fs::create_dir(&armpath_dir).unwrap();
        fs::write(armpath_dir.join("armpath.local.kdl"), "// nested").unwrap();
        fs::write(temp_dir.path().join(".armpath.kdl"), "// top").unwrap();

        let found = find_catalog_in(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join(".armpath.kdl"));
    }

    #[test]
    #[serial]
    fn test_find_catalog_file_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        fs::write(temp_dir.path().join("armpath.kdl"), "// test").unwrap();

        // テンポラリディレクトリに移動
        std::env::set_current_dir(&temp_dir).unwrap();

        let found = find_catalog_file().unwrap().unwrap();
        assert!(found.ends_with("armpath.kdl"));

        // 元のディレクトリに戻る
        std::env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_catalog_file_in_armpath_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        let armpath_dir = temp_dir.path().join(".armpath");
        fs::create_dir(&armpath_dir).unwrap();
        fs::write(armpath_dir.join("armpath.kdl"), "// in armpath dir").unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let found = find_catalog_file().unwrap().unwrap();
        assert!(found.ends_with(".armpath/armpath.kdl"));

        std::env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_catalog_file_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog_path = temp_dir.path().join("custom.kdl");
        fs::write(&catalog_path, "// custom").unwrap();

        unsafe {
            std::env::set_var(CATALOG_PATH_ENV, catalog_path.to_str().unwrap());
        }

        let found = find_catalog_file().unwrap();
        assert_eq!(found, Some(catalog_path));

        // クリーンアップ
        unsafe {
            std::env::remove_var(CATALOG_PATH_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_find_catalog_file_env_var_missing_falls_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        fs::write(temp_dir.path().join("armpath.kdl"), "// fallback").unwrap();

        unsafe {
            std::env::set_var(CATALOG_PATH_ENV, temp_dir.path().join("missing.kdl"));
        }
        std::env::set_current_dir(&temp_dir).unwrap();

        let found = find_catalog_file().unwrap().unwrap();
        assert!(found.ends_with("armpath.kdl"));

        std::env::set_current_dir(original_dir).unwrap();
        unsafe {
            std::env::remove_var(CATALOG_PATH_ENV);
        }
    }
}
