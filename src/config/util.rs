//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/content/guide/  ← start
/// /home/user/docs/docseo.toml     ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Find config file by searching upward from the current directory
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docseo.toml"), "").unwrap();

        let found = find_config_file_from(temp.path(), Path::new("docseo.toml"));
        assert_eq!(found, Some(temp.path().join("docseo.toml")));
    }

    #[test]
    fn test_find_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docseo.toml"), "").unwrap();
        let nested = temp.path().join("content").join("guide");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested, Path::new("docseo.toml"));
        assert_eq!(found, Some(temp.path().join("docseo.toml")));
    }

    #[test]
    fn test_directory_with_config_name_is_skipped() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a");
        fs::create_dir_all(nested.join("docseo.toml")).unwrap();
        fs::write(temp.path().join("docseo.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docseo.toml"));
        assert_eq!(found, Some(temp.path().join("docseo.toml")));
    }

    #[test]
    fn test_absolute_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert_eq!(find_config_file_from(temp.path(), &missing), None);
    }
}
