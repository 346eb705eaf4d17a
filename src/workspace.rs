//! Locating the `essay-sample/` folder and its well-known files.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const SAMPLE_DIR_NAME: &str = "essay-sample";
pub const INDEX_FILE_NAME: &str = "index.json";

/// Walk upward from `start` to find a directory containing `essay-sample/`.
pub fn find_sample_dir_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(SAMPLE_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => bail!(
                "no {SAMPLE_DIR_NAME}/ folder found — create it (or pass --dir) and run `otln sync`"
            ),
        }
    }
}

/// Walk upward from the current working directory to find the sample folder.
pub fn find_sample_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_sample_dir_from(&cwd)
}

/// Resolve the sample folder: an explicit `--dir` wins over discovery.
pub fn resolve_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => find_sample_dir(),
    }
}

pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_sample_dir_from_direct() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("essay-sample")).unwrap();
        let found = find_sample_dir_from(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("essay-sample"));
    }

    #[test]
    fn find_sample_dir_from_subdir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("essay-sample")).unwrap();
        fs::create_dir_all(dir.path().join("src/deep")).unwrap();
        let found = find_sample_dir_from(&dir.path().join("src/deep")).unwrap();
        assert_eq!(found, dir.path().join("essay-sample"));
    }

    #[test]
    fn find_sample_dir_fails_without_folder() {
        let dir = TempDir::new().unwrap();
        let err = find_sample_dir_from(dir.path()).unwrap_err().to_string();
        assert!(err.contains("otln sync"));
    }

    #[test]
    fn a_plain_file_named_essay_sample_does_not_count() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("essay-sample"), "").unwrap();
        assert!(find_sample_dir_from(dir.path()).is_err());
    }

    #[test]
    fn explicit_dir_flag_wins() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn index_path_is_inside_the_dir() {
        assert_eq!(
            index_path(Path::new("/tmp/essay-sample")),
            Path::new("/tmp/essay-sample/index.json")
        );
    }
}
