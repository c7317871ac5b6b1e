//! Best-score persistence on disk.
//!
//! The score file holds a single decimal integer and nothing else. A missing
//! file is a best score of 0; so is a file that doesn't parse, which is
//! logged and then overwritten by the next save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tui_2048_core::error::{Result, StoreError};
use tui_2048_core::ScoreStore;

pub use tui_2048_core as core;

/// [`ScoreStore`] backed by a plain-text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score. A missing file is `Ok(0)`.
    pub fn try_load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let trimmed = text.trim();
        trimmed
            .parse()
            .map_err(|_| StoreError::Malformed(trimmed.to_string()))
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match self.try_load() {
            Ok(best) => {
                log::debug!("loaded best score {} from {}", best, self.path.display());
                best
            }
            Err(e) => {
                log::warn!("ignoring score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, best: u32) -> Result<()> {
        fs::write(&self.path, best.to_string())?;
        log::debug!("saved best score {} to {}", best, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Unique scratch path under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "tui-2048-store-{}-{}-{}",
            std::process::id(),
            n,
            name
        ))
    }

    #[test]
    fn missing_file_is_zero() {
        let store = FileScoreStore::new(scratch("missing"));
        assert_eq!(store.try_load().expect("missing is not an error"), 0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = scratch("roundtrip");
        let mut store = FileScoreStore::new(&path);
        store.save(2048).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "2048");
        assert_eq!(FileScoreStore::new(&path).load(), 2048);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let path = scratch("newline");
        fs::write(&path, " 512\n").expect("write");
        assert_eq!(FileScoreStore::new(&path).load(), 512);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_file_loads_as_zero() {
        let path = scratch("garbage");
        fs::write(&path, "high score: lots").expect("write");
        let store = FileScoreStore::new(&path);
        assert!(matches!(store.try_load(), Err(StoreError::Malformed(_))));
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn negative_numbers_are_malformed() {
        let path = scratch("negative");
        fs::write(&path, "-5").expect("write");
        assert_eq!(FileScoreStore::new(&path).load(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let mut store = FileScoreStore::new(scratch("no-such-dir").join("best.txt"));
        assert!(matches!(store.save(10), Err(StoreError::Io(_))));
    }
}
