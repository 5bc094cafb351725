//! File-based store for the most recent analysis result.
//!
//! The report is kept as JSON in the per-user cache directory, e.g.
//! ~/.cache/timecheck/last_result.json on Linux.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Report;

/// File name of the stored report.
pub const LAST_RESULT_FILE: &str = "last_result.json";

/// Holds the last successful report between runs.
pub struct LastResultStore {
    cache_dir: Option<PathBuf>,
}

impl LastResultStore {
    /// Store in the platform cache directory.
    pub fn new() -> Self {
        let cache_dir = ProjectDirs::from("", "", "timecheck").map(|dirs| dirs.cache_dir().to_path_buf());
        Self { cache_dir }
    }

    /// Store rooted at an explicit directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            cache_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Location of the stored report, if a cache directory is known.
    pub fn path(&self) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join(LAST_RESULT_FILE))
    }

    /// Replace the stored report.
    pub fn save(&self, report: &Report) -> anyhow::Result<PathBuf> {
        let path = self
            .path()
            .ok_or_else(|| anyhow::anyhow!("no cache directory available"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(report)?)?;
        Ok(path)
    }

    /// The stored report. Missing or unreadable files yield None.
    pub fn load(&self) -> Option<Report> {
        let content = fs::read_to_string(self.path()?).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl Default for LastResultStore {
    fn default() -> Self {
        Self::new()
    }
}
