//! Path management for the RMA Pullback List Maker.
//!
//! Resolution order for the base directory:
//! 1. `RMA_PULLBACK_DATA_DIR` environment variable (if set)
//! 2. The current working directory
//!
//! The exports directory and the history file both live under the base
//! directory, so pointing the env var somewhere else relocates everything
//! the app writes.

use std::path::{Path, PathBuf};

/// Locations of everything the app reads or writes.
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths from the environment, falling back to the working directory.
    pub fn new() -> Self {
        let base_dir = std::env::var("RMA_PULLBACK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self { base_dir }
    }

    /// Build paths rooted at an explicit base directory (used by tests).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory the rendered images are written to.
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// JSON file holding the conversion history.
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("rma_history.json")
    }

    /// Create the exports directory if it does not exist yet.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.exports_dir())
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
