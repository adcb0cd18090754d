//! History Store
//! Append-only list of past conversions, backed by a JSON file.
//!
//! A missing file is a fresh start, not an error. Saves go through a temp
//! file and rename so a crash mid-write cannot corrupt the existing history.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Metadata kept per conversion: the rendered image is the real output, this
/// is just enough to find it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub due_date: NaiveDate,
    pub items: usize,
    pub total: i64,
    pub file: PathBuf,
}

/// Conversion history, loaded at startup and saved after every change.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load history from `path`. A missing file yields an empty store.
    pub fn load(path: PathBuf) -> Result<Self, HistoryError> {
        let entries = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            serde_json::from_reader(reader)?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "history loaded");
        Ok(Self { path, entries })
    }

    /// Empty store at `path`; used when a corrupt file should not block startup.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and persist the whole list.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        self.save()
    }

    /// Drop all entries and persist the empty list.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file, then rename over the target.
        let temp_path = self.path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}
