//! Report Exporter
//! Writes the rendered image under the exports directory and opens it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use super::{ConversionError, FileOpener, Report, SystemOpener, TableRenderer};

/// Filename for an export taken at `now`: `rma_parts_list_<YYYYMMDD_HHMMSS>.png`.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("rma_parts_list_{}.png", now.format("%Y%m%d_%H%M%S"))
}

/// Renders reports to timestamped PNG files and hands them to the OS viewer.
pub struct Exporter {
    exports_dir: PathBuf,
    opener: Box<dyn FileOpener>,
}

impl Exporter {
    pub fn new(exports_dir: PathBuf) -> Self {
        Self::with_opener(exports_dir, Box::new(SystemOpener))
    }

    pub fn with_opener(exports_dir: PathBuf, opener: Box<dyn FileOpener>) -> Self {
        Self {
            exports_dir,
            opener,
        }
    }

    pub fn exports_dir(&self) -> &Path {
        &self.exports_dir
    }

    pub fn set_exports_dir(&mut self, dir: PathBuf) {
        self.exports_dir = dir;
    }

    /// Render, write and open a report. Returns the written path.
    pub fn export(&self, report: &Report) -> Result<PathBuf, ConversionError> {
        let png = TableRenderer::render_png(report)?;
        self.write_and_open(&png, Local::now())
    }

    /// Re-open a previously exported file with the system viewer.
    pub fn open_existing(&self, path: &Path) -> Result<(), ConversionError> {
        self.opener.open(path).map_err(|source| ConversionError::Open {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_and_open(
        &self,
        png: &[u8],
        now: DateTime<Local>,
    ) -> Result<PathBuf, ConversionError> {
        fs::create_dir_all(&self.exports_dir)?;

        let path = self.exports_dir.join(export_filename(now));
        fs::write(&path, png)?;

        self.opener
            .open(&path)
            .map_err(|source| ConversionError::Open {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), "exported pullback image");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct RecordingOpener(Rc<RefCell<Vec<PathBuf>>>);

    impl FileOpener for RecordingOpener {
        fn open(&self, path: &Path) -> std::io::Result<()> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingOpener;

    impl FileOpener for FailingOpener {
        fn open(&self, _path: &Path) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no viewer",
            ))
        }
    }

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 9).unwrap()
    }

    #[test]
    fn test_export_filename_format() {
        assert_eq!(export_filename(stamp()), "rma_parts_list_20240305_143009.png");
    }

    #[test]
    fn test_write_creates_dir_and_opens_once() {
        let temp_dir = TempDir::new().unwrap();
        let exports = temp_dir.path().join("exports");
        let opened = Rc::new(RefCell::new(Vec::new()));
        let exporter =
            Exporter::with_opener(exports.clone(), Box::new(RecordingOpener(opened.clone())));

        let path = exporter.write_and_open(b"png-bytes", stamp()).unwrap();

        assert_eq!(path, exports.join("rma_parts_list_20240305_143009.png"));
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
        assert_eq!(opened.borrow().as_slice(), &[path]);
    }

    #[test]
    fn test_open_failure_surfaces_as_conversion_error() {
        let temp_dir = TempDir::new().unwrap();
        let exporter =
            Exporter::with_opener(temp_dir.path().to_path_buf(), Box::new(FailingOpener));

        let err = exporter.write_and_open(b"png-bytes", stamp()).unwrap_err();
        assert!(matches!(err, ConversionError::Open { .. }));
    }
}
