//! File Opener
//! Capability interface for "open this file with the system default handler".

use std::path::Path;

/// Opens a file with the platform's default viewer.
///
/// The per-OS dispatch lives behind this trait so the export pipeline can be
/// exercised in tests without spawning a viewer.
pub trait FileOpener {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// Production opener backed by the `open` crate.
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        open::that(path)
    }
}
