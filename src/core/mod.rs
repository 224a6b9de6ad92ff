//! core/mod.rs
//!
//! The brain of the app:
//! - Discover `.mp3` files in one folder (snapshot, no recursion)
//! - Per file: strip diacritics from the name, shrink the cover to a thumbnail
//! - Return plain data structs for the GUI to render
//!
//! The pipeline is explicit:
//!   (A) `FolderRun::open(dir)` -> snapshot of paths (only fatal step)
//!   (B) iterate -> one `TrackRecord` per file, lazily
//!   (C) collect -> `Summary`
//!
//! Callers that want per-file progress iterate (B) themselves.

pub mod config;
pub mod error;
pub mod library;
pub mod names;
pub mod process;
pub mod rename;
pub mod tags;
pub mod thumb;
pub mod types;

use std::path::{Path, PathBuf};

use log::info;

use config::Settings;
use error::NormalizeError;
use types::{Summary, TrackRecord};

/// A lazy run over one folder. Each `next()` fully processes one file.
pub struct FolderRun {
    settings: Settings,
    paths: std::vec::IntoIter<PathBuf>,
}

impl FolderRun {
    /// Read the folder listing up front so renames during the run
    /// can't make a file show up twice.
    pub fn open(dir: &Path, settings: &Settings) -> Result<Self, NormalizeError> {
        let paths = library::list_audio_files(dir, &settings.extension)?;
        info!("{}: {} file(s) to normalize", dir.display(), paths.len());

        Ok(Self {
            settings: settings.clone(),
            paths: paths.into_iter(),
        })
    }
}

impl Iterator for FolderRun {
    type Item = TrackRecord;

    fn next(&mut self) -> Option<TrackRecord> {
        let path = self.paths.next()?;
        Some(process::process_file(&path, &self.settings))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for FolderRun {}

/// Normalize every audio file in `dir` and fold the results into a `Summary`.
///
/// Only an unreadable folder is an error; per-file problems are in `Summary::skipped`.
pub fn normalize_folder(dir: &Path, settings: &Settings) -> Result<Summary, NormalizeError> {
    let summary: Summary = FolderRun::open(dir, settings)?.collect();
    info!(
        "{}: {} renamed, {} resized, {} skipped",
        dir.display(),
        summary.renamed,
        summary.resized,
        summary.skipped.len()
    );
    Ok(summary)
}
