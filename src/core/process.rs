//! Per-file pipeline: rename -> read tag -> resize first cover -> write tag.

use std::path::Path;

use log::{info, warn};

use super::config::Settings;
use super::error::TrackError;
use super::names::normalized_file_name;
use super::rename::rename_in_place;
use super::tags::{first_picture, is_thumbnail, read_tag, replace_cover, write_tag};
use super::thumb::resize_cover;
use super::types::{Outcome, TrackRecord};

/// Normalize one file. Never fails: every problem ends up in `outcome`.
pub fn process_file(path: &Path, settings: &Settings) -> TrackRecord {
    let Some(original) = path.file_name().and_then(|s| s.to_str()) else {
        let lossy = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let err = TrackError::Processing("file name is not valid UTF-8".to_string());
        warn!("{lossy}: {err}");
        return TrackRecord {
            original: lossy.clone(),
            normalized: lossy,
            renamed: false,
            outcome: err.into(),
        };
    };

    let normalized = normalized_file_name(original);

    // Everything after the rename works on the new path.
    let (renamed, result) = match rename_in_place(path, &normalized) {
        Ok(new_path) => (new_path != path, shrink_cover(&new_path, settings)),
        Err(e) => (false, Err(e)),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("{original}: {e}");
            e.into()
        }
    };

    if outcome == Outcome::RenamedAndResized {
        info!("{original} -> {normalized}: cover resized");
    }

    TrackRecord {
        original: original.to_string(),
        normalized,
        renamed,
        outcome,
    }
}

fn shrink_cover(path: &Path, settings: &Settings) -> Result<Outcome, TrackError> {
    let mut tag = read_tag(path)?;
    if is_thumbnail(&tag, settings.thumbnail_size) {
        return Ok(Outcome::AlreadyThumbnail);
    }

    let cover = first_picture(&tag).ok_or(TrackError::NoEmbeddedImage)?;
    let thumb = resize_cover(&cover.data, settings.thumbnail_size, settings.jpeg_quality)?;

    replace_cover(&mut tag, thumb);
    write_tag(&tag, path)?;

    Ok(Outcome::RenamedAndResized)
}
