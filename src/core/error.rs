//! Error types.
//!
//! - `TrackError` is per-file and never stops a run; it is folded into an `Outcome`.
//! - `NormalizeError` is the only fatal case: the folder itself can't be read.

use std::path::PathBuf;

use thiserror::Error;

use super::types::Outcome;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("{target} already exists")]
    NameCollision { target: String },

    #[error("no ID3 tag")]
    MissingTagContainer,

    #[error("no embedded cover")]
    NoEmbeddedImage,

    #[error("{0}")]
    Processing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tag error: {0}")]
    Tag(#[from] id3::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<TrackError> for Outcome {
    fn from(err: TrackError) -> Self {
        match err {
            TrackError::NameCollision { .. } => Outcome::NameCollision,
            TrackError::MissingTagContainer => Outcome::MissingTagContainer,
            TrackError::NoEmbeddedImage => Outcome::NoEmbeddedImage,
            other => Outcome::Error(other.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("cannot read folder {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
