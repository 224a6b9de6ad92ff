//! Replace embedded pictures and write the tag back.

use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike};

use super::super::error::TrackError;
use super::super::thumb::THUMBNAIL_MIME;
use super::art::COVER_DESCRIPTION;

/// Drop every APIC frame and add one JPEG front cover (type code 3).
pub fn replace_cover(tag: &mut Tag, jpeg: Vec<u8>) {
    tag.remove_all_pictures();
    let _ = tag.add_frame(Picture {
        mime_type: THUMBNAIL_MIME.to_string(),
        picture_type: PictureType::CoverFront,
        description: COVER_DESCRIPTION.to_string(),
        data: jpeg,
    });
}

/// Write `tag` back to `path`, keeping the version it was read with.
pub fn write_tag(tag: &Tag, path: &Path) -> Result<(), TrackError> {
    tag.write_to_path(path, tag.version())?;
    Ok(())
}
