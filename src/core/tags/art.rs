use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag};

use super::super::error::TrackError;
use super::super::thumb::{THUMBNAIL_MIME, image_dimensions};

/// Description written on every thumbnail we embed.
pub const COVER_DESCRIPTION: &str = "Cover";

/// Read the ID3 tag; a file without one is `MissingTagContainer`, not an error.
pub fn read_tag(path: &Path) -> Result<Tag, TrackError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Err(TrackError::MissingTagContainer),
        Err(e) => Err(TrackError::Tag(e)),
    }
}

/// First embedded picture (APIC/PIC) in frame order.
pub fn first_picture(tag: &Tag) -> Option<&Picture> {
    tag.pictures().next()
}

/// True if `tag` already carries exactly our thumbnail:
/// one JPEG front cover labelled "Cover", `size`x`size` pixels.
pub fn is_thumbnail(tag: &Tag, size: u32) -> bool {
    let mut pictures = tag.pictures();
    let (Some(p), None) = (pictures.next(), pictures.next()) else {
        return false;
    };

    p.mime_type == THUMBNAIL_MIME
        && p.picture_type == PictureType::CoverFront
        && p.description == COVER_DESCRIPTION
        && matches!(image_dimensions(&p.data), Ok(dims) if dims == (size, size))
}
