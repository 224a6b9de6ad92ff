//! core/tags/mod.rs
//!
//! ID3 cover art utilities.
//! Public API:
//! - [`read_tag`] reads a tag, mapping "no tag" to `MissingTagContainer`.
//! - [`first_picture`] / [`is_thumbnail`] inspect embedded APIC frames.
//! - [`replace_cover`] + [`write_tag`] swap all pictures for one thumbnail.

mod art;
mod write;

pub use art::{COVER_DESCRIPTION, first_picture, is_thumbnail, read_tag};
pub use write::{replace_cover, write_tag};
