//! Cover thumbnail: decode, RGB, exact square resize, JPEG.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageResult};

pub const THUMBNAIL_MIME: &str = "image/jpeg";

/// Pixel size of an encoded image, if it decodes.
pub fn image_dimensions(data: &[u8]) -> ImageResult<(u32, u32)> {
    Ok(image::load_from_memory(data)?.dimensions())
}

/// Decode `data` (any format `image` understands), resize to `size`x`size`
/// with Lanczos3 (aspect ratio is NOT preserved) and encode as JPEG.
pub fn resize_cover(data: &[u8], size: u32, quality: u8) -> ImageResult<Vec<u8>> {
    let img: DynamicImage = image::load_from_memory(data)?;
    let rgb = img.to_rgb8();
    let resized = imageops::resize(&rgb, size, size, FilterType::Lanczos3);

    let mut out = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut out, quality).encode_image(&resized)?;
    Ok(out.into_inner())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    /// Solid-colour test image encoded in `format`.
    pub(crate) fn encoded_image(w: u32, h: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([200, 40, 90])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn resizes_large_jpeg_to_square() {
        let src = encoded_image(600, 600, ImageFormat::Jpeg);
        let out = resize_cover(&src, 128, 75).unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        assert_eq!(image_dimensions(&out).unwrap(), (128, 128));
    }

    #[test]
    fn non_square_png_with_alpha_becomes_rgb_jpeg() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 120, Rgba([1, 2, 3, 128])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();

        let out = resize_cover(buf.get_ref(), 128, 75).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.dimensions(), (128, 128));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn thumbnail_sized_input_stays_valid() {
        let src = encoded_image(128, 128, ImageFormat::Jpeg);
        let out = resize_cover(&src, 128, 75).unwrap();
        assert_eq!(image_dimensions(&out).unwrap(), (128, 128));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(resize_cover(b"definitely not an image", 128, 75).is_err());
    }
}
