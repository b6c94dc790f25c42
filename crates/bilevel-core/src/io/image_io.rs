use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba};

use crate::buffer::PixelImage;
use crate::error::Result;

/// Load any image the `image` crate can decode as 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<PixelImage<Rgba<u8>>> {
    let img = image::open(path)?.to_rgba8();
    Ok(PixelImage::from_image_buffer(&img))
}

/// Save an 8-bit RGBA image, choosing the format from the file extension.
///
/// Unknown or missing extensions fall back to PNG. Formats without an alpha
/// channel (JPEG) get the RGB channels only.
pub fn save_rgba(image: &PixelImage<Rgba<u8>>, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let buffer = image.to_image_buffer();
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(buffer)
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => buffer.save_with_format(path, format)?,
    }
    Ok(())
}
