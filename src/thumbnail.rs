use image::DynamicImage;

use crate::FinderError;

/// A decoded thumbnail together with the URL it came from
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub url: String,
    pub image: DynamicImage,
}

/// Decode image bytes and shrink them to fit a `max_size` square.
///
/// Aspect ratio is preserved and images already within bounds are left at
/// their original size.
pub fn decode_thumbnail(bytes: &[u8], max_size: u32) -> Result<DynamicImage, FinderError> {
    let image = image::load_from_memory(bytes)?;
    if image.width() <= max_size && image.height() <= max_size {
        return Ok(image);
    }
    Ok(image.thumbnail(max_size, max_size))
}
