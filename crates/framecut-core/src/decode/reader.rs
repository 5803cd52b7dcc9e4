//! Image decoding and EXIF orientation lookup.
//!
//! Pixels are decoded as stored in the file. Orientation is reported
//! separately so placement can rotate the image node instead of the pixels.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image (JPEG or PNG) from bytes into RGBA pixels.
///
/// EXIF orientation is *not* applied; use [`get_orientation`] for that.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized image.
/// Returns `DecodeError::CorruptedFile` if the image is recognized but cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let has_alpha = img.color().has_alpha();
    Ok(DecodedImage::from_rgba_image(img.into_rgba8(), has_alpha))
}

/// Read the EXIF orientation tag from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or the tag
/// cannot be read.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}
