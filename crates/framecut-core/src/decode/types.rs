//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not in an image format we can decode.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// The raw EXIF tag value.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
    /// Whether the source format carried an alpha channel.
    ///
    /// Opaque formats are expanded with alpha 255 but keep this `false`, so
    /// the alpha boundary scan can skip them.
    pub has_alpha: bool,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, has_alpha: bool) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Create a DecodedImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage, has_alpha: bool) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
            has_alpha,
        }
    }

    /// Alpha value at the given pixel.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[self.rgba_index(x, y) + 3]
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn rgba_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(8), Orientation::Rotate270CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_orientation_code_round_trips() {
        for code in 1..=8u32 {
            assert_eq!(Orientation::from(code).code() as u32, code);
        }
    }

    #[test]
    fn test_decoded_image_creation() {
        let img = DecodedImage::new(100, 50, vec![0u8; 100 * 50 * 4], true);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_alpha_at() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        pixels[(1 * 2 + 0) * 4 + 3] = 200;
        let img = DecodedImage::new(2, 2, pixels, true);

        assert_eq!(img.alpha_at(0, 0), 0);
        assert_eq!(img.alpha_at(0, 1), 200);
    }

    #[test]
    fn test_rgba_index_past_u32_range() {
        // 40000 x 40000 RGBA is more bytes than u32 can count.
        let img = DecodedImage {
            width: 40_000,
            height: 40_000,
            pixels: Vec::new(),
            has_alpha: true,
        };
        assert_eq!(img.rgba_index(39_999, 39_999), 6_399_999_996);
        assert_eq!(img.rgba_index(1, 0), 4);
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![], false);
        assert!(img.is_empty());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
