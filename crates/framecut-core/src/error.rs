//! Errors surfaced by the crop widget.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors returned by [`ImageCut`](crate::ImageCut) operations.
///
/// Momentary degenerate touch geometry is not an error: it is absorbed by
/// the gesture engine.
#[derive(Debug, Error)]
pub enum CutError {
    /// The selected file is not an image. Nothing was loaded.
    #[error("Please choose an image file (got {0})")]
    UnsupportedFileType(String),

    /// The device cannot display photos taken in this orientation.
    #[error("Photos taken in this orientation are not supported on this device yet")]
    UnsupportedDeviceOrientation,

    /// A gesture or export was requested before any image was loaded.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The export region does not overlap the frame.
    #[error("Export region lies outside the frame")]
    InvalidRegion,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = CutError::UnsupportedFileType("text/plain".to_string());
        assert_eq!(err.to_string(), "Please choose an image file (got text/plain)");

        assert_eq!(
            CutError::UnsupportedDeviceOrientation.to_string(),
            "Photos taken in this orientation are not supported on this device yet"
        );
    }

    #[test]
    fn test_wraps_decode_error() {
        let err: CutError = DecodeError::InvalidFormat.into();
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
