//! Image decoding for Framecut.
//!
//! This module provides the two load-time collaborators of the crop widget:
//! - Decoding JPEG/PNG bytes into RGBA pixels
//! - Reading the EXIF orientation tag
//!
//! Orientation is never baked into the pixels here. The placement step
//! turns it into a rotation and anchor on the image node.
//!
//! # Examples
//!
//! ```ignore
//! use framecut_core::decode::{decode_image, get_orientation};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let orientation = get_orientation(&bytes);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
