//! WASM-compatible wrapper types for rendered frames.

use framecut_core::Frame;
use wasm_bindgen::prelude::*;

/// A rendered frame for JavaScript.
///
/// Pixels are RGB, 3 bytes per pixel in row-major order. To draw onto a
/// canvas, expand them to RGBA for an `ImageData`.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Get the frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns the pixels as RGBA with full opacity, ready for `ImageData`.
    pub fn rgba(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }
}

impl From<&Frame> for JsFrame {
    fn from(frame: &Frame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frame() {
        let frame = Frame::blank(4, 2);
        let js = JsFrame::from(&frame);
        assert_eq!(js.width(), 4);
        assert_eq!(js.height(), 2);
        assert_eq!(js.byte_length(), 24);
    }

    #[test]
    fn test_rgba_expansion() {
        let frame = Frame {
            width: 2,
            height: 1,
            pixels: vec![1, 2, 3, 4, 5, 6],
        };
        let js = JsFrame::from(&frame);
        assert_eq!(js.rgba(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
