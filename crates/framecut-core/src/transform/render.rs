//! Software frame renderer.
//!
//! Composites the scene into an RGB frame over a black background. Like any
//! rotate-and-scale resampler it uses inverse mapping: for each frame pixel we
//! walk back through the container and image node transforms to a bitmap
//! coordinate and sample it with bilinear interpolation.
//!
//! ```text
//! image = node⁻¹(container⁻¹(frame_x + 0.5, frame_y + 0.5))
//! ```

use super::affine::Point;
use super::scene::Layer;
use crate::decode::DecodedImage;

/// A rendered frame with RGB pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Frame {
    /// A black frame.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 3],
        }
    }

    /// RGB value at the given pixel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }
}

/// Render the scene into a `width` x `height` frame.
///
/// An empty scene, or a layer with a collapsed (zero) scale, renders black.
pub fn render_frame(width: u32, height: u32, layer: Option<&Layer>) -> Frame {
    let mut frame = Frame::blank(width, height);
    let Some(layer) = layer else {
        return frame;
    };
    if !layer.container.is_invertible() || !layer.node.transform.is_invertible() {
        return frame;
    }

    for py in 0..height {
        for px in 0..width {
            let center = Point::new(px as f64 + 0.5, py as f64 + 0.5);
            let Some(src) = layer.frame_to_image(center) else {
                continue;
            };
            if !layer.contains_image_point(src) {
                continue;
            }

            let [r, g, b, a] = sample_bilinear(&layer.image, src.x - 0.5, src.y - 0.5);
            let idx = (py as usize * width as usize + px as usize) * 3;
            // Straight alpha over black.
            let alpha = a as f64 / 255.0;
            frame.pixels[idx] = (r as f64 * alpha).round() as u8;
            frame.pixels[idx + 1] = (g as f64 * alpha).round() as u8;
            frame.pixels[idx + 2] = (b as f64 * alpha).round() as u8;
        }
    }

    frame
}

#[inline]
fn get_pixel_f64(image: &DecodedImage, px: u32, py: u32) -> [f64; 4] {
    let idx = image.rgba_index(px, py);
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
        image.pixels[idx + 3] as f64,
    ]
}

/// Sample an RGBA pixel with bilinear interpolation, clamping at the edges.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let max_x = image.width.saturating_sub(1);
    let max_y = image.height.saturating_sub(1);

    let x = x.clamp(0.0, max_x as f64);
    let y = y.clamp(0.0, max_y as f64);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(max_x);
    let y1 = (y0 + 1).min(max_y);

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
