//! Pixel-region cropping of rendered frames.
//!
//! Export samples a rectangle of the frame in frame pixels. The rectangle is
//! clamped to the frame; a rectangle that ends up empty yields `None`.

use serde::{Deserialize, Serialize};

use super::render::Frame;

/// A rectangle in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Replace a zero width or height with the frame's.
    pub fn or_full(self, width: u32, height: u32) -> Region {
        Region {
            width: if self.width == 0 { width } else { self.width },
            height: if self.height == 0 { height } else { self.height },
            ..self
        }
    }

    /// Clamp the region to a `width` x `height` frame.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<Region> {
        let left = self.x.min(width);
        let top = self.y.min(height);
        let right = self.x.saturating_add(self.width).min(width);
        let bottom = self.y.saturating_add(self.height).min(height);

        if right <= left || bottom <= top {
            return None;
        }
        Some(Region::new(left, top, right - left, bottom - top))
    }
}

/// Copy a region out of a frame.
///
/// Returns `None` when the region does not overlap the frame.
pub fn crop_region(frame: &Frame, region: Region) -> Option<Frame> {
    let region = region.clamp_to(frame.width, frame.height)?;

    let row_bytes = region.width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * region.height as usize);

    for y in region.y..region.y + region.height {
        let start = (y as usize * frame.width as usize + region.x as usize) * 3;
        output.extend_from_slice(&frame.pixels[start..start + row_bytes]);
    }

    Some(Frame {
        width: region.width,
        height: region.height,
        pixels: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A frame where each pixel's value encodes its position.
    fn test_frame(width: u32, height: u32) -> Frame {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        Frame {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_full_region_is_copy() {
        let frame = test_frame(20, 10);
        let result = crop_region(&frame, Region::new(0, 0, 20, 10)).unwrap();
        assert_eq!(result, frame);
    }

    #[test]
    fn test_inner_region() {
        let frame = test_frame(10, 10);
        let result = crop_region(&frame, Region::new(2, 3, 4, 5)).unwrap();

        assert_eq!(result.width, 4);
        assert_eq!(result.height, 5);
        // (2, 3) -> 3 * 10 + 2
        assert_eq!(result.pixel(0, 0), [32, 32, 32]);
        // (5, 7) -> 7 * 10 + 5
        assert_eq!(result.pixel(3, 4), [75, 75, 75]);
    }

    #[test]
    fn test_region_clamped_to_frame() {
        let frame = test_frame(10, 10);
        let result = crop_region(&frame, Region::new(8, 6, 50, 50)).unwrap();
        assert_eq!(result.width, 2);
        assert_eq!(result.height, 4);
    }

    #[test]
    fn test_region_outside_frame() {
        let frame = test_frame(10, 10);
        assert!(crop_region(&frame, Region::new(10, 0, 5, 5)).is_none());
        assert!(crop_region(&frame, Region::new(0, 0, 0, 5)).is_none());
    }

    #[test]
    fn test_or_full_fills_zero_sides() {
        assert_eq!(Region::new(4, 5, 0, 0).or_full(320, 240), Region::new(4, 5, 320, 240));
        assert_eq!(Region::new(0, 0, 10, 0).or_full(320, 240), Region::new(0, 0, 10, 240));
        assert_eq!(Region::new(0, 0, 10, 20).or_full(320, 240), Region::new(0, 0, 10, 20));
    }

    #[test]
    fn test_clamp_handles_overflow() {
        let clamped = Region::new(u32::MAX - 1, 0, 10, 10).clamp_to(100, 100);
        assert!(clamped.is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A cropped frame never exceeds the source and its buffer matches its size.
        #[test]
        fn prop_crop_is_bounded(
            (width, height) in (1u32..=40, 1u32..=40),
            (x, y, w, h) in (0u32..=60, 0u32..=60, 0u32..=60, 0u32..=60),
        ) {
            let frame = Frame::blank(width, height);
            if let Some(out) = crop_region(&frame, Region::new(x, y, w, h)) {
                prop_assert!(out.width >= 1 && out.width <= width);
                prop_assert!(out.height >= 1 && out.height <= height);
                prop_assert_eq!(out.pixels.len(), (out.width * out.height * 3) as usize);
            }
        }
    }
}
