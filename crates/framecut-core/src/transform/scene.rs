//! The display tree of the crop widget.
//!
//! The scene holds at most one [`Layer`]: a container node whose transform is
//! driven by gestures, owning exactly one image node whose transform is fixed
//! at load time.

use super::affine::{Point, Transform};
use crate::decode::DecodedImage;

/// The image node inside the container.
///
/// Set once by placement and never touched by gestures.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    /// Anchor, rotation and uniform scale of the bitmap inside its container.
    pub transform: Transform,
    /// Number of source rows that are drawn (the alpha-trimmed height).
    pub source_height: f64,
}

/// A loaded image: bitmap, its static node, and the gesture-driven container.
#[derive(Debug, Clone)]
pub struct Layer {
    pub image: DecodedImage,
    pub node: ImageNode,
    pub container: Transform,
}

impl Layer {
    /// Map a frame point to bitmap coordinates.
    ///
    /// Returns `None` if either transform has a zero scale.
    pub fn frame_to_image(&self, frame: Point) -> Option<Point> {
        let in_container = self.container.to_local(frame)?;
        self.node.transform.to_local(in_container)
    }

    /// Whether a bitmap coordinate lies inside the drawn (trimmed) area.
    pub fn contains_image_point(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.image.width as f64 && p.y < self.source_height()
    }

    fn source_height(&self) -> f64 {
        self.node.source_height.min(self.image.height as f64)
    }
}
