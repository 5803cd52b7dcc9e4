//! Load-time placement of an image in the crop frame.
//!
//! Runs once per loaded image: the alpha boundary scan trims transparent
//! padding, then orientation normalization decides the image node's
//! rotation, anchor and scale.

mod alpha;
mod orientation;

pub use alpha::{alpha_boundary_ratio, opaque_height_ratio};
pub use orientation::{
    normalize_placement, AnyDevice, DeviceCapabilities, ImageContent, UserAgentDevice,
};

use serde::Serialize;

use crate::transform::{ImageNode, Point, Transform};

/// Where and how a freshly loaded image is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePlacement {
    /// Displayed width in frame pixels, after trimming and scaling.
    pub display_width: f64,
    /// Displayed height in frame pixels, after trimming and scaling.
    pub display_height: f64,
    /// Image node rotation in degrees.
    pub rotation: f64,
    /// Image node anchor, in bitmap pixels.
    pub reg_x: f64,
    pub reg_y: f64,
    /// Uniform down-scale applied to the image node.
    pub scale: f64,
    /// Opaque fraction of the bitmap height.
    pub alpha_ratio: f64,
}

impl EffectivePlacement {
    /// The static image node for this placement.
    pub fn image_node(&self, natural_height: u32) -> ImageNode {
        ImageNode {
            transform: Transform {
                x: 0.0,
                y: 0.0,
                reg_x: self.reg_x,
                reg_y: self.reg_y,
                rotation: self.rotation,
                scale_x: self.scale,
                scale_y: self.scale,
            },
            source_height: natural_height as f64 * self.alpha_ratio,
        }
    }

    /// Position that centers the displayed image in a frame.
    pub fn centered_in(&self, frame_width: f64, frame_height: f64) -> Point {
        Point::new(
            (frame_width - self.display_width) / 2.0,
            (frame_height - self.display_height) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Orientation;

    #[test]
    fn test_centered_in_square_frame() {
        let content = ImageContent {
            natural_width: 800,
            natural_height: 600,
            orientation: Orientation::Normal,
        };
        let p = normalize_placement(&content, 1.0, 320.0, &AnyDevice).unwrap();
        let pos = p.centered_in(320.0, 320.0);

        assert!((p.display_width - 320.0).abs() < 1e-9);
        assert!((p.display_height - 240.0).abs() < 1e-9);
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_image_node_carries_placement() {
        let content = ImageContent {
            natural_width: 800,
            natural_height: 600,
            orientation: Orientation::Rotate90CW,
        };
        let p = normalize_placement(&content, 0.5, 320.0, &AnyDevice).unwrap();
        let node = p.image_node(600);

        assert_eq!(node.transform.rotation, 90.0);
        assert_eq!(node.transform.reg_y, 300.0);
        assert_eq!(node.transform.scale_x, p.scale);
        assert_eq!(node.transform.scale_y, p.scale);
        assert_eq!(node.source_height, 300.0);
    }

    #[test]
    fn test_rotated_node_fills_display_box() {
        // The bitmap's far corner lands on the display box's far corner.
        let content = ImageContent {
            natural_width: 800,
            natural_height: 600,
            orientation: Orientation::Rotate90CW,
        };
        let p = normalize_placement(&content, 1.0, 320.0, &AnyDevice).unwrap();
        let node = p.image_node(600);

        let corner = node.transform.to_parent(Point::new(800.0, 0.0));
        assert!((corner.x - p.display_width).abs() < 1e-9);
        assert!((corner.y - p.display_height).abs() < 1e-9);
    }
}
