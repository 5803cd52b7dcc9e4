//! Display transforms, the scene, and frame rendering.
//!
//! # Coordinate System
//!
//! - Frame coordinates are pixels with the origin at the top-left corner
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - A node's registration point is the local origin for rotation and scale
//!
//! # Nesting
//!
//! ```text
//! frame ← container (gesture-driven) ← image node (fixed at load) ← bitmap
//! ```

pub mod affine;
mod crop;
mod render;
mod scene;

pub use affine::{Point, Transform};
pub use crop::{crop_region, Region};
pub use render::{render_frame, Frame};
pub use scene::{ImageNode, Layer};
