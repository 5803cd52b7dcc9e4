//! Framecut Core - touch-driven crop frame engine
//!
//! A photo is loaded into a fixed-size frame, normalized for its EXIF
//! orientation and transparent padding, then panned, pinch-zoomed and
//! optionally twisted with touch gestures. The visible frame, or a band of
//! it, is exported as JPEG.
//!
//! # Modules
//!
//! - [`decode`] - JPEG/PNG decoding and EXIF orientation
//! - [`placement`] - alpha trimming and orientation normalization at load time
//! - [`gesture`] - touch sessions, anchor recentering and transform updates
//! - [`transform`] - transforms, the scene, rendering and cropping
//! - [`encode`] - JPEG export
//! - [`cutter`] - the [`ImageCut`] widget tying it all together
//!
//! # Logging
//!
//! Events are emitted with `tracing`. No subscriber is installed; hosts
//! pick their own.

pub mod config;
pub mod cutter;
pub mod decode;
pub mod encode;
pub mod error;
pub mod gesture;
pub mod placement;
pub mod transform;

pub use config::CutConfig;
pub use cutter::ImageCut;
pub use error::CutError;
pub use gesture::{TouchEvent, TouchPoint};
pub use transform::{Frame, Region, Transform};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widget_is_empty() {
        let mut cut = ImageCut::new(CutConfig::default());
        assert!(cut.transform().is_none());
        let frame = cut.tick();
        assert_eq!((frame.width, frame.height), (320, 320));
        assert!(frame.pixels.iter().all(|&b| b == 0));
    }
}
