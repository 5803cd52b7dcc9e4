//! Widget configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::encode::DEFAULT_QUALITY;

/// Configuration of the crop widget.
///
/// Deserialized from the host page with camelCase keys; every field has a
/// default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CutConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Render ticks per second.
    pub fps: u32,
    /// Height of the marked crop band, centered vertically.
    /// Defaults to the full frame height.
    pub mark_height: Option<u32>,
    /// Horizontal offset of the frame on screen.
    pub stage_x: f64,
    /// Vertical offset of the frame on screen.
    pub stage_y: f64,
    /// JPEG quality used for export (1-100).
    pub quality: u8,
    /// Let two-finger twists rotate the image.
    pub rotate_gesture: bool,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
            fps: 60,
            mark_height: None,
            stage_x: 0.0,
            stage_y: 0.0,
            quality: DEFAULT_QUALITY,
            rotate_gesture: false,
        }
    }
}

impl CutConfig {
    /// Time between render ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Height of the marked band, never taller than the frame.
    pub fn mark_height(&self) -> u32 {
        self.mark_height.unwrap_or(self.height).min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CutConfig::default();
        assert_eq!((config.width, config.height), (320, 320));
        assert_eq!(config.quality, 90);
        assert_eq!(config.mark_height(), 320);
        assert!(!config.rotate_gesture);
    }

    #[test]
    fn test_frame_interval() {
        let config = CutConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        let stalled = CutConfig {
            fps: 0,
            ..CutConfig::default()
        };
        assert_eq!(stalled.frame_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_mark_height_clamped() {
        let config = CutConfig {
            mark_height: Some(1000),
            ..CutConfig::default()
        };
        assert_eq!(config.mark_height(), 320);
    }
}
