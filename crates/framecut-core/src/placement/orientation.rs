//! Orientation normalization.
//!
//! Turns the natural bitmap size, its EXIF orientation and the alpha ratio
//! into the rotation and anchor of the image node, plus the displayed size.
//!
//! | code | rotation | display    | anchor             |
//! |------|----------|------------|--------------------|
//! | 1    | 0        | W x H      | (0, 0)             |
//! | 3    | 180      | W x H      | (W, H * ratio)     |
//! | 6    | 90       | H x W      | (0, H * ratio)     |
//! | 8    | 270      | H x W      | (W * ratio, 0)     |
//!
//! Any other code is treated as 1. Mirrored orientations are not handled.

use tracing::warn;

use super::EffectivePlacement;
use crate::decode::Orientation;
use crate::error::CutError;

/// What the current device can display correctly.
///
/// Injected into the widget so device-specific restrictions can be tested
/// and overridden.
pub trait DeviceCapabilities {
    /// Whether photos with this orientation can be loaded.
    fn supports_orientation(&self, orientation: Orientation) -> bool;
}

impl<F> DeviceCapabilities for F
where
    F: Fn(Orientation) -> bool,
{
    fn supports_orientation(&self, orientation: Orientation) -> bool {
        self(orientation)
    }
}

/// A device with no restrictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyDevice;

impl DeviceCapabilities for AnyDevice {
    fn supports_orientation(&self, _orientation: Orientation) -> bool {
        true
    }
}

/// Capabilities derived from a browser user-agent string.
///
/// iOS devices report orientation 8 photos with a camera-sensor quirk we
/// cannot correct, so those are refused.
#[derive(Debug, Clone)]
pub struct UserAgentDevice {
    user_agent: String,
}

impl UserAgentDevice {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into().to_ascii_lowercase(),
        }
    }

    fn is_ios(&self) -> bool {
        ["iphone", "ipod", "ipad"]
            .iter()
            .any(|family| self.user_agent.contains(family))
    }
}

impl DeviceCapabilities for UserAgentDevice {
    fn supports_orientation(&self, orientation: Orientation) -> bool {
        !(orientation == Orientation::Rotate270CW && self.is_ios())
    }
}

/// Natural size and orientation of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageContent {
    pub natural_width: u32,
    pub natural_height: u32,
    pub orientation: Orientation,
}

/// Compute where and how a freshly loaded image is displayed.
///
/// `frame_width` bounds the displayed size; images are only ever scaled
/// down, never up.
///
/// # Errors
///
/// `CutError::UnsupportedDeviceOrientation` if `device` refuses the
/// orientation. Nothing is computed in that case.
pub fn normalize_placement(
    content: &ImageContent,
    alpha_ratio: f64,
    frame_width: f64,
    device: &dyn DeviceCapabilities,
) -> Result<EffectivePlacement, CutError> {
    if !device.supports_orientation(content.orientation) {
        warn!(
            orientation = content.orientation.code(),
            "orientation not supported on this device"
        );
        return Err(CutError::UnsupportedDeviceOrientation);
    }

    let w = content.natural_width as f64;
    let h = content.natural_height as f64;

    let (rotation, mut display_width, mut display_height, reg_x, reg_y) =
        match content.orientation {
            Orientation::Rotate180 => (180.0, w, h, w, h * alpha_ratio),
            // Displayed width is the natural height.
            Orientation::Rotate90CW => (90.0, h, w, 0.0, h * alpha_ratio),
            // Displayed height is the natural width.
            Orientation::Rotate270CW => (270.0, h, w, w * alpha_ratio, 0.0),
            _ => (0.0, w, h, 0.0, 0.0),
        };

    display_width *= alpha_ratio;
    display_height *= alpha_ratio;

    let longest = display_width.max(display_height);
    let scale = if longest > frame_width && longest > 0.0 {
        frame_width / longest
    } else {
        1.0
    };

    Ok(EffectivePlacement {
        display_width: display_width * scale,
        display_height: display_height * scale,
        rotation,
        reg_x,
        reg_y,
        scale,
        alpha_ratio,
    })
}
