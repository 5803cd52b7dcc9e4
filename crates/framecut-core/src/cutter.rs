//! The crop widget.
//!
//! [`ImageCut`] owns everything one widget instance needs: the loaded layer,
//! the gesture tracker, the device gate and the last rendered frame. It is a
//! plain value driven by the host: touch events in, `tick()` on a timer,
//! `export_region()` when the user confirms the crop.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::CutConfig;
use crate::decode::{decode_image, get_orientation, DecodedImage, Orientation};
use crate::encode::encode_jpeg;
use crate::error::CutError;
use crate::gesture::{GestureTracker, TouchEvent};
use crate::placement::{
    normalize_placement, opaque_height_ratio, AnyDevice, DeviceCapabilities, EffectivePlacement,
    ImageContent,
};
use crate::transform::{crop_region, render_frame, Frame, Layer, Point, Region, Transform};

/// A touch-driven crop frame holding at most one image.
pub struct ImageCut {
    config: CutConfig,
    device: Box<dyn DeviceCapabilities>,
    layer: Option<Layer>,
    placement: Option<EffectivePlacement>,
    tracker: GestureTracker,
    canvas_offset: Point,
    frame: Frame,
}

impl ImageCut {
    /// A widget that accepts every orientation.
    pub fn new(config: CutConfig) -> Self {
        Self::with_device(config, Box::new(AnyDevice))
    }

    /// A widget gated by `device`'s orientation support.
    pub fn with_device(config: CutConfig, device: Box<dyn DeviceCapabilities>) -> Self {
        Self {
            device,
            layer: None,
            placement: None,
            tracker: GestureTracker::new(config.rotate_gesture),
            canvas_offset: Point::new(config.stage_x, config.stage_y),
            frame: Frame::blank(config.width, config.height),
            config,
        }
    }

    /// Load a user-selected file.
    ///
    /// `mime` is the type the host reported for the file; anything outside
    /// `image/*` is refused before decoding.
    ///
    /// # Errors
    ///
    /// `UnsupportedFileType` for non-images, `Decode` when the bytes cannot
    /// be decoded, plus everything [`load_image`](Self::load_image) returns.
    pub fn load_file(&mut self, bytes: &[u8], mime: Option<&str>) -> Result<(), CutError> {
        if let Some(mime) = mime {
            if !mime.starts_with("image/") {
                warn!(mime, "refusing non-image file");
                return Err(CutError::UnsupportedFileType(mime.to_string()));
            }
        }

        let image = decode_image(bytes)?;
        let orientation = get_orientation(bytes);
        self.load_image(image, orientation, None)
    }

    /// Place a decoded image in the frame, replacing any previous one.
    ///
    /// Without `position` the image is centered in the frame.
    ///
    /// # Errors
    ///
    /// `UnsupportedDeviceOrientation` if the device refuses the orientation.
    /// The widget is left as it was in that case.
    pub fn load_image(
        &mut self,
        image: DecodedImage,
        orientation: Orientation,
        position: Option<(f64, f64)>,
    ) -> Result<(), CutError> {
        let alpha_ratio = opaque_height_ratio(&image);
        let content = ImageContent {
            natural_width: image.width,
            natural_height: image.height,
            orientation,
        };
        let placement = normalize_placement(
            &content,
            alpha_ratio,
            self.config.width as f64,
            self.device.as_ref(),
        )?;

        let container = match position {
            Some((x, y)) => Transform::at(x, y),
            None => {
                let p = placement.centered_in(self.config.width as f64, self.config.height as f64);
                Transform::at(p.x, p.y)
            }
        };

        info!(
            width = image.width,
            height = image.height,
            orientation = orientation.code(),
            alpha_ratio,
            display_width = placement.display_width,
            display_height = placement.display_height,
            "image loaded"
        );

        self.layer = Some(Layer {
            node: placement.image_node(image.height),
            container,
            image,
        });
        self.placement = Some(placement);
        self.tracker.reset();
        Ok(())
    }

    /// Begin or extend a gesture.
    ///
    /// # Errors
    ///
    /// `NoImageLoaded` if there is nothing to move.
    pub fn handle_touch_start(&mut self, event: &TouchEvent) -> Result<(), CutError> {
        let layer = self.layer.as_mut().ok_or(CutError::NoImageLoaded)?;
        self.tracker
            .touch_start(event, &mut layer.container, self.canvas_offset);
        Ok(())
    }

    /// Continue the current gesture.
    ///
    /// # Errors
    ///
    /// `NoImageLoaded` if there is nothing to move.
    pub fn handle_touch_move(&mut self, event: &TouchEvent) -> Result<(), CutError> {
        let layer = self.layer.as_mut().ok_or(CutError::NoImageLoaded)?;
        self.tracker.touch_move(event, &mut layer.container);
        Ok(())
    }

    /// A finger was lifted.
    ///
    /// # Errors
    ///
    /// `NoImageLoaded` if there is nothing to move.
    pub fn handle_touch_end(&mut self, event: &TouchEvent) -> Result<(), CutError> {
        let layer = self.layer.as_ref().ok_or(CutError::NoImageLoaded)?;
        self.tracker.touch_end(event, &layer.container);
        Ok(())
    }

    /// Remove the image and forget any gesture in progress.
    pub fn clear(&mut self) {
        if self.layer.take().is_some() {
            debug!("image cleared");
        }
        self.placement = None;
        self.tracker.reset();
    }

    /// Render the current scene into the cached frame.
    pub fn tick(&mut self) -> &Frame {
        self.frame = render_frame(self.config.width, self.config.height, self.layer.as_ref());
        &self.frame
    }

    /// The last frame rendered by [`tick`](Self::tick).
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Time between render ticks.
    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval()
    }

    /// The whole frame.
    pub fn full_frame(&self) -> Region {
        Region::new(0, 0, self.config.width, self.config.height)
    }

    /// The marked band: full width, `mark_height` tall, centered vertically.
    pub fn marked_region(&self) -> Region {
        let mark = self.config.mark_height();
        Region::new(0, (self.config.height - mark) / 2, self.config.width, mark)
    }

    /// Encode a region of the frame as JPEG.
    ///
    /// Gestures are suspended while the frame is rendered and sampled, so the
    /// export always reflects the transform as of the call. A zero width or
    /// height means the frame's. An empty frame exports as black.
    ///
    /// # Errors
    ///
    /// `InvalidRegion` if `region` does not overlap the frame, `Encode` if
    /// JPEG encoding fails.
    pub fn export_region(&mut self, region: Region) -> Result<Vec<u8>, CutError> {
        let region = region.or_full(self.config.width, self.config.height);
        self.tracker.suspend();
        let result = self.encode_region(region);
        self.tracker.resume();
        result
    }

    fn encode_region(&mut self, region: Region) -> Result<Vec<u8>, CutError> {
        let quality = self.config.quality;
        let frame = self.tick();
        let cropped = crop_region(frame, region).ok_or(CutError::InvalidRegion)?;
        debug!(
            width = cropped.width,
            height = cropped.height,
            quality,
            "exporting region"
        );
        Ok(encode_jpeg(
            &cropped.pixels,
            cropped.width,
            cropped.height,
            quality,
        )?)
    }

    /// The container transform of the loaded image.
    pub fn transform(&self) -> Option<&Transform> {
        self.layer.as_ref().map(|layer| &layer.container)
    }

    /// How the loaded image was placed.
    pub fn placement(&self) -> Option<&EffectivePlacement> {
        self.placement.as_ref()
    }

    /// Where the frame sits on screen; touch coordinates are relative to this.
    pub fn set_canvas_offset(&mut self, x: f64, y: f64) {
        self.canvas_offset = Point::new(x, y);
    }

    pub fn config(&self) -> &CutConfig {
        &self.config
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.tracker
    }
}

impl std::fmt::Debug for ImageCut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCut")
            .field("config", &self.config)
            .field("placement", &self.placement)
            .field("transform", &self.transform())
            .field("canvas_offset", &self.canvas_offset)
            .finish_non_exhaustive()
    }
}
