//! WASM bindings for the crop widget.
//!
//! One `JsImageCut` per canvas. The page forwards touch events and file
//! selections, draws `render()` on a timer, and calls `exportMarked()` or
//! `exportRegion()` when the user confirms the crop.
//!
//! # Example
//!
//! ```typescript
//! const cut = new JsImageCut({ width: 320, height: 320, stageX: rect.left, stageY: rect.top });
//!
//! input.onchange = async () => {
//!   const file = input.files[0];
//!   try {
//!     cut.loadFile(new Uint8Array(await file.arrayBuffer()), file.type);
//!   } catch (message) {
//!     alert(message);
//!   }
//! };
//! ```

use framecut_core::placement::UserAgentDevice;
use framecut_core::{CutConfig, CutError, ImageCut, Region};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::touch::touch_event;
use crate::types::JsFrame;

/// Configuration accepted by the `JsImageCut` constructor.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WasmConfig {
    #[serde(flatten)]
    cut: CutConfig,
    /// Overrides `navigator.userAgent` for device orientation gating.
    user_agent: Option<String>,
}

fn to_js_error(e: CutError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn navigator_user_agent() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// The crop widget handle.
#[wasm_bindgen]
pub struct JsImageCut {
    inner: ImageCut,
}

#[wasm_bindgen]
impl JsImageCut {
    /// Create a widget.
    ///
    /// # Arguments
    /// * `config` - `{width, height, fps, markHeight, stageX, stageY, quality,
    ///   rotateGesture, userAgent}`; every key is optional
    ///
    /// # Errors
    /// Returns error if the config cannot be deserialized
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsImageCut, JsValue> {
        let config: WasmConfig = if config.is_undefined() || config.is_null() {
            WasmConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        let user_agent = config.user_agent.unwrap_or_else(navigator_user_agent);
        Ok(Self::from_config(config.cut, &user_agent))
    }

    /// Load a selected file. `mime` is `File.type`.
    ///
    /// # Errors
    /// Returns the user-facing message if the file is not an image, cannot
    /// be decoded, or was taken in an orientation this device cannot show.
    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file(&mut self, bytes: &[u8], mime: Option<String>) -> Result<(), JsValue> {
        self.inner
            .load_file(bytes, mime.as_deref())
            .map_err(to_js_error)
    }

    /// Forward a `touchstart`.
    ///
    /// # Arguments
    /// * `coords` - active touches as `[x0, y0, x1, y1, ...]` in page space
    /// * `event_x`, `event_y` - the event's own coordinate
    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(
        &mut self,
        coords: &[f64],
        event_x: f64,
        event_y: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .handle_touch_start(&touch_event(coords, event_x, event_y))
            .map_err(to_js_error)
    }

    /// Forward a `touchmove`.
    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(
        &mut self,
        coords: &[f64],
        event_x: f64,
        event_y: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .handle_touch_move(&touch_event(coords, event_x, event_y))
            .map_err(to_js_error)
    }

    /// Forward a `touchend`; `coords` are the touches that remain.
    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(
        &mut self,
        coords: &[f64],
        event_x: f64,
        event_y: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .handle_touch_end(&touch_event(coords, event_x, event_y))
            .map_err(to_js_error)
    }

    /// Remove the image.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Render the current frame.
    pub fn render(&mut self) -> JsFrame {
        JsFrame::from(self.inner.tick())
    }

    /// Export a rectangle of the frame as JPEG bytes.
    ///
    /// # Errors
    /// Returns error if the rectangle lies outside the frame or encoding fails
    #[wasm_bindgen(js_name = exportRegion)]
    pub fn export_region(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_region(Region::new(x, y, width, height))
            .map_err(to_js_error)
    }

    /// Export the marked band as JPEG bytes.
    ///
    /// # Errors
    /// Returns error if encoding fails
    #[wasm_bindgen(js_name = exportMarked)]
    pub fn export_marked(&mut self) -> Result<Vec<u8>, JsValue> {
        let region = self.inner.marked_region();
        self.inner.export_region(region).map_err(to_js_error)
    }

    /// Milliseconds between render ticks.
    #[wasm_bindgen(js_name = frameInterval)]
    pub fn frame_interval(&self) -> f64 {
        self.inner.frame_interval().as_millis() as f64
    }

    /// Move the frame on screen (e.g. after layout or scroll).
    #[wasm_bindgen(js_name = setCanvasOffset)]
    pub fn set_canvas_offset(&mut self, x: f64, y: f64) {
        self.inner.set_canvas_offset(x, y);
    }

    /// The image's container transform, or `null` when nothing is loaded.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.transform())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// How the image was placed at load time, or `null`.
    pub fn placement(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.placement())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsImageCut {
    pub(crate) fn from_config(config: CutConfig, user_agent: &str) -> Self {
        Self {
            inner: ImageCut::with_device(config, Box::new(UserAgentDevice::new(user_agent))),
        }
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests construct the widget from a JS config object and exercise
/// error paths, which can only run on wasm32 targets. Use `wasm-pack test`
/// to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_constructor_reads_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"width".into(), &200.into()).unwrap();
        js_sys::Reflect::set(&config, &"markHeight".into(), &50.into()).unwrap();
        js_sys::Reflect::set(&config, &"userAgent".into(), &"iPhone".into()).unwrap();

        let mut cut = JsImageCut::new(config.into()).unwrap();
        assert_eq!(cut.inner.config().width, 200);
        assert_eq!(cut.inner.marked_region(), Region::new(0, 135, 200, 50));
        assert_eq!(cut.render().width(), 200);
    }

    #[wasm_bindgen_test]
    fn test_constructor_without_config() {
        let cut = JsImageCut::new(JsValue::UNDEFINED).unwrap();
        assert_eq!(cut.inner.config().height, 320);
    }

    #[wasm_bindgen_test]
    fn test_rejects_non_image() {
        let mut cut = JsImageCut::new(JsValue::UNDEFINED).unwrap();
        let err = cut.load_file(b"hi", Some("text/plain".into())).unwrap_err();
        assert_eq!(
            err.as_string().unwrap(),
            "Please choose an image file (got text/plain)"
        );
    }

    #[wasm_bindgen_test]
    fn test_touch_before_load_is_error() {
        let mut cut = JsImageCut::new(JsValue::UNDEFINED).unwrap();
        assert!(cut.touch_start(&[1.0, 1.0], 1.0, 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_transform_is_null_when_empty() {
        let cut = JsImageCut::new(JsValue::UNDEFINED).unwrap();
        assert!(cut.transform().unwrap().is_null());
    }
}
