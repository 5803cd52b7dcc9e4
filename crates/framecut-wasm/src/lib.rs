//! Framecut WASM - WebAssembly bindings for the crop widget
//!
//! This crate exposes framecut-core's [`ImageCut`](framecut_core::ImageCut)
//! to JavaScript/TypeScript pages.
//!
//! # Module Structure
//!
//! - `cutter` - the `JsImageCut` widget handle
//! - `touch` - conversion of flat touch coordinate arrays into touch events
//! - `types` - WASM-compatible wrapper types for rendered frames
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageCut } from '@framecut/wasm';
//!
//! await init();
//!
//! const cut = new JsImageCut({ width: 320, height: 320, markHeight: 180 });
//! cut.loadFile(new Uint8Array(await file.arrayBuffer()), file.type);
//!
//! const flatten = (list) => Array.from(list).flatMap((t) => [t.pageX, t.pageY]);
//!
//! canvas.addEventListener('touchstart', (e) => {
//!   const t = e.changedTouches[0];
//!   cut.touchStart(flatten(e.touches), t.pageX, t.pageY);
//! });
//!
//! setInterval(() => draw(cut.render()), cut.frameInterval());
//! const jpeg = cut.exportMarked();
//! ```

use wasm_bindgen::prelude::*;

mod cutter;
mod touch;
mod types;

pub use cutter::JsImageCut;
pub use types::JsFrame;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
