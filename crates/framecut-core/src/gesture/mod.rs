//! Touch gestures on the loaded image.
//!
//! - [`session`] classifies touch events into one- and two-finger sessions
//! - [`anchor`] moves the zoom anchor under the fingers when a pinch begins
//! - [`update`] turns each move into translation, scale and rotation
//!
//! Gestures only ever write the container's transform. The image node
//! inside it is fixed at load time.

pub mod anchor;
pub mod session;
pub mod update;

pub use anchor::recenter_anchor;
pub use session::{GestureState, GestureTracker, TouchEvent, TouchMode, TouchPoint, TouchSession};
pub use update::apply_move;
