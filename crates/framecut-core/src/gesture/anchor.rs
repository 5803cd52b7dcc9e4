//! Anchor recentering for two-finger gestures.
//!
//! Scaling and rotating happen about the container's registration point. When
//! a pinch begins, the registration point is moved under the pinch centroid so
//! the image zooms around the fingers, and the container position is moved by
//! the same amount in parent space so nothing visibly jumps.
//!
//! # Steps
//!
//! ```text
//! c      = centroid(touches) - canvas_offset          // canvas space
//! corner = container.top_left()                       // canvas space
//! reg'   = R(-rotation) * (c - corner) / scale        // local space
//! pos'   = pos + R(rotation) * (reg' - reg) * scale   // keeps corner fixed
//! ```

use tracing::debug;

use crate::transform::affine::rotate_polar;
use crate::transform::{Point, Transform};

/// Move `transform`'s registration point under the centroid of `touches`.
///
/// `touches` are in screen space; `canvas_offset` is the frame's position on
/// screen. Returns `false` without touching the transform if there are no
/// touches or the transform has a zero scale.
pub fn recenter_anchor(transform: &mut Transform, touches: &[Point], canvas_offset: Point) -> bool {
    let Some(centroid) = Point::centroid(touches) else {
        return false;
    };
    if !transform.is_invertible() {
        debug!("skipping anchor recentering on a collapsed transform");
        return false;
    }

    let offset = (centroid - canvas_offset) - transform.top_left();

    let (local_x, local_y) = rotate_polar(offset.x, offset.y, -transform.rotation);
    let new_reg_x = local_x / transform.scale_x;
    let new_reg_y = local_y / transform.scale_y;

    let dx = new_reg_x - transform.reg_x;
    let dy = new_reg_y - transform.reg_y;
    transform.reg_x += dx;
    transform.reg_y += dy;

    let (shift_x, shift_y) = rotate_polar(dx, dy, transform.rotation);
    transform.x += shift_x * transform.scale_x;
    transform.y += shift_y * transform.scale_y;

    debug!(
        reg_x = transform.reg_x,
        reg_y = transform.reg_y,
        x = transform.x,
        y = transform.y,
        "recentered anchor on pinch centroid"
    );
    true
}
