//! Per-move transform updates.
//!
//! Tracking is incremental: each move is measured against the previous move,
//! not against touch-start, and the session baseline is advanced afterwards.
//!
//! - Two fingers scale uniformly by `distance / previous_distance`.
//! - With twisting enabled, two fingers also rotate by the change in the
//!   angle between them since the pinch began.
//! - Any number of fingers pan by their average displacement.
//!
//! Pinching and panning compose within the same move.

use tracing::debug;

use super::session::{TouchEvent, TouchMode, TouchPoint, TouchSession};
use crate::transform::Transform;

/// Finger distances below this are treated as zero.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Apply one move event to `transform`.
///
/// Returns the advanced session, or `None` if the event was skipped because
/// it carried fewer touches than the session's mode needs.
pub fn apply_move(
    session: &TouchSession,
    event: &TouchEvent,
    transform: &mut Transform,
    moveable: bool,
    rotate: bool,
) -> Option<TouchSession> {
    let current: Vec<TouchPoint> = match session.mode() {
        TouchMode::Single => vec![event.primary()],
        TouchMode::Multi => {
            if event.touches.len() < 2 {
                debug!(
                    touches = event.touches.len(),
                    "two-finger move with missing touches; skipped"
                );
                return None;
            }
            vec![event.touches[0], event.touches[1]]
        }
    };

    let mut distance = session.baseline_distance();
    if session.mode() == TouchMode::Multi {
        distance = apply_pinch(session, &current, transform);
        if rotate {
            apply_twist(session, &current, transform);
        }
    }

    let mut baseline = session.baseline().to_vec();
    if moveable {
        let n = current.len() as f64;
        let (dx, dy) = current
            .iter()
            .zip(&baseline)
            .fold((0.0, 0.0), |(dx, dy), (now, then)| {
                (dx + now.x - then.x, dy + now.y - then.y)
            });
        transform.x += dx / n;
        transform.y += dy / n;
        baseline = current;
    }

    Some(session.advanced(baseline, distance))
}

/// Scale uniformly by the change in finger distance.
///
/// Returns the distance to measure the next move against. A zero reading is
/// a momentary glitch: the scale is left alone and the last good distance kept.
fn apply_pinch(
    session: &TouchSession,
    current: &[TouchPoint],
    transform: &mut Transform,
) -> Option<f64> {
    let dis = current[0].distance(current[1]);
    let previous = session.baseline_distance();

    if dis < MIN_PINCH_DISTANCE {
        debug!("zero finger distance; scale unchanged");
        return previous;
    }

    match previous {
        Some(prev) if prev >= MIN_PINCH_DISTANCE => {
            let scale = dis * transform.scale_x / prev;
            transform.scale_x = scale;
            transform.scale_y = scale;
        }
        _ => debug!("no usable previous finger distance; scale unchanged"),
    }

    Some(dis)
}

/// Rotate by how far the finger pair has turned since the pinch began.
fn apply_twist(session: &TouchSession, current: &[TouchPoint], transform: &mut Transform) {
    let Some([a, b]) = session.pinch_origin() else {
        return;
    };
    if a.distance(b) < MIN_PINCH_DISTANCE || current[0].distance(current[1]) < MIN_PINCH_DISTANCE
    {
        return;
    }
    let turned = current[0].angle_to(current[1]) - a.angle_to(b);
    transform.rotation = session.baseline_rotation() + turned;
}
