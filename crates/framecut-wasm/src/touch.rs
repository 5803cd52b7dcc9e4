//! Conversion of host touch data into core touch events.
//!
//! The page passes the active touches as a flat `[x0, y0, x1, y1, ...]`
//! array plus the event's own coordinate. Touches are taken in the order
//! the browser lists them.

use framecut_core::{TouchEvent, TouchPoint};

/// Build a touch event from flat coordinates and the event coordinate.
///
/// A trailing odd coordinate is ignored.
pub(crate) fn touch_event(coords: &[f64], event_x: f64, event_y: f64) -> TouchEvent {
    let touches = coords
        .chunks_exact(2)
        .map(|pair| TouchPoint::new(pair[0], pair[1]))
        .collect();

    TouchEvent {
        point: TouchPoint::new(event_x, event_y),
        touches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_become_touches() {
        let event = touch_event(&[1.0, 2.0, 3.0, 4.0], 1.0, 2.0);
        assert_eq!(
            event.touches,
            vec![TouchPoint::new(1.0, 2.0), TouchPoint::new(3.0, 4.0)]
        );
        assert_eq!(event.point, TouchPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_lifted_last_finger() {
        let event = touch_event(&[], 9.0, 8.0);
        assert!(event.touches.is_empty());
        assert_eq!(event.point, TouchPoint::new(9.0, 8.0));
    }

    #[test]
    fn test_odd_trailing_value_ignored() {
        let event = touch_event(&[1.0, 2.0, 3.0], 0.0, 0.0);
        assert_eq!(event.touches.len(), 1);
    }
}
