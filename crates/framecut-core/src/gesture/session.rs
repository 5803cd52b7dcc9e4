//! Touch sessions and the gesture tracker.
//!
//! A session is the baseline a gesture is measured against. It is rebuilt
//! from scratch on every touch-start and touch-end, and replaced by an
//! advanced copy after each move.
//!
//! ```text
//!            start(1)            start(>=2)
//!   Idle ──────────────► Single ───────────► Multi   (recenter anchor)
//!                          ▲                   │
//!                          └────── end(<2) ────┘
//! ```
//!
//! Touch-end re-reads how many touches remain: lifting one of two fingers
//! drops back to `Single` instead of leaving a stale two-finger baseline.
//! Touches are matched by their position in the event's list, not by
//! identifier. One-finger sessions follow the first touch still down.

use tracing::debug;

use super::anchor::recenter_anchor;
use super::update::apply_move;
use crate::transform::{Point, Transform};

/// A screen-space touch coordinate.
pub type TouchPoint = Point;

/// A touch event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// The event's own coordinate (the touch that changed).
    pub point: TouchPoint,
    /// Touches still on the surface after this event, in reported order.
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// One finger at `point`.
    pub fn single(point: TouchPoint) -> Self {
        Self {
            point,
            touches: vec![point],
        }
    }

    /// Several fingers; the first one doubles as the event coordinate.
    pub fn multi(touches: Vec<TouchPoint>) -> Self {
        Self {
            point: touches.first().copied().unwrap_or_default(),
            touches,
        }
    }

    /// A finger lifted at `point`, leaving `remaining` on the surface.
    pub fn lifted(point: TouchPoint, remaining: Vec<TouchPoint>) -> Self {
        Self {
            point,
            touches: remaining,
        }
    }

    /// The first touch still down, else the event's own coordinate.
    pub(crate) fn primary(&self) -> TouchPoint {
        self.touches.first().copied().unwrap_or(self.point)
    }

    fn is_multi(&self) -> bool {
        self.touches.len() >= 2
    }
}

/// Whether a session tracks one finger or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchMode {
    Single,
    Multi,
}

/// Baseline of the current gesture.
///
/// `baseline` holds one point in `Single` mode and two in `Multi` mode;
/// `baseline_distance` is present exactly in `Multi` mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSession {
    mode: TouchMode,
    baseline: Vec<TouchPoint>,
    baseline_distance: Option<f64>,
    baseline_rotation: f64,
    pinch_origin: Option<[TouchPoint; 2]>,
}

impl TouchSession {
    /// A one-finger session at `point`.
    pub fn single(point: TouchPoint) -> Self {
        Self {
            mode: TouchMode::Single,
            baseline: vec![point],
            baseline_distance: None,
            baseline_rotation: 0.0,
            pinch_origin: None,
        }
    }

    /// A two-finger session; `container_rotation` is recorded for twisting.
    pub fn multi(first: TouchPoint, second: TouchPoint, container_rotation: f64) -> Self {
        Self {
            mode: TouchMode::Multi,
            baseline: vec![first, second],
            baseline_distance: Some(first.distance(second)),
            baseline_rotation: container_rotation,
            pinch_origin: Some([first, second]),
        }
    }

    /// The session a fresh touch-start or touch-end establishes.
    ///
    /// Only the first two reported touches are used. A single session sits
    /// on the touch still down, or on the event coordinate once none remain.
    pub fn from_event(event: &TouchEvent, container_rotation: f64) -> Self {
        if event.is_multi() {
            Self::multi(event.touches[0], event.touches[1], container_rotation)
        } else {
            Self::single(event.primary())
        }
    }

    /// The same gesture, measured from the latest touches.
    pub(crate) fn advanced(&self, baseline: Vec<TouchPoint>, distance: Option<f64>) -> Self {
        Self {
            baseline,
            baseline_distance: distance,
            ..self.clone()
        }
    }

    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    pub fn baseline(&self) -> &[TouchPoint] {
        &self.baseline
    }

    pub fn baseline_distance(&self) -> Option<f64> {
        self.baseline_distance
    }

    pub fn baseline_rotation(&self) -> f64 {
        self.baseline_rotation
    }

    /// Finger positions when the pinch began. Not advanced by moves.
    pub fn pinch_origin(&self) -> Option<[TouchPoint; 2]> {
        self.pinch_origin
    }
}

/// Interaction state for the loaded image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    pub session: Option<TouchSession>,
    /// Whether moves translate the image.
    pub moveable: bool,
}

/// Turns touch events into container transform updates.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
    rotate_gesture: bool,
    suspended: bool,
}

impl GestureTracker {
    /// A tracker; `rotate_gesture` lets two-finger twists rotate the image.
    pub fn new(rotate_gesture: bool) -> Self {
        Self {
            rotate_gesture,
            ..Self::default()
        }
    }

    /// Start (or restart) a gesture.
    ///
    /// Moving into two-finger mode recenters the container's anchor on the
    /// pinch centroid. A third finger does not recenter again.
    pub fn touch_start(
        &mut self,
        event: &TouchEvent,
        transform: &mut Transform,
        canvas_offset: Point,
    ) {
        let was_multi = self.mode() == Some(TouchMode::Multi);
        let session = TouchSession::from_event(event, transform.rotation);

        if session.mode == TouchMode::Multi && !was_multi {
            recenter_anchor(transform, &session.baseline, canvas_offset);
        }

        debug!(mode = ?session.mode, touches = event.touches.len(), "touch start");
        self.rebaseline(session);
    }

    /// Apply a move to the container transform.
    pub fn touch_move(&mut self, event: &TouchEvent, transform: &mut Transform) {
        let Some(session) = &self.state.session else {
            debug!("touch move without a session");
            return;
        };

        if let Some(next) = apply_move(
            session,
            event,
            transform,
            self.state.moveable,
            self.rotate_gesture,
        ) {
            self.state.session = Some(next);
        }
    }

    /// Re-baseline from the touches that remain. Never moves the image.
    pub fn touch_end(&mut self, event: &TouchEvent, transform: &Transform) {
        let session = TouchSession::from_event(event, transform.rotation);
        debug!(mode = ?session.mode, remaining = event.touches.len(), "touch end");
        self.rebaseline(session);
    }

    /// Stop moves from translating the image, e.g. during an export.
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.state.moveable = false;
    }

    /// Undo [`suspend`](Self::suspend).
    pub fn resume(&mut self) {
        self.suspended = false;
        self.state.moveable = self.state.session.is_some();
    }

    /// Forget the current gesture.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn session(&self) -> Option<&TouchSession> {
        self.state.session.as_ref()
    }

    pub fn mode(&self) -> Option<TouchMode> {
        self.session().map(TouchSession::mode)
    }

    pub fn is_moveable(&self) -> bool {
        self.state.moveable
    }

    fn rebaseline(&mut self, session: TouchSession) {
        self.state = GestureState {
            session: Some(session),
            moveable: !self.suspended,
        };
    }
}
