//! 2D display transforms with a registration point.
//!
//! A node's transform maps a point `p` in its local space into its parent as
//!
//! ```text
//! parent = (x, y) + R(rotation) * S(scale_x, scale_y) * (p - (reg_x, reg_y))
//! ```
//!
//! Rotation is in degrees, positive = clockwise on screen (y grows down).
//! The registration point is the local origin for rotation and scaling.

use serde::{Deserialize, Serialize};

/// A 2D point in whatever space the caller is working in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the vector from `self` to `other`, in degrees.
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    /// Average of a set of points. `None` for an empty set.
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Rotate `(x, y)` by `degrees` using its polar form.
///
/// `atan2(0, 0)` is `0`, so the zero vector stays put.
#[inline]
pub(crate) fn rotate_polar(x: f64, y: f64, degrees: f64) -> (f64, f64) {
    let length = x.hypot(y);
    let angle = y.atan2(x) + degrees.to_radians();
    (length * angle.cos(), length * angle.sin())
}

/// Position, anchor, rotation and scale of a display node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub reg_x: f64,
    pub reg_y: f64,
    /// Degrees.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            reg_x: 0.0,
            reg_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Transform {
    /// Identity transform placed at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Top-left corner of the node (its local origin) in parent space.
    ///
    /// Uses the polar form of the registration offset: distance
    /// `hypot(reg_x * sx, reg_y * sy)` at angle `atan2(reg_y, reg_x)`.
    pub fn top_left(&self) -> Point {
        let d = (self.reg_x * self.scale_x).hypot(self.reg_y * self.scale_y);
        let a = self.reg_y.atan2(self.reg_x).to_degrees();
        let theta = (self.rotation + a).to_radians();
        Point::new(self.x - d * theta.cos(), self.y - d * theta.sin())
    }

    /// Map a local point into parent space.
    pub fn to_parent(&self, local: Point) -> Point {
        let sx = (local.x - self.reg_x) * self.scale_x;
        let sy = (local.y - self.reg_y) * self.scale_y;
        let (cos, sin) = rotation_cos_sin(self.rotation);
        Point::new(self.x + sx * cos - sy * sin, self.y + sx * sin + sy * cos)
    }

    /// Map a parent-space point into local space.
    ///
    /// Returns `None` when either scale is zero (not invertible).
    pub fn to_local(&self, parent: Point) -> Option<Point> {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return None;
        }
        let dx = parent.x - self.x;
        let dy = parent.y - self.y;
        let (cos, sin) = rotation_cos_sin(self.rotation);
        let ux = dx * cos + dy * sin;
        let uy = -dx * sin + dy * cos;
        Some(Point::new(
            ux / self.scale_x + self.reg_x,
            uy / self.scale_y + self.reg_y,
        ))
    }

    /// Whether both scale factors are non-zero.
    pub fn is_invertible(&self) -> bool {
        self.scale_x != 0.0 && self.scale_y != 0.0
    }
}

#[inline]
fn rotation_cos_sin(degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        assert!((a.distance(b) - 100.0).abs() < EPS);
        assert!(a.angle_to(b).abs() < EPS);
        assert!((a.angle_to(Point::new(100.0, 150.0)) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_centroid() {
        let c = Point::centroid(&[Point::new(0.0, 0.0), Point::new(10.0, 20.0)]).unwrap();
        assert_close(c, Point::new(5.0, 10.0));
        assert!(Point::centroid(&[]).is_none());
    }

    #[test]
    fn test_rotate_polar_zero_vector() {
        let (x, y) = rotate_polar(0.0, 0.0, 45.0);
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn test_rotate_polar_quarter_turn() {
        let (x, y) = rotate_polar(1.0, 0.0, 90.0);
        assert!(x.abs() < EPS);
        assert!((y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_identity_top_left_is_position() {
        let t = Transform::at(12.0, 34.0);
        assert_close(t.top_left(), Point::new(12.0, 34.0));
    }

    #[test]
    fn test_top_left_matches_to_parent_origin() {
        let t = Transform {
            x: 150.0,
            y: 80.0,
            reg_x: 40.0,
            reg_y: 25.0,
            rotation: 33.0,
            scale_x: 1.7,
            scale_y: 1.7,
        };
        assert_close(t.top_left(), t.to_parent(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_registration_point_maps_to_position() {
        let t = Transform {
            x: 10.0,
            y: 20.0,
            reg_x: 5.0,
            reg_y: 7.0,
            rotation: 120.0,
            scale_x: 2.0,
            scale_y: 2.0,
        };
        assert_close(t.to_parent(Point::new(5.0, 7.0)), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_quarter_turn_is_clockwise_on_screen() {
        let t = Transform {
            rotation: 90.0,
            ..Transform::default()
        };
        // +x in local space points down (+y) on screen.
        assert_close(t.to_parent(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_to_local_inverts_to_parent() {
        let t = Transform {
            x: -30.0,
            y: 64.0,
            reg_x: 11.0,
            reg_y: -3.0,
            rotation: 271.0,
            scale_x: 0.4,
            scale_y: 1.3,
        };
        let p = Point::new(7.5, -2.25);
        assert_close(t.to_local(t.to_parent(p)).unwrap(), p);
    }

    #[test]
    fn test_zero_scale_is_not_invertible() {
        let t = Transform {
            scale_x: 0.0,
            ..Transform::default()
        };
        assert!(!t.is_invertible());
        assert!(t.to_local(Point::new(1.0, 1.0)).is_none());
    }
}
