//! Geometry primitives shared by every path generator.
//!
//! All degree/radian conversion, trigonometry and the clock-angle rotation
//! convention are centralized here so numeric conventions are defined
//! exactly once: clock angles are measured in degrees with 0° at the
//! 12 o'clock position, increasing clockwise. [`point_on_circle`] applies
//! the −90° offset that maps this convention onto the standard
//! trigonometric frame (SVG y grows downward, which makes clockwise the
//! natural positive direction on screen).

use serde::{Deserialize, Serialize};

/// A clock-face angle in degrees (0° = 12 o'clock, clockwise-positive).
///
/// Thin wrapper around `f64`; arithmetic stays in degrees and conversion
/// to radians happens only inside the trig helpers below.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(f64);

impl Degrees {
    /// Create a new angle in degrees.
    pub const fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw angle value as f64 degrees.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Wrap into the `[0, 360)` range.
    pub fn wrap_pos(&self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees::new(v)
    }
}

impl std::ops::Add for Degrees {
    type Output = Degrees;

    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Degrees {
    type Output = Degrees;

    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

/// A point in widget pixel coordinates (origin top-left, y down).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Deterministic `x,y` coordinate pair for path/point strings.
    pub fn to_coord(&self) -> String {
        format!("{},{}", fmt_coord(self.x), fmt_coord(self.y))
    }
}

/// Project a clock-face angle onto a circle.
///
/// Applies the −90° rotation exactly once so that angle 0° lands at the
/// top of the circle rather than at the trigonometric right-hand zero.
///
/// # Examples
///
/// ```
/// use hexclock_core::geometry::{point_on_circle, Degrees, Point};
///
/// let top = point_on_circle(Point::new(0.0, 0.0), 10.0, Degrees::new(0.0));
/// assert!((top.x - 0.0).abs() < 1e-9);
/// assert!((top.y - -10.0).abs() < 1e-9);
/// ```
pub fn point_on_circle(center: Point, radius: f64, angle: Degrees) -> Point {
    let (sin, cos) = (angle.value() - 90.0).to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Format a coordinate with two decimal places, normalizing `-0.00`.
///
/// Path strings must be byte-identical for identical inputs, so every
/// coordinate that ends up in a string goes through this helper.
pub fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_points() {
        let c = Point::new(100.0, 100.0);
        let top = point_on_circle(c, 50.0, Degrees::new(0.0));
        assert_abs_diff_eq!(top.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.y, 50.0, epsilon = 1e-9);

        let right = point_on_circle(c, 50.0, Degrees::new(90.0));
        assert_abs_diff_eq!(right.x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, 100.0, epsilon = 1e-9);

        let bottom = point_on_circle(c, 50.0, Degrees::new(180.0));
        assert_abs_diff_eq!(bottom.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bottom.y, 150.0, epsilon = 1e-9);

        let left = point_on_circle(c, 50.0, Degrees::new(270.0));
        assert_abs_diff_eq!(left.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(left.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let c = Point::new(42.0, 7.0);
        let p = point_on_circle(c, 0.0, Degrees::new(123.0));
        assert_abs_diff_eq!(p.x, c.x, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, c.y, epsilon = 1e-12);
    }

    #[test]
    fn test_fmt_coord_normalizes_negative_zero() {
        assert_eq!(fmt_coord(-0.0001), "0.00");
        assert_eq!(fmt_coord(0.0), "0.00");
        assert_eq!(fmt_coord(199.999), "200.00");
        assert_eq!(fmt_coord(-3.456), "-3.46");
    }

    proptest! {
        #[test]
        fn prop_wrap_pos_range(angle in -1e6..1e6f64) {
            let wrapped = Degrees::new(angle).wrap_pos();
            prop_assert!(wrapped.value() >= 0.0);
            prop_assert!(wrapped.value() < 360.0);
        }

        #[test]
        fn prop_point_stays_on_circle(angle in 0.0..360.0f64, radius in 0.1..500.0f64) {
            let c = Point::new(200.0, 200.0);
            let p = point_on_circle(c, radius, Degrees::new(angle));
            let dist = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
            prop_assert!((dist - radius).abs() < 1e-9);
        }
    }
}
