//! Current-time indicator ("sun") on the clock face.
//!
//! The hour hand of a 12-hour dial moves 30° per hour and 0.5° per
//! minute. The marker sits at 90% of the outer radius, with eight short
//! radial rays forming a sun glyph. The engine only converts a supplied
//! wall-clock time to geometry; ticking at least once per minute is the
//! hosting layer's scheduling concern.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::geometry::{point_on_circle, Degrees, Point};

/// The marker sits at this fraction of the outer radius.
pub const SUN_RADIUS_RATIO: f64 = 0.9;

/// Number of rays around the marker.
const RAY_COUNT: usize = 8;

/// Ray endpoints as fractions of the outer radius, measured from the
/// marker's own center.
const RAY_INNER_RATIO: f64 = 0.045;
const RAY_OUTER_RATIO: f64 = 0.075;

/// Precomputed geometry for the current-time marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunIndicator {
    /// Clock angle of the marker (0° = 12 o'clock, clockwise).
    pub angle: Degrees,
    /// Marker center in widget coordinates.
    pub position: Point,
    /// Single path containing the eight ray segments.
    pub rays_path: String,
}

/// Clock angle of the hour hand for a wall-clock time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use hexclock_core::paths::sun_clock_angle;
///
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(sun_clock_angle(noon).value(), 0.0);
///
/// let half_past_four = NaiveTime::from_hms_opt(16, 30, 0).unwrap();
/// assert_eq!(sun_clock_angle(half_past_four).value(), 135.0);
/// ```
pub fn sun_clock_angle(time: NaiveTime) -> Degrees {
    let hour = (time.hour() % 12) as f64;
    let minute = time.minute() as f64;
    Degrees::new(hour * 30.0 + minute * 0.5)
}

/// Compute the sun marker position and ray glyph for a wall-clock time.
pub fn sun_indicator(center: Point, radius: f64, time: NaiveTime) -> SunIndicator {
    let angle = sun_clock_angle(time);
    let position = point_on_circle(center, radius * SUN_RADIUS_RATIO, angle);

    let mut rays = Vec::with_capacity(RAY_COUNT);
    for i in 0..RAY_COUNT {
        let ray_angle = Degrees::new(i as f64 * (360.0 / RAY_COUNT as f64));
        let from = point_on_circle(position, radius * RAY_INNER_RATIO, ray_angle);
        let to = point_on_circle(position, radius * RAY_OUTER_RATIO, ray_angle);
        rays.push(format!("M {} L {}", from.to_coord(), to.to_coord()));
    }

    SunIndicator {
        angle,
        position,
        rays_path: rays.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const CENTER: Point = Point::new(200.0, 200.0);
    const RADIUS: f64 = 152.0;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Test midnight/noon anchor the marker at the top of the dial
    #[test]
    fn test_twelve_oclock_at_top() {
        for hour in [0, 12] {
            let sun = sun_indicator(CENTER, RADIUS, at(hour, 0));
            assert_eq!(sun.angle.value(), 0.0);
            assert_abs_diff_eq!(sun.position.x, CENTER.x, epsilon = 1e-9);
            assert_abs_diff_eq!(
                sun.position.y,
                CENTER.y - RADIUS * SUN_RADIUS_RATIO,
                epsilon = 1e-9
            );
        }
    }

    /// Test six o'clock sits diametrically opposite twelve
    #[test]
    fn test_six_oclock_diametrically_opposite() {
        let twelve = sun_indicator(CENTER, RADIUS, at(0, 0));
        let six = sun_indicator(CENTER, RADIUS, at(6, 0));
        assert_eq!(six.angle.value(), 180.0);
        assert_abs_diff_eq!(
            six.position.x,
            2.0 * CENTER.x - twelve.position.x,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            six.position.y,
            2.0 * CENTER.y - twelve.position.y,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_minutes_advance_the_hour_hand() {
        // 0.5 degrees per minute.
        assert_eq!(sun_clock_angle(at(3, 0)).value(), 90.0);
        assert_eq!(sun_clock_angle(at(3, 30)).value(), 105.0);
        assert_eq!(sun_clock_angle(at(3, 59)).value(), 119.5);
    }

    #[test]
    fn test_glyph_has_eight_rays() {
        let sun = sun_indicator(CENTER, RADIUS, at(9, 15));
        assert_eq!(sun.rays_path.matches("M ").count(), RAY_COUNT);
        assert_eq!(sun.rays_path.matches("L ").count(), RAY_COUNT);
    }

    proptest! {
        /// Angle grows monotonically with minutes within any hour
        #[test]
        fn prop_monotone_in_minutes(hour in 0u32..24, minute in 0u32..59) {
            let a = sun_clock_angle(at(hour, minute)).value();
            let b = sun_clock_angle(at(hour, minute + 1)).value();
            prop_assert!(b > a);
        }

        #[test]
        fn prop_angle_within_full_turn(hour in 0u32..24, minute in 0u32..60) {
            let angle = sun_clock_angle(at(hour, minute)).value();
            prop_assert!(angle >= 0.0);
            prop_assert!(angle < 360.0);
        }
    }
}
