//! Fixed category-to-clock-position registry.
//!
//! Each of the six categories owns one position on a 12-hour analog dial,
//! one category every two clock hours, so the hexagon vertices are evenly
//! spaced at 60° intervals. This is read-only configuration: consumers
//! outside this core hard-code expectations like "top = physical", so the
//! exact values must stay stable.

use serde::{Deserialize, Serialize};

use crate::core::domain::Category;
use crate::geometry::Degrees;

/// The fixed clock position assigned to a category.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockPosition {
    /// Clock hour in `0..12` (0 = 12 o'clock).
    pub hour: u8,
    /// Clock angle in degrees (0° at the top, clockwise).
    pub angle_deg: f64,
}

impl ClockPosition {
    pub fn angle(&self) -> Degrees {
        Degrees::new(self.angle_deg)
    }
}

/// One entry per category, in [`Category::ALL`] order.
const CLOCK_POSITIONS: [ClockPosition; Category::COUNT] = [
    ClockPosition { hour: 0, angle_deg: 0.0 },    // physical, 12 o'clock
    ClockPosition { hour: 2, angle_deg: 60.0 },   // mental
    ClockPosition { hour: 4, angle_deg: 120.0 },  // emotional
    ClockPosition { hour: 6, angle_deg: 180.0 },  // social
    ClockPosition { hour: 8, angle_deg: 240.0 },  // spiritual
    ClockPosition { hour: 10, angle_deg: 300.0 }, // material
];

/// Look up the fixed clock position for a category.
///
/// Total over the closed [`Category`] enum; unknown identifier strings are
/// already rejected by `Category::from_str`, so no failure path exists
/// here.
pub fn clock_position(category: Category) -> ClockPosition {
    CLOCK_POSITIONS[category.index()]
}
