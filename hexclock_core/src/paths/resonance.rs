//! Community resonance dot clusters.
//!
//! Each category with any resonance gets a small cluster of dots around
//! its hexagon vertex: up to eight positions on an alternating two-radius
//! spiral, so the cluster reads as organic rather than a rigid grid. Dot
//! intensity encodes the anonymous completion count, capped at 1.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::domain::{Category, ResonanceEntry};
use crate::geometry::{point_on_circle, Degrees, Point};
use crate::paths::polygon::category_vertex;

/// Hard cap on dots per category cluster.
pub const MAX_DOTS_PER_CATEGORY: usize = 8;

/// Counts at or above this saturate the dot intensity at 1.0.
const INTENSITY_SATURATION_COUNT: f64 = 5.0;

/// Angular step between consecutive dots in a cluster.
const DOT_STEP_DEG: f64 = 45.0;

/// Extra rotation applied to outer-ring dots so the two rings interleave.
const OUTER_RING_OFFSET_DEG: f64 = 22.5;

/// One decorative dot with its reveal timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceDot {
    pub category: Category,
    pub position: Point,
    /// Fractional intensity in `(0, 1]`, derived from the resonance count.
    pub intensity: f64,
    /// Staggered reveal delay, proportional to the dot index.
    pub delay_ms: u32,
}

/// Generate dot clusters for every category with resonance.
///
/// A category with `has_resonance = false` (or a zero count) emits no
/// dots; a count of eight or more emits exactly
/// [`MAX_DOTS_PER_CATEGORY`] dots.
pub fn resonance_dots(
    config: &EngineConfig,
    center: Point,
    radius: f64,
    entries: &[ResonanceEntry],
) -> Vec<ResonanceDot> {
    let mut dots = Vec::new();
    for entry in entries {
        if !entry.has_resonance || entry.count == 0 {
            continue;
        }
        let vertex = category_vertex(center, radius, entry.category);
        let intensity = (entry.count as f64 / INTENSITY_SATURATION_COUNT).min(1.0);
        let count = (entry.count as usize).min(MAX_DOTS_PER_CATEGORY);
        for i in 0..count {
            let (ring, offset) = if i % 2 == 0 {
                (config.dot_inner_ratio, 0.0)
            } else {
                (config.dot_outer_ratio, OUTER_RING_OFFSET_DEG)
            };
            let angle = Degrees::new(i as f64 * DOT_STEP_DEG + offset);
            dots.push(ResonanceDot {
                category: entry.category,
                position: point_on_circle(vertex, radius * ring, angle),
                intensity,
                delay_ms: i as u32 * config.dot_stagger_ms,
            });
        }
    }
    dots
}
