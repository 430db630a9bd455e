//! Annulus-sector ("thick wedge") paths for scheduled time blocks.
//!
//! A block occupies an angular span on a band outside the hexagon, bounded
//! by an inner and an outer radius. The drawn end angle is linearly
//! interpolated between the start and the nominal end by a completion
//! fraction, so partially completed blocks draw a partial wedge.

use crate::geometry::{fmt_coord, point_on_circle, Degrees, Point};

/// SVG large-arc flag for an angular span in degrees.
///
/// The flag must be set only when the span strictly exceeds 180°; at
/// exactly 180° both arcs are congruent and the flag stays 0. Getting this
/// boundary wrong draws the long way around the circle.
pub fn large_arc_flag(span_deg: f64) -> u8 {
    if span_deg > 180.0 {
        1
    } else {
        0
    }
}

/// Build the path for a thick wedge between `r_inner` and `r_outer`.
///
/// The wedge runs clockwise from `start` to `start + (end - start) *
/// fraction`. A non-positive span or a zero fraction degenerates to a
/// zero-area wedge, returned as an empty path that renders nothing —
/// degenerate blocks are expected upstream data, never an error.
pub fn annulus_sector_path(
    center: Point,
    r_inner: f64,
    r_outer: f64,
    start: Degrees,
    end: Degrees,
    fraction: f64,
) -> String {
    let span = end.value() - start.value();
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let drawn_span = span * fraction;
    if drawn_span <= 0.0 {
        return String::new();
    }

    let drawn_end = Degrees::new(start.value() + drawn_span);
    let flag = large_arc_flag(drawn_span);

    let outer_start = point_on_circle(center, r_outer, start);
    let outer_end = point_on_circle(center, r_outer, drawn_end);
    let inner_end = point_on_circle(center, r_inner, drawn_end);
    let inner_start = point_on_circle(center, r_inner, start);

    // Outer arc runs clockwise (sweep 1), inner arc returns counter-clockwise.
    format!(
        "M {} A {} {} 0 {} 1 {} L {} A {} {} 0 {} 0 {} Z",
        outer_start.to_coord(),
        fmt_coord(r_outer),
        fmt_coord(r_outer),
        flag,
        outer_end.to_coord(),
        inner_end.to_coord(),
        fmt_coord(r_inner),
        fmt_coord(r_inner),
        flag,
        inner_start.to_coord(),
    )
}
