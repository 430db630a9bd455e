//! Hexagon outline, grid rings, completion data polygon and axis spokes.

use serde::{Deserialize, Serialize};

use crate::core::domain::{Category, CompletionSet};
use crate::core::positions::clock_position;
use crate::geometry::{point_on_circle, Point};

/// Full-radius vertex of the hexagon for one category.
pub fn category_vertex(center: Point, radius: f64, category: Category) -> Point {
    point_on_circle(center, radius, clock_position(category).angle())
}

/// Space-separated `x,y` point string of the six hexagon vertices, in
/// [`Category::ALL`] order, suitable for an SVG `<polygon>` primitive.
pub fn hexagon_points(center: Point, radius: f64) -> String {
    let points: Vec<String> = Category::ALL
        .iter()
        .map(|c| category_vertex(center, radius, *c).to_coord())
        .collect();
    points.join(" ")
}

/// Concentric reference rings at the given radius fractions, inner to
/// outer. A fraction of 1.0 reproduces the outline exactly.
pub fn grid_ring_points(center: Point, radius: f64, fractions: &[f64]) -> Vec<String> {
    fractions
        .iter()
        .map(|f| hexagon_points(center, radius * f))
        .collect()
}

/// The six-vertex radar shape encoding current completion state.
///
/// Each category's vertex radius is scaled by its completion fraction: a
/// value of 100 coincides with the full-radius outline vertex, a value of
/// 0 collapses to the center point.
pub fn data_polygon_points(center: Point, radius: f64, completion: &CompletionSet) -> String {
    let points: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            let scaled = radius * completion.fraction(*c);
            point_on_circle(center, scaled, clock_position(*c).angle()).to_coord()
        })
        .collect();
    points.join(" ")
}

/// A decorative reference line from the center to one category's vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub category: Category,
    pub from: Point,
    pub to: Point,
    pub color: String,
}

/// One axis spoke per category, center to full-radius vertex, carrying the
/// category's display color.
pub fn axis_segments(center: Point, radius: f64) -> Vec<AxisSegment> {
    Category::ALL
        .iter()
        .map(|c| AxisSegment {
            category: *c,
            from: center,
            to: category_vertex(center, radius, *c),
            color: c.color().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CENTER: Point = Point::new(200.0, 200.0);
    const RADIUS: f64 = 152.0;

    #[test]
    fn test_outline_has_six_vertices() {
        let outline = hexagon_points(CENTER, RADIUS);
        assert_eq!(outline.split(' ').count(), 6);
        // First vertex sits at the top (physical anchor).
        assert_eq!(outline.split(' ').next().unwrap(), "200.00,48.00");
    }

    #[test]
    fn test_full_completion_matches_outline_vertex() {
        let mut completion = CompletionSet::new();
        completion.set(Category::Physical, 100.0);
        let data = data_polygon_points(CENTER, RADIUS, &completion);
        let outline = hexagon_points(CENTER, RADIUS);
        assert_eq!(
            data.split(' ').next().unwrap(),
            outline.split(' ').next().unwrap()
        );
    }

    #[test]
    fn test_zero_completion_collapses_to_center() {
        let completion = CompletionSet::new();
        let data = data_polygon_points(CENTER, RADIUS, &completion);
        for coord in data.split(' ') {
            assert_eq!(coord, "200.00,200.00");
        }
    }

    #[test]
    fn test_rings_shrink_proportionally() {
        let fractions = [0.2, 0.4, 0.6, 0.8, 1.0];
        let rings = grid_ring_points(CENTER, RADIUS, &fractions);
        assert_eq!(rings.len(), 5);
        assert_eq!(rings[4], hexagon_points(CENTER, RADIUS));

        // Every ring vertex lies on the center->outline ray at its fraction.
        for (ring, fraction) in rings.iter().zip(fractions.iter()) {
            let first = ring.split(' ').next().unwrap();
            let (x, y) = first.split_once(',').unwrap();
            let x: f64 = x.parse().unwrap();
            let y: f64 = y.parse().unwrap();
            let dist = ((x - CENTER.x).powi(2) + (y - CENTER.y).powi(2)).sqrt();
            assert_abs_diff_eq!(dist, RADIUS * fraction, epsilon = 0.01);
        }
    }

    #[test]
    fn test_axes_carry_category_colors() {
        let axes = axis_segments(CENTER, RADIUS);
        assert_eq!(axes.len(), Category::COUNT);
        for (axis, category) in axes.iter().zip(Category::ALL.iter()) {
            assert_eq!(axis.category, *category);
            assert_eq!(axis.color, category.color());
            assert_eq!(axis.from, CENTER);
        }
    }
}
