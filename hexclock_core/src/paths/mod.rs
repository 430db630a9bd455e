//! Path generators for the hexagon clock face.
//!
//! Pure functions producing SVG-ready path and point strings from
//! already-resolved center/radius/angle inputs. No hidden state: every
//! generator is a plain transformation invoked once per bundle
//! computation.
//!
//! # Components
//!
//! - [`polygon`]: hexagon outline, concentric grid rings, the completion
//!   data polygon and axis spokes
//! - [`arc`]: annulus-sector ("thick wedge") paths for time blocks
//! - [`resonance`]: community resonance dot clusters
//! - [`sun`]: the current-time indicator

pub mod arc;
pub mod polygon;
pub mod resonance;
pub mod sun;

pub use arc::{annulus_sector_path, large_arc_flag};
pub use polygon::{
    axis_segments, category_vertex, data_polygon_points, grid_ring_points, hexagon_points,
    AxisSegment,
};
pub use resonance::{resonance_dots, ResonanceDot, MAX_DOTS_PER_CATEGORY};
pub use sun::{sun_clock_angle, sun_indicator, SunIndicator, SUN_RADIUS_RATIO};
