//! Engine tuning configuration.
//!
//! All knobs the geometry engine exposes live in [`EngineConfig`]. The
//! engine is side-effect-free, so configuration is an explicit value owned
//! by the caller; it is never read from the environment or from disk.
//! Every widget instance can carry its own config without interference.

use serde::{Deserialize, Serialize};

/// Tuning constants for bundle computation and size resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hexagon radius as a fraction of the widget pixel size.
    #[serde(default = "default_radius_ratio")]
    pub radius_ratio: f64,

    /// Radius fractions of the concentric background grid rings, inner to
    /// outer. The outermost fraction of 1.0 coincides with the outline.
    #[serde(default = "default_ring_fractions")]
    pub ring_fractions: Vec<f64>,

    /// Inner edge of the time-block arc band, as a multiple of the radius.
    #[serde(default = "default_arc_inner_ratio")]
    pub arc_inner_ratio: f64,

    /// Outer edge of the time-block arc band, as a multiple of the radius.
    #[serde(default = "default_arc_outer_ratio")]
    pub arc_outer_ratio: f64,

    /// Smallest pixel size the resolver will return.
    #[serde(default = "default_min_size")]
    pub min_size: u32,

    /// Largest pixel size the resolver will return.
    #[serde(default = "default_max_size")]
    pub max_size: u32,

    /// Inner ring of the resonance dot spiral, as a fraction of the radius.
    #[serde(default = "default_dot_inner_ratio")]
    pub dot_inner_ratio: f64,

    /// Outer ring of the resonance dot spiral, as a fraction of the radius.
    #[serde(default = "default_dot_outer_ratio")]
    pub dot_outer_ratio: f64,

    /// Reveal delay between consecutive dots in a cluster, in milliseconds.
    #[serde(default = "default_dot_stagger_ms")]
    pub dot_stagger_ms: u32,
}

fn default_radius_ratio() -> f64 {
    0.38
}

fn default_ring_fractions() -> Vec<f64> {
    vec![0.2, 0.4, 0.6, 0.8, 1.0]
}

fn default_arc_inner_ratio() -> f64 {
    1.08
}

fn default_arc_outer_ratio() -> f64 {
    1.20
}

fn default_min_size() -> u32 {
    240
}

fn default_max_size() -> u32 {
    640
}

fn default_dot_inner_ratio() -> f64 {
    0.035
}

fn default_dot_outer_ratio() -> f64 {
    0.06
}

fn default_dot_stagger_ms() -> u32 {
    150
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius_ratio: default_radius_ratio(),
            ring_fractions: default_ring_fractions(),
            arc_inner_ratio: default_arc_inner_ratio(),
            arc_outer_ratio: default_arc_outer_ratio(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            dot_inner_ratio: default_dot_inner_ratio(),
            dot_outer_ratio: default_dot_outer_ratio(),
            dot_stagger_ms: default_dot_stagger_ms(),
        }
    }
}
