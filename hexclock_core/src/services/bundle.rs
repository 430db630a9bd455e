//! Geometry bundle precomputation and memoization.
//!
//! [`compute_bundle`] invokes every path generator exactly once per
//! `(size, data)` change and returns the immutable [`GeometryBundle`] the
//! rendering collaborator draws from. [`GeometryCache`] wraps it with
//! structural-equality memoization; the cache is an explicit caller-owned
//! value, never a global, so multiple widget instances cannot interfere.

use std::sync::Arc;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::domain::{BlockStatus, Category, CompletionSet, ResonanceEntry, TimeBlock};
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Point;
use crate::paths::arc::annulus_sector_path;
use crate::paths::polygon::{
    axis_segments, data_polygon_points, grid_ring_points, hexagon_points, AxisSegment,
};
use crate::paths::resonance::{resonance_dots, ResonanceDot};
use crate::paths::sun::{sun_indicator, SunIndicator};

/// The complete set of inputs a bundle is computed from.
///
/// Equality is structural; the cache recomputes only when one of these
/// changes by value. The wall-clock time is truncated to whole minutes at
/// construction so sub-minute ticks keep the cache key stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleInputs {
    pub size: u32,
    pub completion: CompletionSet,
    pub blocks: Vec<TimeBlock>,
    pub resonance: Vec<ResonanceEntry>,
    pub time: NaiveTime,
}

impl BundleInputs {
    pub fn new(
        size: u32,
        completion: CompletionSet,
        blocks: Vec<TimeBlock>,
        resonance: Vec<ResonanceEntry>,
        time: NaiveTime,
    ) -> Self {
        let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN);
        Self {
            size,
            completion,
            blocks,
            resonance,
            time,
        }
    }
}

/// The arc drawn for one time block.
///
/// One entry per supplied block; degenerate blocks (zero span or zero
/// fraction) carry an empty path and render nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockArc {
    pub id: String,
    pub category: Category,
    pub status: BlockStatus,
    pub color: String,
    pub path: String,
}

/// The engine's sole output: every path and coordinate the rendering layer
/// needs for one frame.
///
/// Immutable once produced; a new bundle is computed wholesale on any
/// relevant input change, there is no incremental patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryBundle {
    pub size: u32,
    pub center: Point,
    pub radius: f64,
    pub outline: String,
    pub grid_rings: Vec<String>,
    pub data_polygon: String,
    pub axes: Vec<AxisSegment>,
    pub block_arcs: Vec<BlockArc>,
    pub resonance_dots: Vec<ResonanceDot>,
    pub sun: SunIndicator,
}

impl GeometryBundle {
    /// Serialize the bundle for the rendering collaborator's boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Compute a full geometry bundle from resolved inputs.
///
/// Derives `center = size / 2` and `radius = size * radius_ratio`, then
/// invokes each path generator exactly once. Cost is linear in the number
/// of blocks and resonance entries. A zero size is a configuration error;
/// degenerate data (all-zero completion, no resonance) yields a valid,
/// empty-looking bundle.
pub fn compute_bundle(
    config: &EngineConfig,
    inputs: &BundleInputs,
) -> GeometryResult<GeometryBundle> {
    if inputs.size == 0 {
        return Err(GeometryError::InvalidSize(
            "widget size must be positive".to_string(),
        ));
    }

    let size = inputs.size as f64;
    let center = Point::new(size / 2.0, size / 2.0);
    let radius = size * config.radius_ratio;

    let block_arcs = inputs
        .blocks
        .iter()
        .map(|block| {
            let start = block.start_angle();
            let end = start + block.span();
            BlockArc {
                id: block.id.clone(),
                category: block.category,
                status: block.status,
                color: block.category.color().to_string(),
                path: annulus_sector_path(
                    center,
                    radius * config.arc_inner_ratio,
                    radius * config.arc_outer_ratio,
                    start,
                    end,
                    block.completion_fraction(),
                ),
            }
        })
        .collect();

    Ok(GeometryBundle {
        size: inputs.size,
        center,
        radius,
        outline: hexagon_points(center, radius),
        grid_rings: grid_ring_points(center, radius, &config.ring_fractions),
        data_polygon: data_polygon_points(center, radius, &inputs.completion),
        axes: axis_segments(center, radius),
        block_arcs,
        resonance_dots: resonance_dots(config, center, radius, &inputs.resonance),
        sun: sun_indicator(center, radius, inputs.time),
    })
}

/// Memoizing wrapper around [`compute_bundle`].
///
/// Owned by the caller (one per widget instance). Recomputation happens
/// only when the inputs differ structurally from the previous call;
/// unrelated host re-renders reuse the shared bundle.
#[derive(Debug, Default)]
pub struct GeometryCache {
    config: EngineConfig,
    last: Option<(BundleInputs, Arc<GeometryBundle>)>,
}

impl GeometryCache {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, last: None }
    }

    /// Bundle for the given inputs, reusing the previous computation when
    /// nothing changed.
    pub fn bundle(&mut self, inputs: &BundleInputs) -> GeometryResult<Arc<GeometryBundle>> {
        if let Some((cached_inputs, bundle)) = &self.last {
            if cached_inputs == inputs {
                log::debug!("geometry cache hit (size {})", inputs.size);
                return Ok(Arc::clone(bundle));
            }
        }
        log::debug!(
            "geometry cache recompute (size {}, {} blocks, {} resonance entries)",
            inputs.size,
            inputs.blocks.len(),
            inputs.resonance.len()
        );
        let bundle = Arc::new(compute_bundle(&self.config, inputs)?);
        self.last = Some((inputs.clone(), Arc::clone(&bundle)));
        Ok(bundle)
    }

    /// Drop the memoized bundle, forcing the next call to recompute.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
