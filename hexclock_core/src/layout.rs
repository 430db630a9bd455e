//! Responsive widget size resolution.
//!
//! Maps the hosting layout's constraints (a fixed requested size or the
//! available container box) to a final integer pixel size, a named
//! breakpoint and a scale multiplier. Policy: the largest size that fits,
//! clamped to the configured bounds so the widget is never illegibly small
//! or absurdly large; the result is always positive.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{GeometryError, GeometryResult};

/// Sizing constraint supplied by the hosting layout.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum SizeRequest {
    /// An exact pixel size (still clamped to the configured bounds).
    Fixed(u32),
    /// Available container box; the widget takes the largest square that
    /// fits.
    Container { width: f64, height: f64 },
}

/// Named breakpoints for the hosting layout's styling decisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Compact,
    Standard,
    Expanded,
}

/// Breakpoint thresholds in pixels (upper bounds, exclusive).
const COMPACT_MAX: u32 = 360;
const STANDARD_MAX: u32 = 500;

/// The resolved widget sizing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSize {
    /// Final pixel size, always positive.
    pub size: u32,
    pub breakpoint: Breakpoint,
    /// Scale multiplier for size-dependent decoration (fonts, strokes).
    pub scale: f64,
}

fn classify(size: u32) -> (Breakpoint, f64) {
    if size < COMPACT_MAX {
        (Breakpoint::Compact, 0.85)
    } else if size < STANDARD_MAX {
        (Breakpoint::Standard, 1.0)
    } else {
        (Breakpoint::Expanded, 1.15)
    }
}

/// Resolve a size request against the configured bounds.
///
/// A non-positive fixed size or container dimension is a configuration
/// error: downstream geometry would be meaningless, so it fails fast
/// rather than substituting a default. A container smaller than the
/// minimum bound is expected (narrow phones) and clamps up instead.
pub fn resolve_size(config: &EngineConfig, request: SizeRequest) -> GeometryResult<ResolvedSize> {
    let raw = match request {
        SizeRequest::Fixed(0) => {
            return Err(GeometryError::InvalidSize(
                "fixed size must be positive".to_string(),
            ));
        }
        SizeRequest::Fixed(px) => px,
        SizeRequest::Container { width, height } => {
            if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                return Err(GeometryError::InvalidSize(format!(
                    "container dimensions must be positive, got {}x{}",
                    width, height
                )));
            }
            width.min(height).floor() as u32
        }
    };

    let size = raw.clamp(config.min_size, config.max_size);
    if size != raw {
        log::debug!("requested size {} clamped to {}", raw, size);
    }
    let (breakpoint, scale) = classify(size);
    Ok(ResolvedSize {
        size,
        breakpoint,
        scale,
    })
}
