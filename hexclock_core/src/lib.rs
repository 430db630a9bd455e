//! hexclock-core — hexagon-clock geometry engine.
//!
//! Pure-computation layer mapping six wellness categories onto fixed
//! positions of a 12-hour analog clock face and precomputing every SVG
//! path the rendering layer needs: hexagon outline, concentric grid,
//! completion data polygon, axis spokes, time-block arcs, community
//! resonance dot clusters and the current-time sun indicator.
//!
//! The engine is synchronous, single-threaded and side-effect-free: the
//! caller supplies completion percentages, scheduled time blocks,
//! resonance counts, a pixel size and the current wall-clock time, and
//! receives an immutable [`services::GeometryBundle`] of path strings and
//! coordinates. Drawing, styling, animation and interaction belong to the
//! rendering collaborator.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use hexclock_core::config::EngineConfig;
//! use hexclock_core::core::{Category, CompletionSet};
//! use hexclock_core::services::{BundleInputs, GeometryCache};
//!
//! let mut cache = GeometryCache::new(EngineConfig::default());
//! let completion = CompletionSet::from_pairs([
//!     (Category::Physical, 100.0),
//!     (Category::Emotional, 50.0),
//! ]);
//! let inputs = BundleInputs::new(
//!     400,
//!     completion,
//!     vec![],
//!     vec![],
//!     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//! );
//! let bundle = cache.bundle(&inputs).unwrap();
//! assert_eq!(bundle.center.x, 200.0);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod paths;
pub mod render_hints;
pub mod services;

pub use config::EngineConfig;
pub use core::{BlockStatus, Category, CompletionSet, ResonanceEntry, TimeBlock};
pub use error::{GeometryError, GeometryResult};
pub use layout::{resolve_size, Breakpoint, ResolvedSize, SizeRequest};
pub use render_hints::{render_hints, RenderHints};
pub use services::{compute_bundle, BundleInputs, GeometryBundle, GeometryCache};
