//! Bundle precomputation services.
//!
//! The "compute everything needed for visualization" layer: assembles the
//! output of every path generator into one immutable bundle, and memoizes
//! it so unrelated host re-renders cost nothing.

pub mod bundle;

pub use bundle::{compute_bundle, BlockArc, BundleInputs, GeometryBundle, GeometryCache};
