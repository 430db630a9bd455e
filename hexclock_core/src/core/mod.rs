//! Core domain models for the hexagon-clock widget.
//!
//! This module defines the fundamental data structures the geometry engine
//! operates on: wellness categories and their fixed clock positions,
//! per-period completion values, scheduled time blocks and anonymous
//! community resonance aggregates.

pub mod domain;
pub mod positions;

pub use domain::{BlockStatus, Category, CompletionSet, ResonanceEntry, TimeBlock};
pub use positions::{clock_position, ClockPosition};
