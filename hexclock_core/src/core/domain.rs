//! Domain models for wellness categories, completion data and time blocks.
//!
//! Everything here is a read-only snapshot supplied by collaborating
//! subsystems (planner, community metrics, host layout); the geometry
//! engine never mutates or persists any of it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Degrees;

/// One of the six fixed wellness dimensions positioned on the clock face.
///
/// The six-element set and its ordering ([`Category::ALL`]) are an
/// invariant depended on by every polygon and arc calculation downstream;
/// membership and position never change at runtime.
///
/// # Examples
///
/// ```
/// use hexclock_core::core::Category;
///
/// let cat: Category = "physical".parse().unwrap();
/// assert_eq!(cat, Category::Physical);
/// assert!("circadian".parse::<Category>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physical,
    Mental,
    Emotional,
    Social,
    Spiritual,
    Material,
}

impl Category {
    /// Number of categories; fixed forever.
    pub const COUNT: usize = 6;

    /// All categories in clock order, starting at 12 o'clock.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Physical,
        Category::Mental,
        Category::Emotional,
        Category::Social,
        Category::Spiritual,
        Category::Material,
    ];

    /// Stable identifier string, as used by collaborating subsystems.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Physical => "physical",
            Category::Mental => "mental",
            Category::Emotional => "emotional",
            Category::Social => "social",
            Category::Spiritual => "spiritual",
            Category::Material => "material",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Physical => "#d62728",
            Category::Mental => "#9467bd",
            Category::Emotional => "#ff7f0e",
            Category::Social => "#1f77b4",
            Category::Spiritual => "#2ca02c",
            Category::Material => "#8c564b",
        }
    }

    /// Position of this category within [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GeometryError;

    /// Parse a collaborator-supplied identifier.
    ///
    /// An unknown identifier is a programming error on the caller's side
    /// and fails fast; it is never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GeometryError::UnknownCategory(s.to_string()))
    }
}

/// Per-category completion percentages for the current period.
///
/// Values live in `[0, 100]`; anything outside that range coming from the
/// best-effort upstream fetch is clamped (with a warning), and categories
/// never supplied default to 0 so missing data cannot propagate into the
/// polygon arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionSet {
    values: [f64; Category::COUNT],
}

impl CompletionSet {
    /// All categories at 0 (an empty-looking but valid polygon).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(category, value)` pairs; missing categories stay 0.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        let mut set = Self::new();
        for (category, value) in pairs {
            set.set(category, value);
        }
        set
    }

    /// Set one category's completion value, clamping into `[0, 100]`.
    pub fn set(&mut self, category: Category, value: f64) {
        let clamped = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        if clamped != value {
            log::warn!(
                "completion value {} for '{}' outside [0, 100], clamping to {}",
                value,
                category,
                clamped
            );
        }
        self.values[category.index()] = clamped;
    }

    /// Completion value for one category, in `[0, 100]`.
    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    /// Completion as a radius scale factor in `[0, 1]`.
    pub fn fraction(&self, category: Category) -> f64 {
        self.get(category) / 100.0
    }
}

/// Lifecycle status of a scheduled or logged activity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Empty,
    Planned,
    Active,
    Completed,
    Overflowing,
}

impl BlockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockStatus::Empty => "empty",
            BlockStatus::Planned => "planned",
            BlockStatus::Active => "active",
            BlockStatus::Completed => "completed",
            BlockStatus::Overflowing => "overflowing",
        }
    }
}

/// One scheduled or logged activity, rendered as an arc at its category's
/// clock position.
///
/// Supplied by the planning collaborator as a read-only snapshot per
/// render cycle. `progress` is meaningful only while `status` is
/// [`BlockStatus::Active`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub start: NaiveTime,
    pub duration_min: i64,
    pub category: Category,
    pub status: BlockStatus,
    pub title: Option<String>,
    pub progress: Option<f64>,
}

impl TimeBlock {
    /// Clock angle of the block's start position.
    ///
    /// A 12-hour dial spans 720 minutes over 360°, so each minute advances
    /// the angle by 0.5°.
    pub fn start_angle(&self) -> Degrees {
        let hour = (self.start.hour() % 12) as f64;
        let minute = self.start.minute() as f64;
        Degrees::new(hour * 30.0 + minute * 0.5)
    }

    /// Angular span of the full (nominal) block.
    ///
    /// A zero or negative duration is expected upstream noise and yields a
    /// zero span, which downstream renders as nothing.
    pub fn span(&self) -> Degrees {
        Degrees::new(self.duration_min.max(0) as f64 * 0.5)
    }

    /// Fraction of the nominal span actually drawn, in `[0, 1]`.
    ///
    /// Completed and overflowing blocks draw their full wedge; active
    /// blocks draw up to their reported progress; planned blocks draw the
    /// full wedge (the renderer styles them differently); empty slots draw
    /// nothing.
    pub fn completion_fraction(&self) -> f64 {
        match self.status {
            BlockStatus::Completed | BlockStatus::Overflowing | BlockStatus::Planned => 1.0,
            BlockStatus::Active => self
                .progress
                .filter(|p| p.is_finite())
                .map_or(0.0, |p| p.clamp(0.0, 1.0)),
            BlockStatus::Empty => 0.0,
        }
    }
}

/// Anonymous per-category aggregate of other users who completed the same
/// category in the current period.
///
/// Used only to size and place decorative dot clusters; never attributable
/// to identities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResonanceEntry {
    pub category: Category,
    pub count: u32,
    pub has_resonance: bool,
}
