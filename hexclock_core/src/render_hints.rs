//! Static rendering hints for the drawing layer.
//!
//! Not geometry, but the same kind of pure, input-independent
//! configuration the engine already produces, so it ships alongside the
//! bundle. Every value degrades to a no-op on platforms that ignore it;
//! none can cause an error.

use once_cell::sync::Lazy;
use serde::Serialize;

/// GPU-friendly rendering constants for the drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderHints {
    /// No-op 3D transform that forces hardware compositing.
    pub gpu_transform: &'static str,
    /// Easing curve for widget animations.
    pub easing: &'static str,
    /// Default animation duration in milliseconds.
    pub animation_duration_ms: u32,
    /// Perspective applied to composited layers.
    pub perspective: &'static str,
    /// Properties the compositor should expect to change.
    pub will_change: &'static str,
}

static RENDER_HINTS: Lazy<RenderHints> = Lazy::new(|| RenderHints {
    gpu_transform: "translateZ(0)",
    easing: "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
    animation_duration_ms: 300,
    perspective: "1000px",
    will_change: "transform, opacity",
});

/// The fixed hint bundle, computed once and shared.
pub fn render_hints() -> &'static RenderHints {
    &RENDER_HINTS
}
