//! Shared constants for the page interaction crate.

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Per-card delay added to the reveal transition, in milliseconds.
pub const STAGGER_STEP_MS: u32 = 120;

// ── Navigation ──────────────────────────────────────────────────

/// Distance below the viewport top at which a section counts as current.
pub const SCROLL_MARGIN_PX: f64 = 100.0;

// ── Tilt ────────────────────────────────────────────────────────

/// Degrees of `rotateX` per unit of normalized vertical pointer offset.
pub const TILT_X_GAIN_DEG: f64 = 6.0;

/// Degrees of `rotateY` per unit of normalized horizontal pointer offset.
pub const TILT_Y_GAIN_DEG: f64 = 8.0;

// ── Theme ───────────────────────────────────────────────────────

/// Media query reporting a system-level light color scheme.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";
