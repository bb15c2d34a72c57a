//! Pointer tilt for project cards.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::{TILT_X_GAIN_DEG, TILT_Y_GAIN_DEG};

/// A card's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation around the horizontal axis.
    pub rotate_x: f64,
    /// Rotation around the vertical axis.
    pub rotate_y: f64,
}

impl Tilt {
    /// Inline `transform` for this rotation.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rotateX({}deg) rotateY({}deg) translateZ(0)", self.rotate_x, self.rotate_y)
    }
}

/// Inline `transform` value that clears a tilt.
pub const RESET_TRANSFORM: &str = "";

/// Pointer position relative to the box, each axis in `[-0.5, 0.5]` when
/// inside. Zero-sized or non-finite extents map to the center.
#[must_use]
pub fn normalized_offset(bounds: Bounds, client_x: f64, client_y: f64) -> (f64, f64) {
    (
        axis_offset(client_x, bounds.left, bounds.width),
        axis_offset(client_y, bounds.top, bounds.height),
    )
}

fn axis_offset(pos: f64, start: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    let offset = (pos - start) / extent - 0.5;
    if offset.is_finite() { offset } else { 0.0 }
}

/// Rotation for a pointer at (`client_x`, `client_y`) over `bounds`.
#[must_use]
pub fn tilt_at(bounds: Bounds, client_x: f64, client_y: f64) -> Tilt {
    let (x, y) = normalized_offset(bounds, client_x, client_y);
    // `+ 0.0` turns -0.0 into 0.0 so the centered transform reads `0deg`.
    Tilt {
        rotate_x: -y * TILT_X_GAIN_DEG + 0.0,
        rotate_y: x * TILT_Y_GAIN_DEG + 0.0,
    }
}
