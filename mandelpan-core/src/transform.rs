use crate::error::FractalError;
use serde::{Deserialize, Serialize};

/// Pending pan/zoom adjustment in screen space, accumulated from user input
/// since the last commit.
///
/// - `pan_x`, `pan_y`: offset in pixels. Positive x pans right, positive y
///   pans down, matching canvas conventions.
/// - `zoom`: cumulative multiplicative factor (1.0 = no zoom, 2.0 = 2x in).
///
/// Invariant: `zoom > 0` and finite. Accumulation rejects factors that would
/// break it, so a stored transform is always committable as far as zoom is
/// concerned.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl ViewportTransform {
    pub fn identity() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.pan_x == 0.0 && self.pan_y == 0.0 && self.zoom == 1.0
    }

    /// Add a screen-space pan offset. Pure accumulation, no recomputation.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiply the pending zoom by `factor`.
    ///
    /// `factor` must be finite and positive; otherwise the transform is left
    /// unchanged and [`FractalError::InvalidViewport`] is returned.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), FractalError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(FractalError::invalid_viewport(format!(
                "zoom factor must be finite and positive, got {factor}"
            )));
        }
        let next = self.zoom * factor;
        if !next.is_finite() || next <= 0.0 {
            return Err(FractalError::invalid_viewport(format!(
                "accumulated zoom degenerated to {next}"
            )));
        }
        self.zoom = next;
        Ok(())
    }

    /// Drop any accumulated pan/zoom.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}
