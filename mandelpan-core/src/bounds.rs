use crate::error::FractalError;
use serde::{Deserialize, Serialize};

/// Rectangular region of the complex plane currently mapped onto the pixel
/// buffer.
///
/// Invariant: `xl < xr` and `yl < yr`, all four values finite. Construction
/// validates this; a degenerate or inverted rectangle is rejected rather than
/// silently producing a mirrored render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneBounds {
    pub xl: f64,
    pub xr: f64,
    pub yl: f64,
    pub yr: f64,
}

impl PlaneBounds {
    pub fn new(xl: f64, xr: f64, yl: f64, yr: f64) -> Result<Self, FractalError> {
        let bounds = Self { xl, xr, yl, yr };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the monotonicity and finiteness invariants.
    pub fn validate(&self) -> Result<(), FractalError> {
        let values = [self.xl, self.xr, self.yl, self.yr];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FractalError::invalid_viewport("non-finite plane bound"));
        }
        if self.xl >= self.xr {
            return Err(FractalError::invalid_viewport(format!(
                "x bounds not increasing: {} >= {}",
                self.xl, self.xr
            )));
        }
        if self.yl >= self.yr {
            return Err(FractalError::invalid_viewport(format!(
                "y bounds not increasing: {} >= {}",
                self.yl, self.yr
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.xr - self.xl
    }

    pub fn height(&self) -> f64 {
        self.yr - self.yl
    }

    /// Center point of the visible window in plane coordinates.
    pub fn center(&self) -> (f64, f64) {
        ((self.xl + self.xr) / 2.0, (self.yl + self.yr) / 2.0)
    }
}

impl Default for PlaneBounds {
    /// The classic full-set window.
    fn default() -> Self {
        Self {
            xl: -2.5,
            xr: 1.0,
            yl: -1.0,
            yr: 1.0,
        }
    }
}
