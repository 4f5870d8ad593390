use std::time::Instant;

use crate::config::EngineConfig;
use crate::palette::Palette;
use mandelpan_core::{rescale, FractalError, PixelBuffer, PlaneBounds, Rgb, ViewportTransform};

/// Escape-time Mandelbrot engine over a pannable/zoomable plane window.
///
/// The engine owns the current plane bounds, the pending screen-space
/// transform, and the rendered buffer. Interaction follows a two-phase
/// protocol: `accumulate_pan`/`accumulate_zoom` are pure state updates at
/// input cadence, and `request_commit` folds the accumulated transform into
/// new bounds and re-renders. Between commits the host keeps blitting the
/// cached buffer (transformed on its side), so input stays responsive while
/// recomputation happens only on demand.
///
/// Per-pixel computation has no shared mutable state and no ordering
/// dependency, so a host could split rows across threads; this engine keeps
/// the single-pass sequential loop and must be driven from one thread at a
/// time.
pub struct FractalEngine {
    config: EngineConfig,
    palette: Palette,
    bounds: PlaneBounds,
    transform: ViewportTransform,
    canvas_width: u32,
    canvas_height: u32,
    buffer: PixelBuffer,
}

impl FractalEngine {
    /// Engine over the classic full-set window `[-2.5, 1.0] x [-1.0, 1.0]`.
    pub fn new(
        config: EngineConfig,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, FractalError> {
        Self::with_bounds(config, canvas_width, canvas_height, PlaneBounds::default())
    }

    /// Engine over an explicit initial window.
    ///
    /// The buffer starts black at the logical resolution; call [`render`]
    /// (or commit a transform) to populate it.
    ///
    /// [`render`]: FractalEngine::render
    pub fn with_bounds(
        config: EngineConfig,
        canvas_width: u32,
        canvas_height: u32,
        bounds: PlaneBounds,
    ) -> Result<Self, FractalError> {
        config.validate()?;
        bounds.validate()?;

        let palette = Palette::default();
        let width = canvas_width / config.downsample_factor;
        let height = canvas_height / config.downsample_factor;
        let buffer = PixelBuffer::new(width, height, palette.interior());

        Ok(Self {
            config,
            palette,
            bounds,
            transform: ViewportTransform::identity(),
            canvas_width,
            canvas_height,
            buffer,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    pub fn pending_transform(&self) -> ViewportTransform {
        self.transform
    }

    /// Current frame at logical resolution, complete at all times. The host
    /// expands each sample to a `downsample_factor`-sided block when
    /// blitting (see [`PixelBuffer::to_rgba`]).
    pub fn frame_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Logical buffer dimensions: canvas size over the downsample factor.
    pub fn buffer_dimensions(&self) -> (u32, u32) {
        (
            self.canvas_width / self.config.downsample_factor,
            self.canvas_height / self.config.downsample_factor,
        )
    }

    /// Add a screen-space pan offset to the pending transform.
    pub fn accumulate_pan(&mut self, dx: f64, dy: f64) {
        self.transform.pan(dx, dy);
    }

    /// Multiply the pending zoom. Rejects non-positive or non-finite
    /// factors, leaving the pending transform unchanged.
    pub fn accumulate_zoom(&mut self, factor: f64) -> Result<(), FractalError> {
        self.transform.zoom_by(factor)
    }

    /// Replace the pending transform wholesale, e.g. when restoring a
    /// persisted session. Not validated here; a bad zoom is caught at
    /// commit time.
    pub fn set_pending_transform(&mut self, transform: ViewportTransform) {
        self.transform = transform;
    }

    /// Drop the pending transform, keeping the current bounds and buffer.
    /// This is the recovery path after a failed commit.
    pub fn discard_transform(&mut self) {
        self.transform.reset();
    }

    /// Escape-time for one logical pixel under the current bounds.
    ///
    /// Maps `(px, py)` over `[0, buffer_dim)` into plane coordinates, then
    /// iterates `z <- z^power + c` from `z = 0` until the orbit leaves the
    /// escape radius or the iteration cap is reached. A result equal to
    /// `max_iterations` marks the point as interior.
    pub fn escape_iterations(&self, px: u32, py: u32) -> Result<u32, FractalError> {
        let (width, height) = self.buffer_dimensions();
        let x0 = rescale(px as f64, 0.0, width as f64, self.bounds.xl, self.bounds.xr)?;
        let y0 = rescale(py as f64, 0.0, height as f64, self.bounds.yl, self.bounds.yr)?;
        Ok(self.escape_iterations_at(x0, y0))
    }

    /// Escape-time for an explicit plane point.
    pub fn escape_iterations_at(&self, cx: f64, cy: f64) -> u32 {
        let escape_radius_sq = self.config.escape_radius * self.config.escape_radius;
        let mut zx = 0.0_f64;
        let mut zy = 0.0_f64;

        for i in 0..self.config.max_iterations {
            if zx * zx + zy * zy > escape_radius_sq {
                return i;
            }

            let (new_zx, new_zy) = if self.config.power == 2 {
                // z^2 + c in real/imaginary parts.
                (zx * zx - zy * zy + cx, 2.0 * zx * zy + cy)
            } else {
                let (wx, wy) = complex_pow(zx, zy, self.config.power);
                (wx + cx, wy + cy)
            };
            zx = new_zx;
            zy = new_zy;
        }

        self.config.max_iterations
    }

    /// Palette lookup for an escape-time result. Interior (`count ==
    /// max_iterations`) is the reserved interior color; exterior counts
    /// cycle through the sixteen palette entries.
    pub fn color_for(&self, iterations: u32) -> Rgb {
        self.palette.color_for(iterations, self.config.max_iterations)
    }

    /// Recompute the full buffer under the current bounds.
    ///
    /// A fresh buffer is populated completely before it replaces the old
    /// one, so the host never observes a partially drawn frame; any failure
    /// before the swap leaves the previous buffer intact.
    pub fn render(&mut self) -> Result<(), FractalError> {
        let (width, height) = self.buffer_dimensions();
        let started = Instant::now();

        let mut next = PixelBuffer::new(width, height, self.palette.interior());
        for y in 0..height {
            for x in 0..width {
                let iterations = self.escape_iterations(x, y)?;
                next.set(x, y, self.color_for(iterations));
            }
        }
        self.buffer = next;

        log::debug!(
            "rendered {}x{} buffer in {:?} (bounds [{}, {}] x [{}, {}])",
            width,
            height,
            started.elapsed(),
            self.bounds.xl,
            self.bounds.xr,
            self.bounds.yl,
            self.bounds.yr,
        );
        Ok(())
    }

    /// Fold the accumulated pan/zoom into new plane bounds, reset the
    /// transform to identity, and re-render.
    ///
    /// The scaled screen window is re-centered by the pan offset, its four
    /// edges are mapped back into the plane through `rescale`, and the
    /// mapped edges become the new bounds. Every edge maps against the
    /// bounds captured before any mutation, so the commit either fully
    /// replaces the bounds or leaves them untouched.
    ///
    /// Fails with [`FractalError::InvalidViewport`] if the pending zoom is
    /// not positive or the derived bounds would be non-monotonic; on any
    /// failure the prior bounds, transform, and buffer are all unchanged.
    pub fn request_commit(&mut self) -> Result<(), FractalError> {
        let transform = self.transform;
        if !transform.zoom.is_finite() || transform.zoom <= 0.0 {
            return Err(FractalError::invalid_viewport(format!(
                "cannot commit zoom {}",
                transform.zoom
            )));
        }

        let canvas_w = self.canvas_width as f64;
        let canvas_h = self.canvas_height as f64;

        let s = 1.0 / transform.zoom;
        let scaled_w = s * canvas_w;
        let scaled_h = s * canvas_h;

        // Screen-space center after pan.
        let center_x = canvas_w / 2.0 - transform.pan_x;
        let center_y = canvas_h / 2.0 - transform.pan_y;

        let left = center_x - scaled_w / 2.0;
        let right = center_x + scaled_w / 2.0;
        let top = center_y - scaled_h / 2.0;
        let bottom = center_y + scaled_h / 2.0;

        let old = self.bounds;
        let new_bounds = PlaneBounds::new(
            rescale(left, 0.0, canvas_w, old.xl, old.xr)?,
            rescale(right, 0.0, canvas_w, old.xl, old.xr)?,
            rescale(top, 0.0, canvas_h, old.yl, old.yr)?,
            rescale(bottom, 0.0, canvas_h, old.yl, old.yr)?,
        )?;

        self.bounds = new_bounds;
        self.transform.reset();
        log::debug!(
            "committed viewport: zoom {} pan ({}, {}) -> bounds [{}, {}] x [{}, {}]",
            transform.zoom,
            transform.pan_x,
            transform.pan_y,
            new_bounds.xl,
            new_bounds.xr,
            new_bounds.yl,
            new_bounds.yr,
        );

        self.render()
    }
}

/// Integer complex power by repeated multiplication, `power >= 1`.
fn complex_pow(zx: f64, zy: f64, power: u32) -> (f64, f64) {
    let mut wx = zx;
    let mut wy = zy;
    for _ in 1..power {
        let next_x = wx * zx - wy * zy;
        let next_y = wx * zy + wy * zx;
        wx = next_x;
        wy = next_y;
    }
    (wx, wy)
}
