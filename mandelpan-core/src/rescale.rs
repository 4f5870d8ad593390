use crate::error::FractalError;

/// Linearly rescale `value` from the range `[src_min, src_max]` into
/// `[dst_min, dst_max]`.
///
/// The mapping is affine and deliberately unclamped: values outside the
/// source range extrapolate linearly. Bounds recalculation relies on this
/// when a zoomed-out screen window extends past the previous plane window.
///
/// Fails with [`FractalError::DegenerateRange`] when the source range is
/// empty (`src_min == src_max`).
pub fn rescale(
    value: f64,
    src_min: f64,
    src_max: f64,
    dst_min: f64,
    dst_max: f64,
) -> Result<f64, FractalError> {
    if src_min == src_max {
        return Err(FractalError::DegenerateRange { value: src_min });
    }

    let normalized = (value - src_min) / (src_max - src_min);
    Ok((dst_max - dst_min) * normalized + dst_min)
}
