use mandelpan_core::{rescale, FractalError, PlaneBounds};

const EPSILON: f64 = 1e-12;

// ============================================================================
// Pixel -> plane mapping over the classic window
// ============================================================================

#[test]
fn leftmost_pixel_maps_to_left_bound() {
    let bounds = PlaneBounds::default();
    let x0 = rescale(0.0, 0.0, 400.0, bounds.xl, bounds.xr).unwrap();
    assert!((x0 - bounds.xl).abs() < EPSILON);
}

#[test]
fn buffer_center_maps_to_window_center() {
    let bounds = PlaneBounds::default();
    let x0 = rescale(200.0, 0.0, 400.0, bounds.xl, bounds.xr).unwrap();
    let y0 = rescale(150.0, 0.0, 300.0, bounds.yl, bounds.yr).unwrap();
    let (cx, cy) = bounds.center();
    assert!((x0 - cx).abs() < EPSILON);
    assert!((y0 - cy).abs() < EPSILON);
}

#[test]
fn mapping_is_independent_of_buffer_resolution() {
    // The same relative pixel position lands on the same plane point.
    let bounds = PlaneBounds::default();
    let coarse = rescale(100.0, 0.0, 400.0, bounds.xl, bounds.xr).unwrap();
    let fine = rescale(200.0, 0.0, 800.0, bounds.xl, bounds.xr).unwrap();
    assert!((coarse - fine).abs() < EPSILON);
}

// ============================================================================
// Affine round trip
// ============================================================================

#[test]
fn plane_to_pixel_inverts_pixel_to_plane() {
    let bounds = PlaneBounds::default();
    for px in [0.0, 1.0, 57.0, 399.0, 400.0, 1000.0, -40.0] {
        let plane = rescale(px, 0.0, 400.0, bounds.xl, bounds.xr).unwrap();
        let back = rescale(plane, bounds.xl, bounds.xr, 0.0, 400.0).unwrap();
        assert!(
            (back - px).abs() < 1e-9,
            "round trip drifted for pixel {px}: got {back}"
        );
    }
}

// ============================================================================
// Window-edge remapping (the commit primitive)
// ============================================================================

#[test]
fn half_window_edges_map_to_a_half_width_plane_window() {
    // A 2x zoom leaves screen edges at 1/4 and 3/4 of the canvas; mapping
    // them through the old bounds yields a window of half the plane width.
    let bounds = PlaneBounds::default();
    let new_xl = rescale(200.0, 0.0, 800.0, bounds.xl, bounds.xr).unwrap();
    let new_xr = rescale(600.0, 0.0, 800.0, bounds.xl, bounds.xr).unwrap();
    assert!((new_xr - new_xl - bounds.width() / 2.0).abs() < EPSILON);
}

#[test]
fn edges_beyond_the_canvas_extrapolate() {
    // Zooming out pushes screen edges outside [0, canvas]; the unclamped
    // mapping must extend the plane window accordingly.
    let bounds = PlaneBounds::default();
    let new_xl = rescale(-400.0, 0.0, 800.0, bounds.xl, bounds.xr).unwrap();
    assert!(new_xl < bounds.xl);
    assert!((new_xl - (bounds.xl - bounds.width() / 2.0)).abs() < EPSILON);
}

#[test]
fn degenerate_canvas_dimension_is_an_error() {
    let bounds = PlaneBounds::default();
    let err = rescale(10.0, 0.0, 0.0, bounds.xl, bounds.xr).unwrap_err();
    assert!(matches!(err, FractalError::DegenerateRange { .. }));
}
