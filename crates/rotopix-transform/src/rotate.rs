//! Arbitrary-angle rotation by fixed-point inverse sampling
//!
//! Every canvas pixel is mapped back into the source under the inverse
//! rotation and takes the nearest source pixel (truncated), or the fill
//! value when it lands outside the source.
//!
//! Rotation is linear, so the source position moves by a constant
//! `(cos, -sin)` per canvas column and `(sin, cos)` per canvas row. Those
//! deltas are converted to fixed point once; the scan then only adds and
//! shifts. Trigonometry and floating point are confined to the setup.
//!
//! Positive angles turn the image clockwise on screen (y pointing down).

use crate::fixed::{DEFAULT_SCALE_BITS, FixedScale};
use crate::geometry::CanvasGeometry;
use crate::TransformResult;
use log::{debug, trace, warn};
use rotopix_core::{Raster, RasterMut, argb};

/// Background written where no source pixel maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateFill {
    /// Fully transparent ([`argb::TRANSPARENT`])
    #[default]
    Transparent,
    /// A specific ARGB value
    Color(u32),
}

impl RotateFill {
    /// Get the ARGB fill value
    pub fn to_value(self) -> u32 {
        match self {
            RotateFill::Transparent => argb::TRANSPARENT,
            RotateFill::Color(val) => val,
        }
    }
}

/// Options for rotation operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateOptions {
    /// Fixed-point fractional bits (1..=30)
    pub scale_bits: u32,
    /// Background fill
    pub fill: RotateFill,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            scale_bits: DEFAULT_SCALE_BITS,
            fill: RotateFill::Transparent,
        }
    }
}

impl RotateOptions {
    /// Create options with a specific fill
    pub fn with_fill(fill: RotateFill) -> Self {
        Self {
            fill,
            ..Default::default()
        }
    }

    /// Create options with a specific fixed-point precision
    pub fn with_scale_bits(scale_bits: u32) -> Self {
        Self {
            scale_bits,
            ..Default::default()
        }
    }

    /// Set the fill
    pub fn fill(mut self, fill: RotateFill) -> Self {
        self.fill = fill;
        self
    }

    /// Set the fixed-point precision
    pub fn scale_bits(mut self, scale_bits: u32) -> Self {
        self.scale_bits = scale_bits;
        self
    }
}

/// Rotate `source` by `radians` onto the canvas described by `geometry`.
///
/// Uses [`RotateOptions::default`]: 16 fractional bits, transparent fill.
///
/// # Errors
///
/// Returns [`TransformError::GeometryMismatch`](crate::TransformError::GeometryMismatch)
/// if `geometry` was computed for a different source size.
pub fn rotate(source: &Raster, geometry: &CanvasGeometry, radians: f64) -> TransformResult<Raster> {
    rotate_with_options(source, geometry, radians, &RotateOptions::default())
}

/// Rotate by an angle in degrees.
pub fn rotate_by_angle(
    source: &Raster,
    geometry: &CanvasGeometry,
    degrees: f64,
) -> TransformResult<Raster> {
    rotate(source, geometry, degrees.to_radians())
}

/// Rotate into a newly allocated canvas with explicit options.
///
/// # Errors
///
/// Returns an error, before allocating anything, if `geometry` does not
/// match `source` or `options.scale_bits` is out of range.
pub fn rotate_with_options(
    source: &Raster,
    geometry: &CanvasGeometry,
    radians: f64,
    options: &RotateOptions,
) -> TransformResult<Raster> {
    let scale = prepare(source, geometry, options)?;
    let fill = options.fill.to_value();
    let mut out = RasterMut::new_filled(geometry.width(), geometry.height(), fill)?;
    sample_rotated(source, geometry, radians, scale, fill, out.data_mut());
    Ok(out.into())
}

/// Rotate into a caller-provided canvas, overwriting every pixel.
///
/// Lets a caller reuse one output buffer across many angles.
///
/// # Errors
///
/// In addition to the [`rotate_with_options`] errors, returns
/// [`Error::DimensionMismatch`](rotopix_core::Error::DimensionMismatch)
/// (wrapped) if `dst` is not canvas-sized. `dst` is untouched on error.
pub fn rotate_into(
    source: &Raster,
    geometry: &CanvasGeometry,
    radians: f64,
    options: &RotateOptions,
    dst: &mut RasterMut,
) -> TransformResult<()> {
    let scale = prepare(source, geometry, options)?;
    dst.check_size(geometry.width(), geometry.height())?;
    sample_rotated(
        source,
        geometry,
        radians,
        scale,
        options.fill.to_value(),
        dst.data_mut(),
    );
    Ok(())
}

fn prepare(
    source: &Raster,
    geometry: &CanvasGeometry,
    options: &RotateOptions,
) -> TransformResult<FixedScale> {
    geometry.check_source(source)?;
    FixedScale::new(options.scale_bits)
}

/// The sampling scan. `out` must hold `geometry.width() * geometry.height()` pixels.
fn sample_rotated(
    source: &Raster,
    geometry: &CanvasGeometry,
    radians: f64,
    scale: FixedScale,
    fill: u32,
    out: &mut [u32],
) {
    if !radians.is_finite() {
        warn!("rotate: non-finite angle {radians}, output is undefined");
    }
    debug!(
        "rotate: {}x{} -> {}x{}, angle={radians}, scale_bits={}",
        source.width(),
        source.height(),
        geometry.width(),
        geometry.height(),
        scale.bits()
    );

    let w = i64::from(source.width());
    let h = i64::from(source.height());
    let pixels = source.data();

    let (sin_t, cos_t) = radians.sin_cos();
    let min_x = geometry.min_x() as f64;
    let min_y = geometry.min_y() as f64;

    // Source position of the canvas top-left under the inverse rotation
    let x_start = min_y * sin_t + min_x * cos_t + 0.5 + (w / 2) as f64;
    let y_start = min_y * cos_t - min_x * sin_t + 0.5 + (h / 2) as f64;

    let mut row_x = scale.to_fixed(x_start);
    let mut row_y = scale.to_fixed(y_start);
    let sin_f = scale.to_fixed(sin_t);
    let cos_f = scale.to_fixed(cos_t);
    trace!("rotate: start=({row_x}, {row_y}) step=(cos {cos_f}, sin {sin_f})");

    // Last in-bounds lookup; consecutive columns often hit the same pixel
    let mut cached: Option<(i64, i64, u32)> = None;

    for row in out.chunks_exact_mut(geometry.width() as usize) {
        let mut cur_x = row_x;
        let mut cur_y = row_y;
        for px in row.iter_mut() {
            let sx = scale.to_pixel(cur_x);
            let sy = scale.to_pixel(cur_y);
            *px = if sx >= 0 && sx < w && sy >= 0 && sy < h {
                match cached {
                    Some((cx, cy, val)) if cx == sx && cy == sy => val,
                    _ => {
                        let val = pixels[(sx + sy * w) as usize];
                        cached = Some((sx, sy, val));
                        val
                    }
                }
            } else {
                fill
            };
            cur_x += cos_f;
            cur_y -= sin_f;
        }
        row_x += sin_f;
        row_y += cos_f;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransformError, compute_geometry};
    use rotopix_core::Error;
    use std::f64::consts::{FRAC_PI_2, PI};

    const RED: u32 = 0xFFFF_0000;

    fn pattern(w: u32, h: u32) -> Raster {
        let pixels = (0..w * h).map(|i| 0xFF00_0000 | i).collect();
        Raster::from_pixels(w, h, pixels).unwrap()
    }

    #[test_log::test]
    fn test_red_square_angle_zero() {
        let src = Raster::new_filled(4, 4, RED).unwrap();
        let g = compute_geometry(4, 4).unwrap();
        let out = rotate(&src, &g, 0.0).unwrap();

        assert_eq!((out.width(), out.height()), (6, 6));
        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..=4).contains(&x) && (1..=4).contains(&y);
                let expected = if inside { RED } else { argb::TRANSPARENT };
                assert_eq!(out.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test_log::test]
    fn test_angle_zero_copies_source() {
        // The first in-bounds sample is source (0, 0) right after a run of
        // out-of-bounds columns; it must not be mistaken for a cached value.
        let src = pattern(7, 5);
        let g = compute_geometry(7, 5).unwrap();
        let out = rotate(&src, &g, 0.0).unwrap();
        let (ox, oy) = g.source_offset();

        for y in 0..out.height() {
            for x in 0..out.width() {
                let expected = if x >= ox && x < ox + 7 && y >= oy && y < oy + 5 {
                    src.get_pixel_unchecked(x - ox, y - oy)
                } else {
                    argb::TRANSPARENT
                };
                assert_eq!(out.get_pixel_unchecked(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_quarter_turn_is_clockwise() {
        let src = pattern(4, 4);
        let g = compute_geometry(4, 4).unwrap();
        let out = rotate(&src, &g, FRAC_PI_2).unwrap();

        // Source top-left ends up at the top-right of the footprint
        assert_eq!(out.get_pixel(5, 1), src.get_pixel(0, 0));
        assert_eq!(out.get_pixel(5, 4), src.get_pixel(3, 0));
        assert_eq!(out.get_pixel(2, 1), src.get_pixel(0, 3));
        assert_eq!(out.get_pixel(2, 4), src.get_pixel(3, 3));
    }

    #[test]
    fn test_single_pixel_source() {
        let src = Raster::new_filled(1, 1, RED).unwrap();
        let g = compute_geometry(1, 1).unwrap();
        for angle in [0.0, 0.3, FRAC_PI_2, PI, -2.0] {
            let out = rotate(&src, &g, angle).unwrap();
            assert_eq!((out.width(), out.height()), (2, 2));
            assert!(
                out.data()
                    .iter()
                    .all(|&p| p == RED || p == argb::TRANSPARENT)
            );
        }
        let out = rotate(&src, &g, 0.0).unwrap();
        assert_eq!(out.data(), &[argb::TRANSPARENT, argb::TRANSPARENT, argb::TRANSPARENT, RED]);
    }

    #[test]
    fn test_geometry_mismatch() {
        let src = Raster::new(4, 4).unwrap();
        let g = compute_geometry(4, 5).unwrap();
        assert!(matches!(
            rotate(&src, &g, 0.5),
            Err(TransformError::GeometryMismatch {
                geometry: (4, 5),
                raster: (4, 4)
            })
        ));
    }

    #[test]
    fn test_custom_fill() {
        let src = Raster::new_filled(2, 2, RED).unwrap();
        let g = compute_geometry(2, 2).unwrap();
        let opts = RotateOptions::with_fill(RotateFill::Color(0xFF00_00FF));
        let out = rotate_with_options(&src, &g, 0.0, &opts).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(0xFF00_00FF));
        assert_eq!(out.get_pixel(1, 1), Some(RED));
        assert!(!out.data().contains(&argb::TRANSPARENT));
    }

    #[test]
    fn test_invalid_scale_bits() {
        let src = Raster::new(2, 2).unwrap();
        let g = compute_geometry(2, 2).unwrap();
        for bits in [0, 31, 64] {
            let opts = RotateOptions::with_scale_bits(bits);
            assert!(matches!(
                rotate_with_options(&src, &g, 0.1, &opts),
                Err(TransformError::InvalidParameters(_))
            ));
        }
    }

    #[test]
    fn test_scale_bits_agree_at_zero() {
        let src = pattern(9, 6);
        let g = compute_geometry(9, 6).unwrap();
        let reference = rotate(&src, &g, 0.0).unwrap();
        for bits in [4, 8, 24, 30] {
            let opts = RotateOptions::default().scale_bits(bits);
            let out = rotate_with_options(&src, &g, 0.0, &opts).unwrap();
            assert!(out.equals(&reference), "scale_bits={bits}");
        }
    }

    #[test]
    fn test_rotate_into_matches_rotate() {
        let src = pattern(8, 3);
        let g = compute_geometry(8, 3).unwrap();
        let opts = RotateOptions::default();
        let mut dst = RasterMut::new_filled(g.width(), g.height(), 0x1234_5678).unwrap();

        for angle in [0.0, 0.4, 2.5, -1.1] {
            rotate_into(&src, &g, angle, &opts, &mut dst).unwrap();
            let expected = rotate(&src, &g, angle).unwrap();
            assert_eq!(dst.data(), expected.data(), "angle {angle}");
        }
    }

    #[test]
    fn test_rotate_into_wrong_size() {
        let src = Raster::new(4, 4).unwrap();
        let g = compute_geometry(4, 4).unwrap();
        let mut dst = RasterMut::new_filled(4, 4, 7).unwrap();
        let err = rotate_into(&src, &g, 0.0, &RotateOptions::default(), &mut dst).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Core(Error::DimensionMismatch {
                expected: (6, 6),
                actual: (4, 4)
            })
        ));
        assert!(dst.data().iter().all(|&p| p == 7));
    }

    #[test]
    fn test_rotate_by_angle_degrees() {
        let src = pattern(5, 3);
        let g = compute_geometry(5, 3).unwrap();
        let by_deg = rotate_by_angle(&src, &g, 90.0).unwrap();
        let by_rad = rotate(&src, &g, FRAC_PI_2).unwrap();
        assert!(by_deg.equals(&by_rad));
    }

    #[test_log::test]
    fn test_non_finite_angle_does_not_panic() {
        let src = pattern(3, 3);
        let g = compute_geometry(3, 3).unwrap();
        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let out = rotate(&src, &g, angle).unwrap();
            assert_eq!((out.width(), out.height()), (g.width(), g.height()));
        }
    }

    #[test]
    fn test_source_is_not_modified() {
        let src = pattern(6, 4);
        let before = src.deep_clone();
        let g = compute_geometry(6, 4).unwrap();
        let _ = rotate(&src, &g, 1.0).unwrap();
        assert!(src.equals(&before));
    }

    #[test]
    fn test_options_builders() {
        let opts = RotateOptions::with_scale_bits(20).fill(RotateFill::Color(1));
        assert_eq!(opts.scale_bits, 20);
        assert_eq!(opts.fill.to_value(), 1);

        let opts = RotateOptions::with_fill(RotateFill::Color(2)).scale_bits(12);
        assert_eq!((opts.scale_bits, opts.fill), (12, RotateFill::Color(2)));

        assert_eq!(RotateFill::default().to_value(), argb::TRANSPARENT);
    }
}
