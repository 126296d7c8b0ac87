//! Canvas geometry for rotation
//!
//! The rotated output lives on a square canvas whose side is the source
//! diagonal, rounded up to an even number of pixels. A source rotated about
//! its center by any angle stays inside the circle circumscribing it, so
//! nothing is ever clipped. An even side keeps the canvas center on a pixel
//! boundary, which puts the origin of the centered coordinate system at
//! `(width / 2, height / 2)`.

use crate::{TransformError, TransformResult};
use log::debug;
use rotopix_core::{Error, Raster};

/// Output canvas size and centered coordinate bounds for one source size.
///
/// Computed once per source by [`compute_geometry`] and reused for every
/// rotation of that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasGeometry {
    source_width: u32,
    source_height: u32,
    /// Canvas side; the canvas is always square and this is always even
    size: u32,
}

/// Compute the rotation canvas for a `width` x `height` source.
///
/// The canvas side is the smallest even integer that is at least
/// `sqrt(width² + height²)`, evaluated exactly in integer arithmetic.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] (wrapped) if either dimension is 0,
/// or [`TransformError::CanvasTooLarge`] if the side overflows `u32`.
pub fn compute_geometry(width: u32, height: u32) -> TransformResult<CanvasGeometry> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height }.into());
    }

    let diag_sq = u128::from(width).pow(2) + u128::from(height).pow(2);
    let mut diag = diag_sq.isqrt();
    if diag * diag < diag_sq {
        diag += 1;
    }
    let size = diag + (diag & 1);
    let size =
        u32::try_from(size).map_err(|_| TransformError::CanvasTooLarge { width, height })?;

    debug!("geometry: {width}x{height} source -> {size}x{size} canvas");

    Ok(CanvasGeometry {
        source_width: width,
        source_height: height,
        size,
    })
}

impl CanvasGeometry {
    /// Compute the geometry for an existing raster.
    pub fn for_raster(raster: &Raster) -> TransformResult<Self> {
        compute_geometry(raster.width(), raster.height())
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size
    }

    /// Canvas height in pixels (equal to the width).
    #[inline]
    pub fn height(&self) -> u32 {
        self.size
    }

    /// Width of the source this geometry was computed for.
    #[inline]
    pub fn source_width(&self) -> u32 {
        self.source_width
    }

    /// Height of the source this geometry was computed for.
    #[inline]
    pub fn source_height(&self) -> u32 {
        self.source_height
    }

    /// Leftmost canvas x coordinate, with the canvas center at 0.
    #[inline]
    pub fn min_x(&self) -> i64 {
        -self.max_x()
    }

    /// Rightmost canvas x bound, with the canvas center at 0.
    #[inline]
    pub fn max_x(&self) -> i64 {
        i64::from(self.size / 2)
    }

    /// Topmost canvas y coordinate, with the canvas center at 0.
    #[inline]
    pub fn min_y(&self) -> i64 {
        -self.max_y()
    }

    /// Bottom canvas y bound, with the canvas center at 0.
    #[inline]
    pub fn max_y(&self) -> i64 {
        i64::from(self.size / 2)
    }

    /// Canvas position of the source's top-left pixel at angle 0.
    pub fn source_offset(&self) -> (u32, u32) {
        (
            self.size / 2 - self.source_width / 2,
            self.size / 2 - self.source_height / 2,
        )
    }

    /// Check whether this geometry was computed for `raster`'s size.
    pub fn matches(&self, raster: &Raster) -> bool {
        self.source_width == raster.width() && self.source_height == raster.height()
    }

    /// Reject a raster of a different size than this geometry was computed for.
    pub(crate) fn check_source(&self, raster: &Raster) -> TransformResult<()> {
        if !self.matches(raster) {
            return Err(TransformError::GeometryMismatch {
                geometry: (self.source_width, self.source_height),
                raster: (raster.width(), raster.height()),
            });
        }
        Ok(())
    }
}
