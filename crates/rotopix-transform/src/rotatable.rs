//! A source raster paired with its rotation geometry
//!
//! [`RotatableRaster`] computes the canvas once at construction and then
//! serves any number of rotations. It holds no mutable state, so a single
//! instance can be shared by reference across threads.

use crate::geometry::CanvasGeometry;
use crate::rotate::{RotateOptions, rotate_into, rotate_with_options};
use crate::{FixedScale, TransformResult};
use rotopix_core::{Raster, RasterMut};

/// A source raster ready to be rotated by any angle.
///
/// # Examples
///
/// ```
/// use rotopix_core::Raster;
/// use rotopix_transform::RotatableRaster;
///
/// let icon = RotatableRaster::new(Raster::new_filled(16, 16, 0xFF00_FF00).unwrap()).unwrap();
/// let mut canvas = icon.canvas().unwrap();
/// for step in 0..8 {
///     icon.rotate_into(step as f64 * std::f64::consts::FRAC_PI_4, &mut canvas).unwrap();
/// }
/// assert_eq!(canvas.width(), icon.geometry().width());
/// ```
#[derive(Debug, Clone)]
pub struct RotatableRaster {
    source: Raster,
    geometry: CanvasGeometry,
    options: RotateOptions,
}

impl RotatableRaster {
    /// Wrap `source` with default options.
    pub fn new(source: Raster) -> TransformResult<Self> {
        let geometry = CanvasGeometry::for_raster(&source)?;
        Ok(Self {
            source,
            geometry,
            options: RotateOptions::default(),
        })
    }

    /// Replace the rotation options.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`](crate::TransformError::InvalidParameters)
    /// if `options.scale_bits` is out of range.
    pub fn with_options(mut self, options: RotateOptions) -> TransformResult<Self> {
        FixedScale::new(options.scale_bits)?;
        self.options = options;
        Ok(self)
    }

    /// The unrotated source.
    pub fn source(&self) -> &Raster {
        &self.source
    }

    /// The canvas geometry shared by every rotation.
    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// The options applied to every rotation.
    pub fn options(&self) -> &RotateOptions {
        &self.options
    }

    /// Rotate by `radians` into a new canvas-sized raster.
    pub fn rotated(&self, radians: f64) -> TransformResult<Raster> {
        rotate_with_options(&self.source, &self.geometry, radians, &self.options)
    }

    /// Rotate by an angle in degrees.
    pub fn rotated_degrees(&self, degrees: f64) -> TransformResult<Raster> {
        self.rotated(degrees.to_radians())
    }

    /// Rotate by `radians`, overwriting `dst`.
    ///
    /// `dst` must be canvas-sized; [`canvas`](Self::canvas) creates one.
    pub fn rotate_into(&self, radians: f64, dst: &mut RasterMut) -> TransformResult<()> {
        rotate_into(&self.source, &self.geometry, radians, &self.options, dst)
    }

    /// Allocate a canvas-sized raster initialised to the fill value.
    pub fn canvas(&self) -> TransformResult<RasterMut> {
        Ok(RasterMut::new_filled(
            self.geometry.width(),
            self.geometry.height(),
            self.options.fill.to_value(),
        )?)
    }
}
