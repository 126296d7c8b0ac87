//! rotopix-transform - Fixed-point raster rotation
//!
//! Rotation is split into a one-time setup and a repeatable sampling pass:
//!
//! - [`compute_geometry`] sizes a square canvas that holds the source at
//!   any angle and fixes its coordinate bounds
//! - [`rotate`] inverse-maps every canvas pixel into the source with
//!   fixed-point forward differences: the inner loop is additions and
//!   shifts only
//! - [`RotatableRaster`] keeps a source and its geometry together for
//!   repeated rotations
//!
//! # Example
//!
//! ```
//! use rotopix_core::{Raster, argb};
//! use rotopix_transform::{compute_geometry, rotate};
//!
//! let src = Raster::new_filled(4, 4, 0xFFFF_0000).unwrap();
//! let geometry = compute_geometry(src.width(), src.height()).unwrap();
//! let rotated = rotate(&src, &geometry, 0.0).unwrap();
//!
//! assert_eq!(rotated.width(), 6);
//! assert_eq!(rotated.get_pixel(0, 0), Some(argb::TRANSPARENT));
//! assert_eq!(rotated.get_pixel(1, 1), Some(0xFFFF_0000));
//! ```

mod error;
pub mod fixed;
pub mod geometry;
pub mod rotatable;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use fixed::{DEFAULT_SCALE_BITS, FixedScale, MAX_SCALE_BITS};
pub use geometry::{CanvasGeometry, compute_geometry};
pub use rotatable::RotatableRaster;
pub use rotate::{
    RotateFill, RotateOptions, rotate, rotate_by_angle, rotate_into, rotate_with_options,
};
