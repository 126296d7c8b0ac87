//! rotopix - Fast fixed-point rotation of ARGB rasters
//!
//! Rotates a packed 32-bit ARGB raster by any angle onto a square canvas
//! large enough to hold every rotation of the source. The per-pixel scan
//! uses integer arithmetic only, which makes it suitable for animating
//! sprites and icons through many angles.
//!
//! # Overview
//!
//! - [`Raster`] / [`RasterMut`] - the pixel containers
//! - [`transform::compute_geometry`] - canvas size for a source size
//! - [`transform::rotate`] and friends - one-shot rotation
//! - [`transform::RotatableRaster`] - a source bound to its canvas, shareable
//!   across threads
//!
//! # Example
//!
//! ```
//! use rotopix::{Raster, argb};
//! use rotopix::transform::{compute_geometry, rotate};
//!
//! let red = Raster::new_filled(4, 4, 0xFFFF_0000).unwrap();
//! let geometry = compute_geometry(4, 4).unwrap();
//! let out = rotate(&red, &geometry, 0.0).unwrap();
//!
//! assert_eq!((out.width(), out.height()), (6, 6));
//! assert_eq!(out.get_pixel(0, 0), Some(argb::TRANSPARENT));
//! assert_eq!(out.get_pixel(1, 1), Some(0xFFFF_0000));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rotopix_core::*;

// Re-export the rotation crate as a module
pub use rotopix_transform as transform;
