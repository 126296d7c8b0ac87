//! rotopix-test - Regression test framework for rotopix
//!
//! This crate provides the bookkeeping used by the `*_reg` integration
//! tests: a [`RegParams`] that numbers and records every comparison, and a
//! handful of raster fixtures and inspection helpers.
//!
//! # Usage
//!
//! ```ignore
//! use rotopix_test::{RegParams, pattern_raster};
//!
//! let mut rp = RegParams::new("rotate");
//! let pixs = pattern_raster(4, 4).expect("fixture");
//! rp.compare_values(4.0, pixs.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{Footprint, find_pixel, footprint, pattern_raster, point_reflect, solid_raster};
pub use params::RegParams;
