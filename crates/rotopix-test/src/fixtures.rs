//! Raster fixtures and inspection helpers

use crate::error::{TestError, TestResult};
use rotopix_core::{Raster, RasterMut};

/// Largest side supported by [`pattern_raster`].
const PATTERN_MAX_SIDE: u32 = 1 << 12;

/// Create an opaque raster in which every pixel is unique.
///
/// The pixel at (x, y) is `0xFF00_0000 | y << 12 | x`, so a sampled value
/// identifies its source coordinate.
pub fn pattern_raster(width: u32, height: u32) -> TestResult<Raster> {
    if width > PATTERN_MAX_SIDE || height > PATTERN_MAX_SIDE {
        return Err(TestError::Fixture(format!(
            "pattern raster {width}x{height} exceeds {PATTERN_MAX_SIDE} per side"
        )));
    }
    let mut raster = RasterMut::new_filled(width, height, 0)?;
    for y in 0..height {
        for (x, px) in raster.row_data_mut(y).iter_mut().enumerate() {
            *px = 0xFF00_0000 | (y << 12) | x as u32;
        }
    }
    Ok(raster.into())
}

/// Create a raster with every pixel set to `value`.
pub fn solid_raster(width: u32, height: u32, value: u32) -> TestResult<Raster> {
    Ok(Raster::new_filled(width, height, value)?)
}

/// Bounding box of the pixels that differ from a fill value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    /// Number of non-fill pixels
    pub count: usize,
}

impl Footprint {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Compute the footprint of `raster` against `fill`.
///
/// Returns `None` if every pixel equals `fill`.
pub fn footprint(raster: &Raster, fill: u32) -> Option<Footprint> {
    let mut fp: Option<Footprint> = None;
    for y in 0..raster.height() {
        for (x, &px) in raster.row_data(y).iter().enumerate() {
            if px == fill {
                continue;
            }
            let x = x as u32;
            let f = fp.get_or_insert(Footprint {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                count: 0,
            });
            f.min_x = f.min_x.min(x);
            f.max_x = f.max_x.max(x);
            f.max_y = y;
            f.count += 1;
        }
    }
    fp
}

/// Find the first (row-major) location holding `value`.
pub fn find_pixel(raster: &Raster, value: u32) -> Option<(u32, u32)> {
    let w = raster.width() as usize;
    raster
        .data()
        .iter()
        .position(|&px| px == value)
        .map(|idx| ((idx % w) as u32, (idx / w) as u32))
}

/// Reflect a raster through its center: (x, y) -> (w-1-x, h-1-y).
pub fn point_reflect(raster: &Raster) -> Raster {
    let mut data = raster.data().to_vec();
    data.reverse();
    let mut out = raster.to_mut();
    out.data_mut().copy_from_slice(&data);
    out.into()
}
