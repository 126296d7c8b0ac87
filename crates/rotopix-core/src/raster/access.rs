//! Pixel access functions
//!
//! Single-pixel getters and setters. Bulk work should go through
//! [`Raster::data`] / [`RasterMut::data_mut`] instead.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = (y as usize) * (self.width() as usize) + x as usize;
        self.data_mut()[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut raster = RasterMut::new_filled(4, 3, 0).unwrap();
        raster.set_pixel(3, 2, 0xFF12_3456).unwrap();
        assert_eq!(raster.get_pixel(3, 2), Some(0xFF12_3456));
        assert_eq!(raster.data()[11], 0xFF12_3456);

        let raster: Raster = raster.into();
        assert_eq!(raster.get_pixel(3, 2), Some(0xFF12_3456));
        assert_eq!(raster.get_pixel_unchecked(0, 0), 0);
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.get_pixel(4, 0), None);
        assert_eq!(raster.get_pixel(0, 3), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut raster = RasterMut::new_filled(4, 3, 0).unwrap();
        let err = raster.set_pixel(0, 3, 1).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                x: 0,
                y: 3,
                width: 4,
                height: 3
            }
        );
        assert!(raster.data().iter().all(|&p| p == 0));
    }
}
