//! rotopix Core - Raster data structures for fixed-point rotation
//!
//! This crate provides the data structures shared by the rotopix crates:
//!
//! - [`Raster`] / [`RasterMut`] - Packed 32-bit ARGB image (immutable / mutable)
//! - [`argb`] - Channel helpers and the transparent sentinel
//! - [`Error`] / [`Result`] - Error handling for raster construction and access

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel helpers for packed 32-bit ARGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
pub mod argb {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Pixel written where no source pixel maps.
    ///
    /// Alpha is zero, so the value is fully transparent; the color bits are
    /// white so that consumers ignoring alpha see a white background.
    pub const TRANSPARENT: u32 = 0x00FF_FFFF;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract (a, r, g, b) from a 32-bit pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// True if the pixel has a zero alpha channel.
    #[inline]
    pub fn is_transparent(pixel: u32) -> bool {
        alpha(pixel) == 0
    }

}
