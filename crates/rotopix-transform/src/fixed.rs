//! Fixed-point scale for incremental stepping
//!
//! Coordinates are held as `i64` values scaled by `2^bits`. More fractional
//! bits give finer sub-pixel stepping; 30 bits is the most that stays
//! overflow-free for any canvas whose side fits in a `u32`.

use crate::{TransformError, TransformResult};

/// Default number of fractional bits
pub const DEFAULT_SCALE_BITS: u32 = 16;

/// Largest accepted number of fractional bits
pub const MAX_SCALE_BITS: u32 = 30;

/// A validated fixed-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScale {
    bits: u32,
}

impl Default for FixedScale {
    fn default() -> Self {
        Self {
            bits: DEFAULT_SCALE_BITS,
        }
    }
}

impl FixedScale {
    /// Create a scale with `bits` fractional bits.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] unless
    /// `1 <= bits <= MAX_SCALE_BITS`.
    pub fn new(bits: u32) -> TransformResult<Self> {
        if bits == 0 || bits > MAX_SCALE_BITS {
            return Err(TransformError::InvalidParameters(format!(
                "scale bits must be in 1..={MAX_SCALE_BITS}, got {bits}"
            )));
        }
        Ok(Self { bits })
    }

    /// Number of fractional bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// The fixed-point representation of 1.0.
    #[inline]
    pub fn one(self) -> i64 {
        1 << self.bits
    }

    /// Convert to fixed point, truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes 0.
    #[inline]
    pub fn to_fixed(self, value: f64) -> i64 {
        (value * self.one() as f64) as i64
    }

    /// Integer pixel coordinate of a fixed-point value (rounds toward -inf).
    #[inline]
    pub fn to_pixel(self, value: i64) -> i64 {
        value >> self.bits
    }
}
