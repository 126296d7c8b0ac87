//! Regression test parameters and operations

use rotopix_core::Raster;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    pub fn compare_raster(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let p1 = expected.get_pixel_unchecked(x, y);
                let p2 = actual.get_pixel_unchecked(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: raster comparison for index {} - pixel mismatch \
                         at ({}, {}): {:#010x} vs {:#010x}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two rasters allowing a whole-image translation
    ///
    /// Passes if `actual` equals `expected` shifted by some (dx, dy) with
    /// `|dx|, |dy| <= max_shift`. Pixels shifted in from outside `expected`
    /// must equal `fill`.
    pub fn compare_raster_shifted(
        &mut self,
        expected: &Raster,
        actual: &Raster,
        max_shift: u32,
        fill: u32,
    ) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: shifted raster comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.fail(msg);
            return false;
        }

        let m = max_shift as i64;
        for dy in -m..=m {
            for dx in -m..=m {
                if shifted_equal(expected, actual, dx, dy, fill) {
                    if dx != 0 || dy != 0 {
                        eprintln!(
                            "  {}_reg index {}: matched with shift ({}, {})",
                            self.test_name, self.index, dx, dy
                        );
                    }
                    return true;
                }
            }
        }

        let msg = format!(
            "Failure in {}_reg: shifted raster comparison for index {} - \
             no match within {} pixel(s)",
            self.test_name, self.index, max_shift
        );
        self.fail(msg);
        false
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// actual(x, y) == expected(x - dx, y - dy), or `fill` where that is outside.
fn shifted_equal(expected: &Raster, actual: &Raster, dx: i64, dy: i64, fill: u32) -> bool {
    let w = expected.width() as i64;
    let h = expected.height() as i64;
    for y in 0..h {
        for x in 0..w {
            let (sx, sy) = (x - dx, y - dy);
            let want = if sx >= 0 && sx < w && sy >= 0 && sy < h {
                expected.get_pixel_unchecked(sx as u32, sy as u32)
            } else {
                fill
            };
            if actual.get_pixel_unchecked(x as u32, y as u32) != want {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotopix_core::RasterMut;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_raster() {
        let mut rp = RegParams::new("test");
        let a = Raster::new_filled(3, 3, 1).unwrap();
        assert!(rp.compare_raster(&a, &a.deep_clone()));
        let mut b = a.to_mut();
        b.set_pixel(1, 1, 2).unwrap();
        assert!(!rp.compare_raster(&a, &b.into()));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_raster_shifted() {
        let mut rp = RegParams::new("test");
        let mut a = RasterMut::new_filled(5, 5, 0).unwrap();
        a.set_pixel(2, 2, 7).unwrap();
        let mut b = RasterMut::new_filled(5, 5, 0).unwrap();
        b.set_pixel(3, 1, 7).unwrap();
        let (a, b): (Raster, Raster) = (a.into(), b.into());

        assert!(rp.compare_raster_shifted(&a, &b, 1, 0));
        assert!(!rp.compare_raster(&a, &b));

        let mut c = RasterMut::new_filled(5, 5, 0).unwrap();
        c.set_pixel(4, 4, 7).unwrap();
        assert!(!rp.compare_raster_shifted(&a, &c.into(), 1, 0));
    }
}
