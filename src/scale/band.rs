//! Discrete band scale.

use serde::{Deserialize, Serialize};

/// Splits a pixel range into `len` equal contiguous bands, one per index.
///
/// Positions are rounded to whole pixels: the step is floored and the
/// leftover pixels are shared evenly between both ends. When the range is
/// reversed (`r0 > r1`) index 0 gets the band nearest `r0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    len: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
    reverse: bool,
}

impl BandScale {
    /// Creates a rounded band scale over indices `0..len`.
    ///
    /// # Example
    ///
    /// ```
    /// use temp_heatmap::scale::BandScale;
    ///
    /// let months = BandScale::new(12, (900.0, 100.0));
    /// assert_eq!(months.bandwidth(), 66.0);
    /// assert_eq!(months.position(0), Some(830.0));
    /// assert_eq!(months.position(11), Some(104.0));
    /// ```
    #[must_use]
    pub fn new(len: usize, range: (f64, f64)) -> Self {
        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (lo, hi) = if reverse { (r1, r0) } else { (r0, r1) };

        let step = ((hi - lo) / len.max(1) as f64).floor();
        let start = (lo + (hi - lo - step * len as f64) * 0.5).round();

        Self {
            len,
            start,
            step,
            bandwidth: step.round(),
            reverse,
        }
    }

    /// Number of bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the scale has no bands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Width of each band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start coordinate of band `index`, or `None` when out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        let slot = if self.reverse { self.len - 1 - index } else { index };
        Some(self.start + self.step * slot as f64)
    }

    /// Center coordinate of band `index`, rounded like the band positions.
    #[must_use]
    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index)
            .map(|p| (p + self.bandwidth / 2.0).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bands_bottom_up() {
        let months = BandScale::new(12, (900.0, 100.0));
        assert_eq!(months.len(), 12);
        assert_eq!(months.step(), 66.0);

        let positions: Vec<f64> = (0..12).map(|i| months.position(i).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(positions[0] - positions[1], 66.0);
    }

    #[test]
    fn test_forward_range() {
        let bands = BandScale::new(4, (0.0, 100.0));
        assert_eq!(bands.position(0), Some(0.0));
        assert_eq!(bands.position(3), Some(75.0));
        assert_eq!(bands.center(0), Some(13.0));
    }

    #[test]
    fn test_leftover_pixels_centered() {
        let bands = BandScale::new(3, (0.0, 10.0));
        assert_eq!(bands.step(), 3.0);
        // 1 leftover pixel, half of it rounds up on the leading edge
        assert_eq!(bands.position(0), Some(1.0));
    }

    #[test]
    fn test_out_of_range() {
        let bands = BandScale::new(12, (900.0, 100.0));
        assert_eq!(bands.position(12), None);
        assert_eq!(bands.center(12), None);
    }
}
