//! Continuous linear scale.

use serde::{Deserialize, Serialize};

/// Linear map from a `[d0, d1]` domain to an `[r0, r1]` range.
///
/// Values outside the domain extrapolate; nothing is clamped. A degenerate
/// domain (`d0 == d1`) maps every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    /// Domain endpoints.
    pub domain: (f64, f64),
    /// Range endpoints.
    pub range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value into the range.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let t = normalize(self.domain, value);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Maps a range value back into the domain.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = normalize(self.range, value);
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// The scale with domain and range swapped.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.range, self.domain)
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, chosen so the tick count is
    /// as close to `count` as possible.
    ///
    /// # Example
    ///
    /// ```
    /// use temp_heatmap::scale::LinearScale;
    ///
    /// let x = LinearScale::new((1753.0, 2015.0), (100.0, 900.0));
    /// let ticks = x.ticks(10);
    /// assert_eq!(ticks.first(), Some(&1760.0));
    /// assert_eq!(ticks.last(), Some(&2000.0));
    /// ```
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let reverse = d1 < d0;
        let (start, stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let mut ticks = tick_values(start, stop, count as f64);
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn normalize((a, b): (f64, f64), value: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.5 } else { (value - a) / span }
}

fn tick_values(start: f64, stop: f64, count: f64) -> Vec<f64> {
    let Some((i1, i2, increment)) = tick_spec(start, stop, count) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    (i1..=i2)
        .map(|i| match increment {
            TickIncrement::Multiply(inc) => i as f64 * inc,
            TickIncrement::Divide(inc) => i as f64 / inc,
        })
        .collect()
}

#[derive(Clone, Copy)]
enum TickIncrement {
    /// Step of at least 1: tick `i` is `i * inc`.
    Multiply(f64),
    /// Fractional step: tick `i` is `i / inc`, which avoids `0.1 * 3` drift.
    Divide(f64),
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, TickIncrement)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, TickIncrement::Divide(inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, TickIncrement::Multiply(inc))
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, increment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_invert() {
        let s = LinearScale::new((1753.0, 2015.0), (100.0, 900.0));
        assert_eq!(s.apply(1753.0), 100.0);
        assert_eq!(s.apply(2015.0), 900.0);
        assert!((s.invert(s.apply(1880.0)) - 1880.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_round_trip() {
        let color = LinearScale::new((1.0, 14.0), (0.0, 1.0));
        let inverse = color.inverse();
        for i in 0..=50 {
            let t = f64::from(i) / 50.0;
            assert!((color.apply(inverse.apply(t)) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_domain() {
        let s = LinearScale::new((1900.0, 1900.0), (100.0, 900.0));
        assert_eq!(s.apply(1900.0), 500.0);
        assert_eq!(s.ticks(10), vec![1900.0]);
    }

    #[test]
    fn test_year_ticks() {
        let s = LinearScale::new((1753.0, 2015.0), (100.0, 900.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.len(), 13);
        assert!(ticks.iter().all(|t| t.fract() == 0.0));
        assert_eq!(ticks[1] - ticks[0], 20.0);
    }

    #[test]
    fn test_fractional_ticks() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_reversed_domain_ticks() {
        let s = LinearScale::new((10.0, 0.0), (0.0, 100.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&0.0));
    }

    #[test]
    fn test_zero_count() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert!(s.ticks(0).is_empty());
    }
}
