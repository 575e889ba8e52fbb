//! Scales that place and color heat map cells.
//!
//! - [`LinearScale`]: continuous maps (year → x, temperature → `[0, 1]`)
//! - [`BandScale`]: the twelve month rows
//! - [`Scales`]: the four scales a heat map is drawn with, built once from
//!   the whole dataset

mod band;
mod linear;

pub use band::BandScale;
pub use linear::LinearScale;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Hsl, heat_color};
use crate::config::HeatMapConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Number of month rows.
pub const MONTHS: usize = 12;

/// The scales for one dataset and layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    /// First and last year in the data.
    pub years: (i32, i32),
    /// Year → x coordinate.
    pub x: LinearScale,
    /// Zero-based month → y coordinate; month 0 is the bottom row.
    pub y: BandScale,
    /// Temperature → normalized color position in `[0, 1]`.
    pub color: LinearScale,
    /// Normalized color position → temperature. Used for legend labels.
    pub color_inverse: LinearScale,
}

impl Scales {
    /// Builds the scales from the dataset extents.
    ///
    /// The color domain is widened to whole degrees,
    /// `[floor(min), floor(max) + 1]`, so every observed temperature
    /// normalizes into `[0, 1]`.
    pub fn build(dataset: &Dataset, config: &HeatMapConfig) -> Result<Self> {
        let (first_year, last_year) = dataset.year_range().ok_or(Error::EmptyDataset)?;
        let (min_temp, max_temp) = dataset.temperature_range().ok_or(Error::EmptyDataset)?;

        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let padding = f64::from(config.padding);

        let x = LinearScale::new(
            (f64::from(first_year), f64::from(last_year)),
            (padding, width - padding),
        );
        let y = BandScale::new(MONTHS, (height - padding, padding));

        let color_domain = (min_temp.floor(), max_temp.floor() + 1.0);
        let color = LinearScale::new(color_domain, (0.0, 1.0));
        let color_inverse = color.inverse();

        debug!(
            first_year,
            last_year,
            color_min = color_domain.0,
            color_max = color_domain.1,
            "Built scales"
        );

        Ok(Self {
            years: (first_year, last_year),
            x,
            y,
            color,
            color_inverse,
        })
    }

    /// Fill color for an actual temperature.
    #[must_use]
    pub fn fill(&self, temperature: f64) -> Hsl {
        heat_color(self.color.apply(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample_dataset;

    #[test]
    fn test_build_domains() {
        let dataset = sample_dataset();
        let scales = Scales::build(&dataset, &HeatMapConfig::default()).unwrap();

        assert_eq!(scales.years, (1753, 1754));
        assert_eq!(scales.x.domain, (1753.0, 1754.0));
        assert_eq!(scales.x.range, (100.0, 900.0));
        // min 0.9, max 8.66 + 2.5 = 11.16
        assert_eq!(scales.color.domain, (0.0, 12.0));
        assert_eq!(scales.color_inverse.range, (0.0, 12.0));
    }

    #[test]
    fn test_every_observation_normalizes_into_unit_range() {
        let dataset = sample_dataset();
        let scales = Scales::build(&dataset, &HeatMapConfig::default()).unwrap();

        for t in dataset.temperatures() {
            let n = scales.color.apply(t);
            assert!((0.0..=1.0).contains(&n), "{t} -> {n}");
        }
    }

    #[test]
    fn test_color_inverse_round_trip() {
        let scales = Scales::build(&sample_dataset(), &HeatMapConfig::default()).unwrap();
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let back = scales.color.apply(scales.color_inverse.apply(t));
            assert!((back - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_month_zero_is_bottom() {
        let scales = Scales::build(&sample_dataset(), &HeatMapConfig::default()).unwrap();
        let january = scales.y.position(0).unwrap();
        let december = scales.y.position(11).unwrap();
        assert!(january > december);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let dataset = Dataset::new(8.66, Vec::new());
        let err = Scales::build(&dataset, &HeatMapConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_fill_endpoints() {
        let scales = Scales::build(&sample_dataset(), &HeatMapConfig::default()).unwrap();
        assert_eq!(scales.fill(0.0).h, 240.0);
        assert_eq!(scales.fill(12.0).h, 0.0);
    }
}
