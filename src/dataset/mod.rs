//! Monthly temperature variance dataset.
//!
//! The dataset is a base temperature plus one variance record per
//! (year, month). It is loaded once and never mutated afterwards.
//!
//! ## Example
//!
//! ```
//! use temp_heatmap::Dataset;
//!
//! let json = r#"{
//!     "baseTemperature": 8.66,
//!     "monthlyVariance": [
//!         { "year": 1753, "month": 1, "variance": -1.366 },
//!         { "year": 1753, "month": 2, "variance": -2.223 }
//!     ]
//! }"#;
//!
//! let dataset = Dataset::from_json_str(json).unwrap();
//! assert_eq!(dataset.observations().len(), 2);
//! assert_eq!(dataset.year_range(), Some((1753, 1753)));
//! ```

#[cfg(feature = "fetch")]
mod fetch;
mod import;

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "fetch")]
pub use fetch::{DEFAULT_DATASET_URL, fetch_dataset};
pub use import::import_csv;

use crate::error::Result;

/// One monthly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Deviation from the dataset's base temperature.
    pub variance: f64,
}

impl Observation {
    /// Zero-based month index used for the grid row, or `None` when the
    /// month is outside 1-12.
    #[must_use]
    pub fn month_index(&self) -> Option<usize> {
        (1..=12).contains(&self.month).then(|| self.month as usize - 1)
    }

    /// Actual temperature for this observation.
    #[must_use]
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// A base temperature plus its monthly variance records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    observations: Vec<Observation>,
}

impl Dataset {
    /// Creates a dataset from already parsed parts.
    #[must_use]
    pub fn new(base_temperature: f64, observations: Vec<Observation>) -> Self {
        Self {
            base_temperature,
            observations,
        }
    }

    /// Parses the JSON document format served by the dataset endpoint.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Base temperature all variances are relative to.
    #[must_use]
    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    /// Observations in input order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Whether the dataset has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// First and last year present, or `None` for an empty dataset.
    #[must_use]
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.observations.iter().map(|o| o.year).min()?;
        let max = self.observations.iter().map(|o| o.year).max()?;
        Some((min, max))
    }

    /// Number of distinct years present.
    #[must_use]
    pub fn distinct_years(&self) -> usize {
        self.observations
            .iter()
            .map(|o| o.year)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Lowest and highest actual temperature, or `None` for an empty dataset.
    #[must_use]
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        if self.observations.is_empty() {
            return None;
        }
        let (min, max) = self
            .temperatures()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
                (lo.min(t), hi.max(t))
            });
        Some((min, max))
    }

    /// Actual temperatures in input order.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations
            .iter()
            .map(|o| o.temperature(self.base_temperature))
    }

    /// Descriptive statistics, or `None` for an empty dataset.
    #[must_use]
    pub fn summary(&self) -> Option<DatasetSummary> {
        let (first_year, last_year) = self.year_range()?;
        let (min_temperature, max_temperature) = self.temperature_range()?;
        let count = self.observations.len();
        let mean_temperature = self.temperatures().sum::<f64>() / count as f64;

        Some(DatasetSummary {
            count,
            base_temperature: self.base_temperature,
            first_year,
            last_year,
            distinct_years: self.distinct_years(),
            min_temperature,
            max_temperature,
            mean_temperature,
        })
    }
}

/// Descriptive statistics for a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of observations.
    pub count: usize,
    /// Base temperature.
    pub base_temperature: f64,
    /// Earliest year.
    pub first_year: i32,
    /// Latest year.
    pub last_year: i32,
    /// Number of distinct years.
    pub distinct_years: usize,
    /// Lowest actual temperature.
    pub min_temperature: f64,
    /// Highest actual temperature.
    pub max_temperature: f64,
    /// Mean actual temperature.
    pub mean_temperature: f64,
}
