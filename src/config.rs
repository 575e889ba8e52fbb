//! Layout configuration for the heat map.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Heat map layout configuration.
///
/// Every field has a default, so a JSON config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapConfig {
    /// Chart title.
    pub title: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Space between the canvas edge and the plot area, on every side.
    pub padding: u32,
    /// Axis label font size in pixels.
    pub axis_font_size: u32,
    /// Legend label font size in pixels.
    pub legend_font_size: u32,
    /// Requested number of year ticks. The actual count follows the
    /// 1/2/5 step rule and may differ.
    pub tick_count: usize,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            title: "Monthly Global Land-Surface Temperature".to_string(),
            width: 1000,
            height: 1000,
            padding: 100,
            axis_font_size: 15,
            legend_font_size: 20,
            tick_count: 10,
        }
    }
}

impl HeatMapConfig {
    /// Creates a configuration with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the canvas dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the padding around the plot area.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the requested number of year ticks.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Plot area width (canvas width minus padding on both sides).
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width) - 2.0 * f64::from(self.padding)
    }

    /// Plot area height (canvas height minus padding on both sides).
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height) - 2.0 * f64::from(self.padding)
    }

    /// Checks that the padding leaves a non-empty plot area.
    pub fn validate(&self) -> Result<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(Error::Config(format!(
                "padding {} leaves no plot area in a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeatMapConfig::default();
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 1000);
        assert_eq!(config.padding, 100);
        assert_eq!(config.plot_width(), 800.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{"width": 1200, "title": "Anomalies"}"#).unwrap();

        let config = HeatMapConfig::from_path(&path).unwrap();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 1000);
        assert_eq!(config.title, "Anomalies");
    }

    #[test]
    fn test_padding_too_large() {
        let config = HeatMapConfig::default().with_dimensions(150, 150);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
