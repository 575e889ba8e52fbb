//! Heat map rendering.
//!
//! [`render`] builds the scales for a dataset and draws the whole chart onto
//! a fresh [`Canvas`]: title, year and month axes, legend, and one cell per
//! observation.
//!
//! ## Example
//!
//! ```
//! use temp_heatmap::{Dataset, HeatMapConfig, render};
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "baseTemperature": 8.66,
//!     "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }"#).unwrap();
//!
//! let heatmap = render(&dataset, &HeatMapConfig::default()).unwrap();
//! assert_eq!(heatmap.cells().len(), 1);
//! assert!(heatmap.to_svg().contains(r#"id="legend""#));
//! ```

mod axis;
mod legend;

use std::collections::HashMap;

use tracing::{debug, info};

pub use legend::LEGEND_STOPS;

use crate::canvas::{Canvas, Element};
use crate::color::Hsl;
use crate::config::HeatMapConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::format::format_exact;
use crate::scale::{MONTHS, Scales};

/// Position, size and color of one drawn cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month.
    pub month_index: usize,
    /// Actual temperature (base + variance).
    pub temperature: f64,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Cell width.
    pub width: f64,
    /// Cell height.
    pub height: f64,
    /// Fill color.
    pub fill: Hsl,
}

impl CellGeometry {
    /// Element id of the cell's rectangle.
    #[must_use]
    pub fn id(&self) -> String {
        cell_id(self.year, self.month_index)
    }
}

fn cell_id(year: i32, month_index: usize) -> String {
    format!("cell-{}-{}", year, month_index)
}

/// A rendered heat map: the canvas plus everything needed to interact with it.
#[derive(Debug, Clone)]
pub struct HeatMap {
    canvas: Canvas,
    scales: Scales,
    cells: Vec<CellGeometry>,
    index: HashMap<(i32, usize), usize>,
    title: String,
    description: String,
}

impl HeatMap {
    /// The drawing surface.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The drawing surface, for overlays.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Scales the chart was drawn with.
    #[must_use]
    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// One entry per observation, in input order.
    #[must_use]
    pub fn cells(&self) -> &[CellGeometry] {
        &self.cells
    }

    /// Chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Year span shown under the title, e.g. `1753 - 2015`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cell for a calendar year and 1-based month.
    pub fn cell(&self, year: i32, month: u32) -> Result<&CellGeometry> {
        let month_index = month.checked_sub(1).map(|m| m as usize);
        month_index
            .and_then(|m| self.index.get(&(year, m)))
            .map(|&i| &self.cells[i])
            .ok_or(Error::UnknownCell { year, month })
    }

    /// Serializes the canvas as SVG.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.canvas.to_svg()
    }
}

/// Draws the heat map for `dataset`.
///
/// Fails with [`Error::EmptyDataset`] when there is nothing to scale, and
/// with [`Error::Config`] when the layout leaves no plot area.
pub fn render(dataset: &Dataset, config: &HeatMapConfig) -> Result<HeatMap> {
    config.validate()?;
    let scales = Scales::build(dataset, config)?;
    let (first_year, last_year) = scales.years;
    let description = format!("{} - {}", first_year, last_year);

    let mut canvas = Canvas::new(config.width, config.height);
    let center = f64::from(config.width) / 2.0;
    let title_y = f64::from(config.padding) / 2.0;

    canvas.append(
        Element::new("text")
            .attr("id", "title")
            .attr("x", px(center))
            .attr("y", px(title_y))
            .attr("text-anchor", "middle")
            .attr("style", "font-size: 24px")
            .text(config.title.as_str()),
    );
    canvas.append(
        Element::new("text")
            .attr("id", "description")
            .attr("x", px(center))
            .attr("y", px(title_y + 28.0))
            .attr("text-anchor", "middle")
            .attr("style", "font-size: 18px")
            .text(description.as_str()),
    );

    canvas.append(axis::year_axis(&scales, config));
    canvas.append(axis::month_axis(&scales, config));
    canvas.append(legend::legend(&scales, config));

    let width = config.plot_width() / dataset.distinct_years() as f64;
    let height = config.plot_height() / MONTHS as f64;
    let base = dataset.base_temperature();

    let mut cells = Vec::with_capacity(dataset.observations().len());
    let mut index = HashMap::with_capacity(dataset.observations().len());

    for obs in dataset.observations() {
        let placed = obs
            .month_index()
            .and_then(|m| scales.y.position(m).map(|y| (m, y)));
        let Some((month_index, y)) = placed else {
            debug!(year = obs.year, month = obs.month, "Skipping observation outside month range");
            continue;
        };
        let temperature = obs.temperature(base);
        let cell = CellGeometry {
            year: obs.year,
            month_index,
            temperature,
            x: scales.x.apply(f64::from(obs.year)),
            y,
            width,
            height,
            fill: scales.fill(temperature),
        };

        canvas.append(
            Element::new("rect")
                .attr("id", cell.id())
                .attr("class", "cell")
                .attr("x", px(cell.x))
                .attr("y", px(cell.y))
                .attr("width", px(cell.width))
                .attr("height", px(cell.height))
                .attr("data-month", month_index)
                .attr("data-year", obs.year)
                .attr("data-temp", format_exact(temperature))
                .attr("fill", cell.fill),
        );

        index.insert((cell.year, month_index), cells.len());
        cells.push(cell);
    }

    info!(
        cells = cells.len(),
        first_year, last_year, "Rendered heat map"
    );

    Ok(HeatMap {
        canvas,
        scales,
        cells,
        index,
        title: config.title.clone(),
        description,
    })
}

/// Formats a pixel coordinate with at most two decimals.
pub(crate) fn px(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::dataset::Observation;
    use crate::dataset::tests::sample_dataset;

    #[test]
    fn test_one_cell_per_observation() {
        let dataset = sample_dataset();
        let heatmap = render(&dataset, &HeatMapConfig::default()).unwrap();

        let cells = heatmap.canvas().select_class("cell");
        assert_eq!(cells.len(), dataset.observations().len());
        assert_eq!(heatmap.cells().len(), dataset.observations().len());

        let keys: HashSet<(&str, &str)> = cells
            .iter()
            .map(|c| (c.get_attr("data-year").unwrap(), c.get_attr("data-month").unwrap()))
            .collect();
        assert_eq!(keys.len(), cells.len());
    }

    #[test]
    fn test_data_temp_is_exact_sum() {
        let dataset = sample_dataset();
        let heatmap = render(&dataset, &HeatMapConfig::default()).unwrap();

        for (cell, obs) in heatmap.canvas().select_class("cell").iter().zip(dataset.observations()) {
            let temp: f64 = cell.get_attr("data-temp").unwrap().parse().unwrap();
            assert_eq!(temp, dataset.base_temperature() + obs.variance);
        }
    }

    #[test]
    fn test_first_record_scenario() {
        let dataset = sample_dataset();
        let heatmap = render(&dataset, &HeatMapConfig::default()).unwrap();

        assert_eq!(heatmap.scales().x.domain.0, 1753.0);
        let rect = heatmap.canvas().find_by_id("cell-1753-0").unwrap();
        assert_eq!(rect.get_attr("x"), Some("100"));
        assert_eq!(rect.get_attr("data-month"), Some("0"));
        let temp: f64 = rect.get_attr("data-temp").unwrap().parse().unwrap();
        assert!((temp - 0.9).abs() < 1e-9);
        assert_eq!(temp, 8.66 + -7.76);
    }

    #[test]
    fn test_cell_size() {
        let heatmap = render(&sample_dataset(), &HeatMapConfig::default()).unwrap();
        let cell = heatmap.cell(1754, 6).unwrap();
        // 800px across 2 years, 800px across 12 months
        assert_eq!(cell.width, 400.0);
        assert!((cell.height - 800.0 / 12.0).abs() < 1e-9);
        assert_eq!(cell.x, 900.0);
    }

    #[test]
    fn test_cell_fill_uses_color_scale() {
        let dataset = sample_dataset();
        let heatmap = render(&dataset, &HeatMapConfig::default()).unwrap();
        for cell in heatmap.cells() {
            let t = heatmap.scales().color.apply(cell.temperature);
            assert_eq!(cell.fill.h, (1.0 - t) * 240.0);
        }
    }

    #[test]
    fn test_title_and_description() {
        let heatmap = render(&sample_dataset(), &HeatMapConfig::new("Anomalies")).unwrap();
        assert_eq!(heatmap.description(), "1753 - 1754");
        let title = heatmap.canvas().find_by_id("title").unwrap();
        assert_eq!(title.text_content(), Some("Anomalies"));
        let description = heatmap.canvas().find_by_id("description").unwrap();
        assert_eq!(description.text_content(), Some("1753 - 1754"));
    }

    #[test]
    fn test_legend_has_six_swatches_for_any_size() {
        for years in [1, 5, 40] {
            let observations = (0..years)
                .flat_map(|y| {
                    (1..=12).map(move |m| Observation {
                        year: 1900 + y,
                        month: m,
                        variance: f64::from(m) / 10.0,
                    })
                })
                .collect();
            let heatmap = render(&Dataset::new(8.0, observations), &HeatMapConfig::default()).unwrap();
            assert_eq!(heatmap.canvas().select_class("legend-swatch").len(), 6);
        }
    }

    #[test]
    fn test_unknown_cell() {
        let heatmap = render(&sample_dataset(), &HeatMapConfig::default()).unwrap();
        assert!(matches!(heatmap.cell(1800, 1), Err(Error::UnknownCell { year: 1800, month: 1 })));
        assert!(matches!(heatmap.cell(1753, 0), Err(Error::UnknownCell { .. })));
    }

    #[test]
    fn test_skips_months_outside_calendar() {
        let observations = vec![
            Observation {
                year: 1900,
                month: 1,
                variance: 0.0,
            },
            Observation {
                year: 1900,
                month: 0,
                variance: 5.0,
            },
            Observation {
                year: 1900,
                month: 13,
                variance: -5.0,
            },
        ];
        let heatmap = render(&Dataset::new(8.0, observations), &HeatMapConfig::default()).unwrap();

        assert_eq!(heatmap.cells().len(), 1);
        assert_eq!(heatmap.canvas().select_class("cell").len(), 1);
        assert_eq!(heatmap.canvas().count_id("cell-1900-0"), 1);
        assert_eq!(heatmap.cell(1900, 1).unwrap().temperature, 8.0);
        assert!(matches!(heatmap.cell(1900, 13), Err(Error::UnknownCell { .. })));
    }

    #[test]
    fn test_empty_dataset() {
        let err = render(&Dataset::new(8.66, Vec::new()), &HeatMapConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_svg_output() {
        let svg = render(&sample_dataset(), &HeatMapConfig::default()).unwrap().to_svg();
        assert!(svg.contains(r#"id="x-axis""#));
        assert!(svg.contains(r#"id="y-axis""#));
        assert!(svg.contains(r#"data-temp="0.9000000000000004""#));
    }

    #[test]
    fn test_px() {
        assert_eq!(px(100.0), "100");
        assert_eq!(px(103.056), "103.06");
        assert_eq!(px(66.5), "66.5");
        assert_eq!(px(-0.001), "0");
    }
}
