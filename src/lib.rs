//! # temp-heatmap
//!
//! Calendar heat map of monthly global temperature variance.
//!
//! A dataset of (year, month, variance) records is mapped onto a grid with a
//! continuous year axis and twelve month rows. Each cell is colored on a
//! blue-to-red hue ramp by its actual temperature, and a hover overlay shows
//! a tooltip and outline for one cell at a time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use temp_heatmap::{DEFAULT_DATASET_URL, HeatMapConfig, HoverOverlay, fetch_dataset, render};
//!
//! let client = reqwest::Client::new();
//! let dataset = fetch_dataset(&client, DEFAULT_DATASET_URL).await?;
//!
//! let mut heatmap = render(&dataset, &HeatMapConfig::default())?;
//!
//! let cell = heatmap.cell(1753, 1)?.clone();
//! HoverOverlay::new().enter(heatmap.canvas_mut(), &cell);
//!
//! std::fs::write("heatmap.svg", heatmap.to_svg())?;
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`dataset`]: Dataset model, JSON/HTTP loading and CSV import
//! - [`scale`]: Linear and band scales
//! - [`color`]: Hue ramp
//! - [`render`]: Axes, legend and cells drawn onto a [`Canvas`]
//! - [`interact`]: Hover tooltip and highlight
//! - [`page`]: Standalone HTML output

pub mod canvas;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod interact;
pub mod page;
pub mod render;
pub mod scale;

// Re-export commonly used types
pub use canvas::{Canvas, Element};
pub use config::HeatMapConfig;
pub use dataset::{Dataset, DatasetSummary, Observation, import_csv};
#[cfg(feature = "fetch")]
pub use dataset::{DEFAULT_DATASET_URL, fetch_dataset};
pub use error::{Error, Result};
pub use interact::{HoverOverlay, HoverState};
pub use render::{CellGeometry, HeatMap, LEGEND_STOPS, render};
pub use scale::{BandScale, LinearScale, Scales};
