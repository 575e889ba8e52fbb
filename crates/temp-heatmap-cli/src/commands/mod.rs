//! Subcommand implementations and the arguments they share.

pub mod render;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use temp_heatmap::{DEFAULT_DATASET_URL, Dataset, HeatMapConfig, fetch_dataset, import_csv};

/// Where to load the dataset from. Defaults to the public JSON endpoint.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Dataset URL
    #[arg(long, env = "TEMP_HEATMAP_URL", default_value = DEFAULT_DATASET_URL)]
    pub url: String,

    /// Local JSON dataset (instead of downloading)
    #[arg(short, long, conflicts_with = "csv")]
    pub input: Option<PathBuf>,

    /// CSV with year, month and variance columns (instead of downloading)
    #[arg(long, requires = "base_temperature")]
    pub csv: Option<PathBuf>,

    /// Base temperature for CSV input
    #[arg(long)]
    pub base_temperature: Option<f64>,
}

impl SourceArgs {
    /// Loads the dataset from whichever source was selected.
    pub async fn load(&self, verbose: bool) -> Result<Dataset> {
        if let Some(path) = &self.input {
            if verbose {
                eprintln!("Loading dataset from: {}", path.display());
            }
            return Dataset::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()));
        }

        if let (Some(path), Some(base)) = (&self.csv, self.base_temperature) {
            if verbose {
                eprintln!("Importing observations from: {}", path.display());
            }
            return import_csv(path, base)
                .with_context(|| format!("Failed to import CSV from {}", path.display()));
        }

        if verbose {
            eprintln!("Fetching dataset from: {}", self.url);
        }
        let client = reqwest::Client::new();
        fetch_dataset(&client, &self.url)
            .await
            .with_context(|| format!("Failed to fetch {}", self.url))
    }
}

/// Output document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare SVG document
    Svg,
    /// Standalone HTML page with hover script
    Html,
}

impl OutputFormat {
    /// Picks the format from an explicit choice, else the output extension,
    /// else SVG.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        explicit.unwrap_or_else(|| {
            let is_html = output
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
            if is_html { Self::Html } else { Self::Svg }
        })
    }
}

/// Loads the layout config file, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<HeatMapConfig> {
    match path {
        Some(path) => HeatMapConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(HeatMapConfig::default()),
    }
}

/// Parses `YEAR-MONTH` (e.g. `1753-01`) into a year and 1-based month.
pub fn parse_year_month(value: &str) -> Result<(i32, u32)> {
    let (year, month) = value
        .trim()
        .rsplit_once('-')
        .with_context(|| format!("Expected YEAR-MONTH, got '{}'", value))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", value))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", value))?;
    if !(1..=12).contains(&month) {
        bail!("Month must be 1-12, got {}", month);
    }
    Ok((year, month))
}
