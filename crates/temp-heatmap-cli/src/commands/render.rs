//! Render command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use temp_heatmap::page::render_html;
use temp_heatmap::{HoverOverlay, render};
use tracing::info;

use super::{OutputFormat, SourceArgs, load_config, parse_year_month};

/// Options for `temp-heatmap render` besides the data source.
pub struct RenderOptions {
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub hover: Option<String>,
    pub config: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub async fn run(source: &SourceArgs, options: RenderOptions, verbose: bool) -> Result<()> {
    let mut config = load_config(options.config.as_deref())?;
    if let Some(width) = options.width {
        config.width = width;
    }
    if let Some(height) = options.height {
        config.height = height;
    }

    let dataset = source.load(verbose).await?;

    if verbose {
        eprintln!("Loaded {} observations", dataset.observations().len());
    }

    let mut heatmap = render(&dataset, &config).context("Failed to render heat map")?;

    if let Some(hover) = &options.hover {
        let (year, month) = parse_year_month(hover)?;
        let cell = heatmap.cell(year, month)?.clone();
        HoverOverlay::new().enter(heatmap.canvas_mut(), &cell);
        info!(year, month, "Rendered with hover overlay");
    }

    let format = OutputFormat::resolve(options.format, options.output.as_deref());
    let document = match format {
        OutputFormat::Svg => heatmap.to_svg(),
        OutputFormat::Html => render_html(&heatmap),
    };

    match &options.output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!(
                "Rendered {} cells ({}) to {}",
                heatmap.cells().len(),
                heatmap.description(),
                path.display()
            );
        }
        None => print!("{}", document),
    }

    Ok(())
}
