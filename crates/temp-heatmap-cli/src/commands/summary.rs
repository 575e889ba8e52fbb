//! Summary command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use temp_heatmap::color::heat_color;
use temp_heatmap::format::format_legend_temperature;
use temp_heatmap::{LEGEND_STOPS, Scales};

use super::{SourceArgs, load_config};

pub async fn run(
    source: &SourceArgs,
    config: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let dataset = source.load(verbose).await?;

    let Some(summary) = dataset.summary() else {
        bail!("Dataset has no observations");
    };
    let scales = Scales::build(&dataset, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Dataset Summary:");
    println!("{:-<50}", "");
    println!("Observations:      {}", summary.count);
    println!(
        "Years:             {} - {} ({} distinct)",
        summary.first_year, summary.last_year, summary.distinct_years
    );
    println!("Base temperature:  {:.2}° C", summary.base_temperature);
    println!(
        "Temperature:       min {:.2}, mean {:.2}, max {:.2}° C",
        summary.min_temperature, summary.mean_temperature, summary.max_temperature
    );
    println!();

    println!("Legend:");
    println!("{:<8} {:>10} {:>10}", "Stop", "Temp (C)", "Color");
    println!("{:-<50}", "");
    for t in LEGEND_STOPS {
        let color = heat_color(t);
        println!(
            "{:<8.1} {:>10} {:>10}",
            t,
            format_legend_temperature(scales.color_inverse.apply(t)),
            color.to_hex()
        );
    }

    Ok(())
}
