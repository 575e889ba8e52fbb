//! temp-heatmap CLI - monthly temperature variance heat maps

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{OutputFormat, SourceArgs};

/// Render calendar heat maps of monthly global temperature variance.
#[derive(Parser)]
#[command(name = "temp-heatmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter, e.g. `info` or `temp_heatmap=debug`
    #[arg(long, global = true, env = "TEMP_HEATMAP_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the heat map as SVG or HTML
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (inferred from the output extension when omitted)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Snapshot the hover overlay for a cell, as YEAR-MONTH (e.g. 1753-01)
        #[arg(long)]
        hover: Option<String>,

        /// Layout configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Show dataset statistics and legend buckets
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Layout configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool, log_level: Option<&str>) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = log_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_level.as_deref());

    match cli.command {
        Commands::Render {
            source,
            output,
            format,
            hover,
            config,
            width,
            height,
        } => {
            let options = commands::render::RenderOptions {
                output,
                format,
                hover,
                config,
                width,
                height,
            };
            commands::render::run(&source, options, cli.verbose).await
        }
        Commands::Summary { source, config, json } => {
            commands::summary::run(&source, config, json, cli.verbose).await
        }
    }
}
