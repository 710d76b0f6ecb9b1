//! CLI logic for the riksplot chart tool.
//!
//! This module contains the core CLI logic for the riksplot chart tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use riksplot::{ChartBuilder, RiksplotError, SeatTable};
use riksplot_scb::{Cache, ScbClient, load_or_fetch};

/// Cache key for the reshaped SCB seat table.
const CACHE_KEY: &str = "riksdagsmandat";

/// Run the riksplot CLI application
///
/// This function fetches the seat data (through the on-disk cache), runs it
/// through the chart pipeline, and writes the resulting SVG to the output
/// file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RiksplotError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Data retrieval and cache errors
/// - Layout errors
pub async fn run(args: &Args) -> Result<(), RiksplotError> {
    info!(
        output_path = args.output,
        cache_dir = args.cache_dir;
        "Building seat-stripe chart"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Fetch the seat table through the cache; this is the single await point
    let cache = Cache::new(&args.cache_dir);
    if args.refresh {
        info!(key = CACHE_KEY; "Discarding cached seat data");
        cache.remove(CACHE_KEY)?;
    }

    let client = ScbClient::new();
    let region = app_config.data().region().to_string();
    let parties = app_config.data().parties().to_vec();
    let table: SeatTable = load_or_fetch(&cache, CACHE_KEY, || {
        client.fetch_seats(&region, &parties)
    })
    .await?;

    info!(years = table.len(); "Seat data loaded");

    // Process the table using the ChartBuilder API
    let builder = ChartBuilder::new(app_config);
    let slices = builder.structure(&table);
    let chart = builder.layout(&slices)?;
    let svg = builder.render_svg(&chart);

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
