//! Riksplot - proportional seat-stripe charts of Riksdag election results.
//!
//! Structuring, layout, and rendering for seat composition charts: each
//! election year becomes a vertical stripe of stacked rectangles whose
//! heights are proportional to the parties' seat counts.

pub mod config;
pub mod parties;
pub mod semantic;

mod error;
mod export;
mod layout;
mod structure;

pub use riksplot_core::{color, geometry, measure, node};
pub use riksplot_scb::SeatTable;

pub use error::RiksplotError;
pub use layout::{Chart, LayoutError, StripeEngine};

use log::{debug, info, trace};

use config::AppConfig;
use semantic::YearSlice;

/// Builder for structuring and rendering seat-stripe charts.
///
/// This provides an API for processing seat data through structuring,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use riksplot::{ChartBuilder, SeatTable, config::AppConfig};
///
/// let table = SeatTable::new(); // normally fetched from SCB
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let slices = builder.structure(&table);
/// let chart = builder.layout(&slices).expect("Failed to lay out");
/// let svg = builder.render_svg(&chart);
/// ```
#[derive(Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Structure a reshaped seat table into ordered year slices.
    ///
    /// Parses and filters each year's raw counts, sorts the survivors into
    /// the canonical stacking order, and drops years with no counted
    /// mandates. The returned slices are in ascending year order.
    pub fn structure(&self, table: &SeatTable) -> Vec<YearSlice> {
        info!(years = table.len(); "Structuring seat data");

        let slices = structure::structure_years(table);

        debug!(slices = slices.len(); "Seat data structured");
        trace!(slices:?; "Structured year slices");

        slices
    }

    /// Lay out year slices as a chart of proportional stripes.
    ///
    /// Slices are taken in the given order; [`ChartBuilder::structure`]
    /// already delivers them chronologically.
    ///
    /// # Errors
    ///
    /// Returns `RiksplotError::Layout` if any slice has a mandate total of
    /// zero, which rejects the whole chart.
    pub fn layout(&self, slices: &[YearSlice]) -> Result<Chart, RiksplotError> {
        info!(slices = slices.len(); "Laying out chart");

        let engine = StripeEngine::new(self.config.layout());
        let chart = engine.layout_chart(slices)?;

        debug!(rectangles = chart.nodes().len(); "Chart laid out");

        Ok(chart)
    }

    /// Render a laid-out chart to a standalone SVG document string.
    pub fn render_svg(&self, chart: &Chart) -> String {
        info!("Rendering SVG document");

        export::render_document(chart, self.config.style())
    }
}
