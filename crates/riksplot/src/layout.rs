//! Proportional stripe layout.
//!
//! Each election year becomes one vertical stripe: a stack of rectangles
//! whose heights split the slice height in proportion to seat counts, with
//! zero gap and zero overlap. Box boundaries are derived from a single
//! running cumulative mandate counter, so every boundary comes from the
//! absolute cumulative fraction `cumulative / total` rather than from
//! summing previously rounded heights. The end of one box is therefore
//! exactly the start of the next, and the stack's total height carries no
//! accumulated rounding drift.

use log::debug;
use thiserror::Error;

use riksplot_core::{
    geometry::{Bounds, Point, Size},
    node::{Node, Rect},
};

use crate::{config::LayoutConfig, semantic::YearSlice};

/// Errors from stripe layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A year slice reached layout with a mandate total of zero.
    ///
    /// Structuring drops such years before layout, so this only fires for
    /// callers that build slices by hand. Reporting it beats dividing by
    /// zero and emitting NaN geometry.
    #[error("No counted mandates for year {year}")]
    EmptyYear { year: String },
}

/// A laid-out chart: the flat ordered rectangle list plus its extent.
#[derive(Debug, Clone)]
pub struct Chart {
    nodes: Vec<Node>,
    bounds: Bounds,
}

impl Chart {
    /// Returns the rectangles in year order, then within-year stacking order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the chart extent, origin margin included.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Lays out year slices as proportional stripes.
#[derive(Debug, Clone)]
pub struct StripeEngine {
    origin: Point,
    slice: Size,
}

impl StripeEngine {
    /// Creates an engine from the layout configuration.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            origin: Point::new(config.origin_x(), config.origin_y()),
            slice: Size::new(config.slice_width(), config.slice_height()),
        }
    }

    /// Lays out one year's stripe at horizontal position `x0`.
    ///
    /// Emits one [`Rect`] per party in the slice's order, stacked
    /// top-to-bottom, tagged with `id = "bar<year><code>"` and class
    /// `party<code>` (codes lowercased).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyYear`] when the slice's mandate total is
    /// zero.
    pub fn stripe_for_year(&self, slice: &YearSlice, x0: f64) -> Result<Vec<Node>, LayoutError> {
        let total: u32 = slice.results().iter().map(|r| r.mandates()).sum();
        if total == 0 {
            return Err(LayoutError::EmptyYear {
                year: slice.year().to_string(),
            });
        }
        let total = f64::from(total);
        let height = self.slice.height();

        let column = self.origin.with_x(x0);
        let mut nodes = Vec::with_capacity(slice.results().len());
        let mut cumulative: u32 = 0;
        for party in slice.results() {
            // both boundaries come from the shared running total
            let top = (f64::from(cumulative) / total) * height;
            cumulative += party.mandates();
            let bottom = (f64::from(cumulative) / total) * height;

            let code = party.code().to_lowercase();
            let top_left = column.add_point(Point::new(0.0, top));
            let mut rect = Rect::new(top_left.x(), top_left.y(), self.slice.width(), bottom - top);
            rect.set_attribute("id", format!("bar{}{}", slice.year(), code));
            rect.add_class(format!("party{code}"));
            nodes.push(Node::from(rect));
        }

        Ok(nodes)
    }

    /// Lays out the full chart.
    ///
    /// Slices are taken in the caller's order (structuring already delivers
    /// them chronologically); the horizontal cursor advances by one slice
    /// width per year. The result concatenates every year's rectangles into
    /// one flat list and reports the covered [`Bounds`].
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyYear`] if any slice has a zero mandate
    /// total; the whole chart is rejected rather than emitting partial
    /// geometry.
    pub fn layout_chart(&self, slices: &[YearSlice]) -> Result<Chart, LayoutError> {
        let mut nodes = Vec::new();
        let mut bounds = Bounds::new_from_top_left(self.origin, Size::default());
        let mut x0 = self.origin.x();

        for slice in slices {
            nodes.extend(self.stripe_for_year(slice, x0)?);
            debug!(year = slice.year(), x0; "Laid out year stripe");

            let stripe = Bounds::new_from_top_left(self.origin.with_x(x0), self.slice);
            bounds = bounds.merge(&stripe);
            x0 += self.slice.width();
        }

        Ok(Chart { nodes, bounds })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::semantic::PartyResult;

    fn engine() -> StripeEngine {
        StripeEngine::new(&LayoutConfig::default())
    }

    fn rects(nodes: &[Node]) -> Vec<&Rect> {
        nodes
            .iter()
            .map(|n| n.as_rect().expect("stripe emits only rects"))
            .collect()
    }

    #[test]
    fn test_single_year_scenario_geometry() {
        // origin (20,20), slice 20x200, canonical order V,S,M
        let slice = YearSlice::new(
            "2018",
            vec![
                PartyResult::new("V", 30),
                PartyResult::new("S", 100),
                PartyResult::new("M", 70),
            ],
        );

        let nodes = engine().stripe_for_year(&slice, 20.0).expect("layout succeeds");
        let rects = rects(&nodes);

        assert_eq!(rects.len(), 3);
        for rect in &rects {
            assert_approx_eq!(f64, rect.x().value(), 20.0);
            assert_approx_eq!(f64, rect.width().value(), 20.0);
        }
        assert_approx_eq!(f64, rects[0].y().value(), 20.0);
        assert_approx_eq!(f64, rects[0].height().value(), 30.0);
        assert_approx_eq!(f64, rects[1].y().value(), 50.0);
        assert_approx_eq!(f64, rects[1].height().value(), 100.0);
        assert_approx_eq!(f64, rects[2].y().value(), 150.0);
        assert_approx_eq!(f64, rects[2].height().value(), 70.0);
    }

    #[test]
    fn test_stripe_tags_id_and_class() {
        let slice = YearSlice::new("2018", vec![PartyResult::new("SD", 62)]);

        let nodes = engine().stripe_for_year(&slice, 20.0).expect("layout succeeds");

        assert_eq!(
            nodes[0].to_string(),
            "<rect x=\"20px\" y=\"20px\" width=\"20px\" height=\"200px\" id=\"bar2018sd\" class=\"partysd\" />"
        );
    }

    #[test]
    fn test_heights_sum_to_slice_height() {
        // 349 seats split unevenly; boundaries must not drift
        let slice = YearSlice::new(
            "2014",
            vec![
                PartyResult::new("V", 21),
                PartyResult::new("S", 113),
                PartyResult::new("MP", 25),
                PartyResult::new("C", 22),
                PartyResult::new("FP", 19),
                PartyResult::new("KD", 16),
                PartyResult::new("M", 84),
                PartyResult::new("SD", 49),
            ],
        );

        let nodes = engine().stripe_for_year(&slice, 20.0).expect("layout succeeds");
        let total_height: f64 = rects(&nodes).iter().map(|r| r.height().value()).sum();

        assert_approx_eq!(f64, total_height, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_boxes_stack_with_zero_gap() {
        let slice = YearSlice::new(
            "2014",
            vec![
                PartyResult::new("V", 21),
                PartyResult::new("S", 113),
                PartyResult::new("M", 84),
                PartyResult::new("SD", 49),
            ],
        );

        let nodes = engine().stripe_for_year(&slice, 20.0).expect("layout succeeds");
        let rects = rects(&nodes);

        for pair in rects.windows(2) {
            assert_approx_eq!(
                f64,
                pair[1].y().value(),
                pair[0].y().value() + pair[0].height().value(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_empty_year_is_rejected() {
        let slice = YearSlice::new("1973", vec![]);

        let err = engine().stripe_for_year(&slice, 20.0).expect_err("total of zero");

        assert!(matches!(err, LayoutError::EmptyYear { ref year } if year == "1973"));
    }

    #[test]
    fn test_chart_advances_cursor_per_year() {
        let slices = vec![
            YearSlice::new("2014", vec![PartyResult::new("S", 113)]),
            YearSlice::new("2018", vec![PartyResult::new("S", 100)]),
            YearSlice::new("2022", vec![PartyResult::new("S", 107)]),
        ];

        let chart = engine().layout_chart(&slices).expect("layout succeeds");
        let rects = rects(chart.nodes());

        assert_eq!(rects.len(), 3);
        assert_approx_eq!(f64, rects[0].x().value(), 20.0);
        assert_approx_eq!(f64, rects[1].x().value(), 40.0);
        assert_approx_eq!(f64, rects[2].x().value(), 60.0);
    }

    #[test]
    fn test_chart_concatenates_in_year_then_party_order() {
        let slices = vec![
            YearSlice::new(
                "2018",
                vec![PartyResult::new("V", 28), PartyResult::new("S", 100)],
            ),
            YearSlice::new("2022", vec![PartyResult::new("S", 107)]),
        ];

        let chart = engine().layout_chart(&slices).expect("layout succeeds");

        let ids: Vec<String> = chart
            .nodes()
            .iter()
            .map(|n| {
                n.as_rect()
                    .and_then(|r| r.extra().get("id"))
                    .expect("rect has id")
                    .to_string()
            })
            .collect();
        assert_eq!(ids, ["bar2018v", "bar2018s", "bar2022s"]);
    }

    #[test]
    fn test_chart_bounds_cover_all_stripes() {
        let slices = vec![
            YearSlice::new("2018", vec![PartyResult::new("S", 100)]),
            YearSlice::new("2022", vec![PartyResult::new("S", 107)]),
        ];

        let chart = engine().layout_chart(&slices).expect("layout succeeds");
        let bounds = chart.bounds();

        assert_approx_eq!(f64, bounds.min_x(), 20.0);
        assert_approx_eq!(f64, bounds.min_y(), 20.0);
        assert_approx_eq!(f64, bounds.max_x(), 60.0);
        assert_approx_eq!(f64, bounds.max_y(), 220.0);
    }

    #[test]
    fn test_empty_chart_has_empty_node_list() {
        let chart = engine().layout_chart(&[]).expect("layout succeeds");
        assert!(chart.nodes().is_empty());
        // the bounds collapse to the origin with no stripes to merge in
        assert_approx_eq!(f64, chart.bounds().width(), 0.0);
        assert_approx_eq!(f64, chart.bounds().height(), 0.0);
        assert_approx_eq!(f64, chart.bounds().min_x(), 20.0);
    }
}
