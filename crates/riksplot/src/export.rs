//! SVG document assembly.
//!
//! The laid-out rectangles are embeddable on their own; this module wraps
//! them in a complete document: a root `svg` element sized from the chart
//! bounds, with a `style` element carrying one fill rule per party so the
//! rectangles' `party<code>` class hooks resolve to the canonical colors.

use riksplot_core::{
    measure::Measurement,
    node::{Element, Literal},
};

use crate::{config::StyleConfig, layout::Chart, parties::SWEDISH_PARTIES};

/// Renders a laid-out chart as a standalone SVG document string.
///
/// The viewport mirrors the chart's origin margin on the right and bottom
/// edges, so the stripes sit centered with equal whitespace all around.
pub fn render_document(chart: &Chart, style: &StyleConfig) -> String {
    let bounds = chart.bounds();
    let margin = bounds.min_point();
    let content = bounds.to_size();
    let width = margin.x() * 2.0 + content.width();
    let height = margin.y() * 2.0 + content.height();

    let mut svg = Element::new("svg");
    svg.set_attribute("xmlns", "http://www.w3.org/2000/svg");
    svg.set_attribute("width", Measurement::new(width));
    svg.set_attribute("height", Measurement::new(height));

    let mut style_element = Element::new("style");
    style_element.push_child(Literal::new(stylesheet(style)));
    svg.push_child(style_element);

    for node in chart.nodes() {
        svg.push_child(node.clone());
    }

    svg.to_string()
}

/// Builds the stylesheet text: the optional background rule followed by one
/// fill rule per party in canonical order.
fn stylesheet(style: &StyleConfig) -> String {
    let mut rules = Vec::with_capacity(SWEDISH_PARTIES.len() + 1);
    if let Some(background) = style.background() {
        rules.push(format!("svg {{ background: {background}; }}"));
    }
    for party in &SWEDISH_PARTIES {
        rules.push(format!(
            ".party{} {{ fill: {}; }}",
            party.code().to_lowercase(),
            party.colour()
        ));
    }
    rules.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::LayoutConfig,
        layout::StripeEngine,
        semantic::{PartyResult, YearSlice},
    };

    fn sample_chart() -> Chart {
        let slices = vec![YearSlice::new("2018", vec![PartyResult::new("S", 100)])];
        StripeEngine::new(&LayoutConfig::default())
            .layout_chart(&slices)
            .expect("layout succeeds")
    }

    #[test]
    fn test_document_root_and_viewport() {
        let doc = render_document(&sample_chart(), &StyleConfig::default());

        // one 20px slice from origin 20 gives max_x 40; margins mirror the origin
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"60px\" height=\"240px\">"));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn test_document_contains_party_fill_rules() {
        let doc = render_document(&sample_chart(), &StyleConfig::default());

        assert!(doc.contains(".partyv { fill: rgb(145,20,20); }"));
        assert!(doc.contains(".partys { fill: rgb(224,46,61); }"));
        assert!(doc.contains(".partysd { fill: rgb(255,195,70); }"));
    }

    #[test]
    fn test_document_contains_chart_rectangles() {
        let doc = render_document(&sample_chart(), &StyleConfig::default());

        assert!(doc.contains(
            "<rect x=\"20px\" y=\"20px\" width=\"20px\" height=\"200px\" id=\"bar2018s\" class=\"partys\" />"
        ));
    }

    #[test]
    fn test_background_rule_is_emitted_verbatim_when_configured() {
        let style: StyleConfig =
            serde_config(r#"background = "rgb(250,250,250)""#);

        let doc = render_document(&sample_chart(), &style);

        assert!(doc.contains("svg { background: rgb(250,250,250); }"));
    }

    #[test]
    fn test_no_background_rule_by_default() {
        let doc = render_document(&sample_chart(), &StyleConfig::default());
        assert!(!doc.contains("background"));
    }

    fn serde_config(toml_source: &str) -> StyleConfig {
        toml::from_str(toml_source).expect("style config parses")
    }
}
