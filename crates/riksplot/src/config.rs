//! Configuration types for riksplot chart rendering.
//!
//! This module provides the configuration structures that control chart
//! geometry, styling, and data selection. All types implement
//! [`serde::Deserialize`] for loading from TOML, with per-field defaults so
//! a partial configuration file works.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Chart origin and per-year slice size.
//! - [`StyleConfig`] - Visual styling options such as background color.
//! - [`DataConfig`] - SCB region and party selection.

use serde::Deserialize;

/// Top-level application configuration.
///
/// Groups [`LayoutConfig`], [`StyleConfig`], and [`DataConfig`] into a
/// single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Data selection section.
    #[serde(default)]
    data: DataConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, data: DataConfig) -> Self {
        Self {
            layout,
            style,
            data,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the data selection configuration.
    pub fn data(&self) -> &DataConfig {
        &self.data
    }
}

/// Chart geometry configuration.
///
/// The defaults place the chart origin at `(20, 20)` with one 20x200 pixel
/// slice per election year.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// X-coordinate of the chart origin.
    #[serde(default = "default_origin")]
    origin_x: f64,

    /// Y-coordinate of the chart origin.
    #[serde(default = "default_origin")]
    origin_y: f64,

    /// Width of one year's stripe.
    #[serde(default = "default_slice_width")]
    slice_width: f64,

    /// Height of one year's stripe.
    #[serde(default = "default_slice_height")]
    slice_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin(),
            origin_y: default_origin(),
            slice_width: default_slice_width(),
            slice_height: default_slice_height(),
        }
    }
}

impl LayoutConfig {
    /// Returns the x-coordinate of the chart origin.
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    /// Returns the y-coordinate of the chart origin.
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    /// Returns the width of one year's stripe.
    pub fn slice_width(&self) -> f64 {
        self.slice_width
    }

    /// Returns the height of one year's stripe.
    pub fn slice_height(&self) -> f64 {
        self.slice_height
    }
}

fn default_origin() -> f64 {
    20.0
}

fn default_slice_width() -> f64 {
    20.0
}

fn default_slice_height() -> f64 {
    200.0
}

/// Visual styling configuration for the rendered chart.
///
/// Party fill colors come from the static metadata table; the only free
/// styling hook is the document background.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background color for the chart document, emitted verbatim into the
    /// stylesheet.
    #[serde(default)]
    background: Option<String>,
}

impl StyleConfig {
    /// Returns the configured background color, if any.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

/// SCB data selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// PXWeb electoral region code. `VR00` is the whole-country total.
    #[serde(default = "default_region")]
    region: String,

    /// Party codes to request, defaulting to every party in the canonical
    /// table.
    #[serde(default = "default_parties")]
    parties: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            parties: default_parties(),
        }
    }
}

impl DataConfig {
    /// Returns the electoral region code.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the party codes to request.
    pub fn parties(&self) -> &[String] {
        &self.parties
    }
}

fn default_region() -> String {
    "VR00".to_string()
}

fn default_parties() -> Vec<String> {
    crate::parties::SWEDISH_PARTIES
        .iter()
        .map(|party| party.code().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.origin_x(), 20.0);
        assert_eq!(layout.origin_y(), 20.0);
        assert_eq!(layout.slice_width(), 20.0);
        assert_eq!(layout.slice_height(), 200.0);
    }

    #[test]
    fn test_data_defaults() {
        let data = DataConfig::default();
        assert_eq!(data.region(), "VR00");
        assert_eq!(data.parties().len(), 9);
        assert!(data.parties().contains(&"S".to_string()));
    }

    #[test]
    fn test_style_default_has_no_background() {
        assert!(StyleConfig::default().background().is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.layout().slice_height(), 200.0);
        assert_eq!(config.data().region(), "VR00");
    }

    #[test]
    fn test_partial_toml_overrides_selectively() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            slice_height = 400.0

            [style]
            background = "#ffffff"

            [data]
            parties = ["S", "M"]
            "##,
        )
        .expect("partial config parses");

        assert_eq!(config.layout().slice_height(), 400.0);
        assert_eq!(config.layout().slice_width(), 20.0);
        assert_eq!(config.style().background(), Some("#ffffff"));
        assert_eq!(config.data().parties(), ["S", "M"]);
        assert_eq!(config.data().region(), "VR00");
    }
}
