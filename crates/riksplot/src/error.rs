//! Error types for riksplot operations.
//!
//! This module provides the main error type [`RiksplotError`] which wraps
//! the error conditions that can occur while building a chart.

use std::io;

use thiserror::Error;

use riksplot_scb::ScbError;

use crate::layout::LayoutError;

/// The main error type for riksplot operations.
///
/// Data retrieval and cache failures surface here as hard failures; layout
/// failures reject the whole chart rather than emitting partial geometry.
#[derive(Debug, Error)]
pub enum RiksplotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Data retrieval error: {0}")]
    Data(#[from] ScbError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = RiksplotError::from(LayoutError::EmptyYear {
            year: "1973".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Layout error: No counted mandates for year 1973"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = RiksplotError::Config("bad TOML".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad TOML");
    }

    #[test]
    fn test_data_error_display() {
        let err = RiksplotError::from(ScbError::Status { code: 404 });
        assert_eq!(
            err.to_string(),
            "Data retrieval error: SCB API returned status 404"
        );
    }
}
