//! Error adapter for converting RiksplotError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use riksplot::RiksplotError;

/// Adapter wrapping a [`RiksplotError`] for miette rendering.
///
/// The chart pipeline has no source text to annotate, so the adapter
/// supplies per-variant codes and help text without labeled spans.
pub struct ErrorAdapter<'a>(pub &'a RiksplotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RiksplotError::Io(_) => "riksplot::io",
            RiksplotError::Data(_) => "riksplot::data",
            RiksplotError::Layout(_) => "riksplot::layout",
            RiksplotError::Config(_) => "riksplot::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RiksplotError::Io(_) => return None,
            RiksplotError::Data(_) => {
                "Check network connectivity, or rerun with --refresh to discard a stale cache entry"
            }
            RiksplotError::Layout(_) => {
                "The seat data contains a year with no counted mandates; verify the party selection"
            }
            RiksplotError::Config(_) => "Check the TOML configuration file for syntax errors",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
