//! Semantic model for parliamentary election results.
//!
//! [`PartyResult`] and [`YearSlice`] are the structured form the layout
//! consumes: one slice per election year, each holding the counted results in
//! canonical stacking order.

/// One party's seat count in a single election year.
///
/// Holds a counted result only: a mandate count is always at least 1. Raw
/// data is admitted through [`PartyResult::from_raw`], which filters out
/// anything that does not parse to a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyResult {
    code: String,
    mandates: u32,
}

impl PartyResult {
    /// Creates a result from an already-counted mandate total.
    pub fn new(code: impl Into<String>, mandates: u32) -> Self {
        Self {
            code: code.into(),
            mandates,
        }
    }

    /// Parses a raw seat-count string into a result.
    ///
    /// The string is trimmed first, so padded numbers survive. Anything that
    /// fails to parse as a non-negative integer (SCB uses `".."` for years a
    /// party held no seats) or parses to zero yields `None`. This is silent
    /// data cleaning, not an error: absent parties simply do not appear in
    /// the year's slice.
    pub fn from_raw(code: impl Into<String>, raw: &str) -> Option<Self> {
        let mandates: u32 = raw.trim().parse().ok()?;
        if mandates == 0 {
            return None;
        }
        Some(Self::new(code, mandates))
    }

    /// Returns the party code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the mandate count.
    pub fn mandates(&self) -> u32 {
        self.mandates
    }
}

/// One election year's results, ordered canonically.
///
/// The result order follows the fixed party stacking order (see
/// [`crate::parties`]), not seat counts, so stripes remain visually
/// comparable across years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSlice {
    year: String,
    results: Vec<PartyResult>,
}

impl YearSlice {
    /// Creates a year slice from ordered results.
    pub fn new(year: impl Into<String>, results: Vec<PartyResult>) -> Self {
        Self {
            year: year.into(),
            results,
        }
    }

    /// Returns the election year.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the ordered results.
    pub fn results(&self) -> &[PartyResult] {
        &self.results
    }
}
