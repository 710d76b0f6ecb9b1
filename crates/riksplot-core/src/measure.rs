//! Unit-tagged scalar values for SVG attribute serialization.
//!
//! SVG lengths carry a unit suffix (`20px`). [`Measurement`] pairs a numeric
//! magnitude with a [`Unit`] and renders the two with no separator, so a
//! measurement of `20` pixels serializes as `"20px"`.

use std::fmt;

/// A display unit for a [`Measurement`].
///
/// This is a closed set: extending it means adding a new enum member, not
/// parsing arbitrary unit strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    /// CSS pixels, symbol `px`.
    #[default]
    Px,
}

impl Unit {
    /// Returns the unit symbol used in serialized output.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Px => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A numeric magnitude tagged with a display [`Unit`].
///
/// Measurements are immutable value types: once constructed, neither the
/// magnitude nor the unit changes.
///
/// # Examples
///
/// ```
/// # use riksplot_core::measure::Measurement;
/// assert_eq!(Measurement::new(20.0).to_string(), "20px");
/// assert_eq!(Measurement::new(37.5).to_string(), "37.5px");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    /// Creates a measurement in the default unit ([`Unit::Px`]).
    ///
    /// The default is supplied here rather than read from any module-level
    /// state; callers that want a different unit use [`Measurement::with_unit`].
    pub fn new(value: f64) -> Self {
        Self::with_unit(value, Unit::default())
    }

    /// Creates a measurement with an explicit unit.
    pub fn with_unit(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Returns the numeric magnitude.
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(self) -> Unit {
        self.unit
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
