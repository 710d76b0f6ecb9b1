//! RGB color handling for chart styling.

use std::fmt;

/// An RGB color triple.
///
/// Serializes in the CSS functional form, `rgb(r,g,b)` with no spaces, which
/// is the format the party stylesheet emits.
///
/// # Examples
///
/// ```
/// # use riksplot_core::color::Rgb;
/// assert_eq!(Rgb::new(224, 46, 61).to_string(), "rgb(224,46,61)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from its red, green, and blue components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red component
    pub fn r(self) -> u8 {
        self.r
    }

    /// Returns the green component
    pub fn g(self) -> u8 {
        self.g
    }

    /// Returns the blue component
    pub fn b(self) -> u8 {
        self.b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
