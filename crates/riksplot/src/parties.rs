//! Static party metadata and the canonical stacking order.
//!
//! The table lists every party that has held Riksdag seats in the dataset,
//! in the fixed order stripes are stacked top-to-bottom. The order is
//! political (left to right), never by seat count, so the same party sits at
//! the same relative position in every year's stripe.

use riksplot_core::color::Rgb;

/// Metadata for one party: code, full name, and display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
    code: &'static str,
    name: &'static str,
    colour: Rgb,
}

impl Party {
    /// Returns the party code as used by SCB (e.g. `"S"`).
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the full party name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the display color.
    pub fn colour(&self) -> Rgb {
        self.colour
    }
}

/// All parties in canonical stacking order.
pub static SWEDISH_PARTIES: [Party; 9] = [
    Party {
        code: "V",
        name: "Vänsterpartiet",
        colour: Rgb::new(145, 20, 20),
    },
    Party {
        code: "S",
        name: "Socialdemokraterna",
        colour: Rgb::new(224, 46, 61),
    },
    Party {
        code: "MP",
        name: "Miljöpartiet",
        colour: Rgb::new(130, 200, 130),
    },
    Party {
        code: "C",
        name: "Centerpartiet",
        colour: Rgb::new(49, 165, 50),
    },
    Party {
        code: "FP",
        name: "Liberalerna",
        colour: Rgb::new(30, 105, 170),
    },
    Party {
        code: "NYD",
        name: "Ny demokrati",
        colour: Rgb::new(100, 80, 0),
    },
    Party {
        code: "KD",
        name: "Kristdemokraterna",
        colour: Rgb::new(51, 29, 121),
    },
    Party {
        code: "M",
        name: "Moderaterna",
        colour: Rgb::new(125, 190, 225),
    },
    Party {
        code: "SD",
        name: "Sverigedemokraterna",
        colour: Rgb::new(255, 195, 70),
    },
];

/// Looks up a party by code.
pub fn lookup(code: &str) -> Option<&'static Party> {
    SWEDISH_PARTIES.iter().find(|party| party.code == code)
}

/// Returns the stacking rank for a party code.
///
/// Known codes rank by their table position. An unknown code ranks after all
/// known parties (`SWEDISH_PARTIES.len()`); callers breaking ties among
/// unknowns should compare codes so the order stays deterministic run to
/// run.
pub fn rank(code: &str) -> usize {
    SWEDISH_PARTIES
        .iter()
        .position(|party| party.code == code)
        .unwrap_or(SWEDISH_PARTIES.len())
}
