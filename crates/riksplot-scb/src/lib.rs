//! SCB data access for riksplot.
//!
//! This crate talks to Statistics Sweden's (SCB) PXWeb API to retrieve
//! parliamentary seat counts, reshapes the row-oriented response into the
//! [`SeatTable`] form the chart pipeline consumes, and caches the reshaped
//! table on disk so repeated runs never re-contact the API.

pub mod cache;
pub mod client;

mod error;

pub use cache::{Cache, load_or_fetch};
pub use client::ScbClient;
pub use error::ScbError;

use std::collections::BTreeMap;

/// Seat counts keyed by year, then by party code.
///
/// Counts stay as the raw strings the API returns; parsing and filtering of
/// non-numeric markers (e.g. `".."` for years a party held no seats) happens
/// downstream when year slices are structured. `BTreeMap` keeps iteration
/// deterministic, and since SCB years are four-digit strings, key order is
/// chronological.
pub type SeatTable = BTreeMap<String, BTreeMap<String, String>>;
