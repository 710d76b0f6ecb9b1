//! Riksplot Core Types and Definitions
//!
//! This crate provides the foundational types for building riksplot charts.
//! It includes:
//!
//! - **Measurements**: Unit-tagged scalar values ([`measure::Measurement`])
//! - **Nodes**: The SVG element model ([`node`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: RGB color handling ([`color::Rgb`])

pub mod color;
pub mod geometry;
pub mod measure;
pub mod node;
