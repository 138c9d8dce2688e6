//! Deck serialization.
//!
//! The only supported target is a single SVG document with every slide on
//! one surface; see [`svg`].

pub mod svg;
