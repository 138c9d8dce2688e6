//! Deckforge Core Types and Definitions
//!
//! This crate provides the foundational types for the deckforge slide
//! generator. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types in typographic points ([`geometry`] module)
//! - **Draw**: The drawable element model placed on slides ([`draw`] module)
//! - **Canvas**: Slide surfaces and the deck they belong to ([`canvas`] module)

pub mod canvas;
pub mod color;
pub mod draw;
pub mod geometry;
