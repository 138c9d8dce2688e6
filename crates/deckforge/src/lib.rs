//! Deckforge - procedural generation of the BlockTrace investor pitch deck.
//!
//! The pipeline is a single top-to-bottom pass: the declarative slide
//! content ([`content`]) flows through the generic rendering pass
//! ([`render`]) into a [`deckforge_core::canvas::Deck`] of drawable
//! elements, which the SVG exporter ([`export::svg`]) serializes to one
//! presentation document.
//!
//! The unrelated one-shot [`pen`] module patches the `.pen` design document
//! the same deck was drawn in: it inserts the "The Platform" slide and
//! renumbers everything after it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use deckforge::{content, export::svg::SvgExporter, render, theme::Theme};
//!
//! # fn main() -> Result<(), deckforge::DeckError> {
//! let slides = content::pitch_deck();
//! let deck = render::render_deck(&slides, Theme::default())?;
//! SvgExporter::new("blocktrace-pitch-deck.svg").export(&deck)?;
//! println!("saved {} slides", deck.len());
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod content;
pub mod export;
pub mod pen;
pub mod render;
pub mod theme;
pub mod widget;

mod error;

pub use deckforge_core::{canvas, color, draw, geometry};

pub use error::DeckError;
