//! Error types for deck composition and export.
//!
//! This module provides the main error type [`DeckError`] which wraps the
//! conditions that can occur while composing, rendering, or writing a deck.
//! Nothing is caught or retried inside the library; errors propagate to the
//! caller with `?`.

use std::io;

use thiserror::Error;

use deckforge_core::{color::ColorError, geometry::Rect};

use crate::pen::DocumentError;

/// The main error type for deck operations.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{context}: frame {width}x{height} must have positive dimensions")]
    InvalidFrame {
        context: &'static str,
        width: f32,
        height: f32,
    },

    #[error("table with {columns} columns was given a row of {cells} cells")]
    TableShape { columns: usize, cells: usize },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

impl DeckError {
    /// Create an `InvalidFrame` error for the given drawing operation.
    pub(crate) fn invalid_frame(context: &'static str, frame: Rect) -> Self {
        Self::InvalidFrame {
            context,
            width: frame.width(),
            height: frame.height(),
        }
    }
}
