//! The `.pen` design-document patch utility.
//!
//! A `.pen` file is a JSON tree produced by the design tool the pitch deck
//! was drawn in: a root document whose children are slide frames laid out
//! side by side on one canvas, each slide holding a header, a content grid,
//! and a footer text node.
//!
//! This module parses that tree into a typed schema ([`Document`] /
//! [`Node`]), validates the shape it is about to touch, and applies the one
//! supported patch: inserting the "The Platform" slide and renumbering
//! everything after it ([`patch::insert_platform_slide`]). Fields the schema
//! does not know about are preserved verbatim through a load/save round
//! trip.

pub mod patch;

mod schema;

pub use schema::{CardView, Document, HeaderView, Node, SlideView};

use std::{fs, io, path::Path};

use log::info;
use thiserror::Error;

/// Errors produced while loading, validating, or patching a design document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has {found} top-level slides but the patch requires slide index {index}")]
    MissingSlide { index: usize, found: usize },

    #[error("slide '{slide}' does not match the expected template shape: {reason}")]
    Shape { slide: String, reason: String },
}

/// Loads a design document from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Document, DocumentError> {
    let path = path.as_ref();
    info!(path:?; "Loading design document");

    let raw = fs::read_to_string(path)?;
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}

/// Writes a design document back to disk with 2-space indentation.
///
/// This is the only write the patch utility performs; any failure before
/// this point leaves the file untouched.
pub fn save(path: impl AsRef<Path>, document: &Document) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let rendered = serde_json::to_string_pretty(document)?;
    fs::write(path, rendered)?;

    info!(path:?; "Design document written");
    Ok(())
}
