//! CLI logic for the deckforge binaries.
//!
//! Two entry points share this crate: [`run`] generates the pitch-deck SVG
//! and [`run_patch`] applies the platform-slide insertion to a `.pen`
//! design document. Both print exactly one success line; failures propagate
//! to the binaries, which render them with miette and exit nonzero.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, PatchArgs};

use std::{io, path::PathBuf};

use log::info;
use thiserror::Error;

use deckforge::{DeckError, content, export::svg::SvgExporter, pen, render};

/// Default output path for the generated deck.
pub const DEFAULT_DECK_PATH: &str = "blocktrace-pitch-deck.svg";

/// Default path of the design document the patch utility edits.
pub const DEFAULT_DOCUMENT_PATH: &str = "pitch-deck.pen";

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration file not found: {0}")]
    MissingConfig(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Document(#[from] pen::DocumentError),
}

/// Generates the pitch deck and writes it as a single SVG document.
///
/// Output path precedence: `--output` flag, then the configuration file,
/// then [`DEFAULT_DECK_PATH`].
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let theme = app_config.theme();

    let output: PathBuf = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .or(app_config.output.deck)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_PATH));

    info!(output_path:? = output; "Generating pitch deck");

    let slides = content::pitch_deck();
    let deck = render::render_deck(&slides, theme)?;
    SvgExporter::new(&output).export(&deck)?;

    info!(output_path:? = output; "Deck exported successfully");
    println!(
        "\u{2705} Saved {} \u{2014} {} slides",
        output.display(),
        deck.len()
    );
    Ok(())
}

/// Applies the platform-slide insertion to the design document.
///
/// Document path precedence: positional argument, then the configuration
/// file, then [`DEFAULT_DOCUMENT_PATH`]. The document is read once,
/// patched in memory, and written back once; a failure anywhere in between
/// leaves the file untouched.
pub fn run_patch(args: &PatchArgs) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let path: PathBuf = args
        .document
        .as_ref()
        .map(PathBuf::from)
        .or(app_config.output.document)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH));

    info!(document_path:? = path; "Patching design document");

    let mut document = pen::load(&path)?;
    pen::patch::insert_platform_slide(&mut document)?;
    pen::save(&path, &document)?;

    println!("Successfully updated {}", path.display());
    Ok(())
}
