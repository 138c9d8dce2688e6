//! Command-line argument definitions for the deckforge binaries.
//!
//! This module defines the argument structures parsed from the command line
//! using [`clap`]: [`Args`] for the deck generator and [`PatchArgs`] for the
//! design-document patch utility. Both tools run without any required
//! arguments and write to fixed default paths.

use clap::Parser;

/// Command-line arguments for the deck generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file (defaults to blocktrace-pitch-deck.svg)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Command-line arguments for the design-document patch utility
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PatchArgs {
    /// Path to the design document (defaults to pitch-deck.pen)
    #[arg(help = "Path to the .pen design document")]
    pub document: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
