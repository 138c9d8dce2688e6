//! Adapts library errors into miette diagnostics for terminal rendering.
//!
//! The library errors are plain `thiserror` enums; this module wraps each
//! error in the source chain as its own reportable diagnostic, attaching a
//! help hint where one exists (schema mismatches in particular have a known
//! cause worth surfacing).

use std::error::Error as StdError;

use miette::Diagnostic;
use thiserror::Error;

use deckforge::{DeckError, pen::DocumentError};

use crate::CliError;

/// A single renderable diagnostic: message plus optional help text.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,

    #[help]
    help: Option<String>,
}

/// Converts an error and its source chain into independent reportables.
pub fn to_reportables(err: &CliError) -> Vec<Reportable> {
    let mut reportables = vec![Reportable {
        message: err.to_string(),
        help: help_for(err),
    }];

    let mut source = err.source();
    while let Some(cause) = source {
        reportables.push(Reportable {
            message: cause.to_string(),
            help: None,
        });
        source = cause.source();
    }
    reportables
}

fn help_for(err: &CliError) -> Option<String> {
    match err {
        CliError::MissingConfig(_) => Some(String::from(
            "pass --config with an existing TOML file, or drop the flag to use defaults",
        )),
        CliError::Deck(DeckError::Document(doc)) | CliError::Document(doc) => match doc {
            DocumentError::MissingSlide { .. } => Some(String::from(
                "the patch clones slide 6 as its template; run against the original \
                 pitch-deck.pen with all 14 slides present",
            )),
            DocumentError::Shape { .. } => Some(String::from(
                "the template slide must keep its original layout: a header with label, \
                 title, and description, a 2x2 card grid, and a trailing footer text node",
            )),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_flattened() {
        let err = CliError::Document(DocumentError::MissingSlide { index: 5, found: 2 });
        let reportables = to_reportables(&err);

        assert!(!reportables.is_empty());
        assert!(reportables[0].message.contains("5"));
        assert!(reportables[0].help.is_some());
    }

    #[test]
    fn test_io_errors_have_no_help() {
        let err = CliError::Io(std::io::Error::other("disk on fire"));
        let reportables = to_reportables(&err);

        assert!(reportables[0].help.is_none());
    }
}
