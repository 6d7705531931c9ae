//! Error types for extraction and the action pipeline

use std::path::PathBuf;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::config::ConfigError;
use crate::extract::Span;

/// Why a candidate failed structural validation.
///
/// Rejections never abort extraction; the candidate is dropped and the reason
/// is kept for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("candidate is empty")]
    Empty,

    #[error("candidate does not start with `<svg`")]
    MissingOpeningTag,

    #[error("candidate does not end with `</svg>`")]
    MissingClosingTag,

    #[error("unbalanced root tags: {opening} opening, {closing} closing")]
    Unbalanced { opening: usize, closing: usize },

    #[error("candidate is {length} characters long, minimum is {minimum}")]
    TooShort { length: usize, minimum: usize },
}

impl Rejection {
    /// Format the rejection against the response it was found in using ariadne
    pub fn format(&self, source: &str, filename: &str, span: &Span) -> String {
        let span = char_span(source, span);
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message("SVG candidate rejected")
            .with_label(Label::new((filename, span)).with_message(self.to_string()))
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a byte span into the character span ariadne expects
fn char_span(source: &str, span: &Span) -> Span {
    let end = span.end.min(source.len());
    let start = span.start.min(end);
    let char_start = source[..start].chars().count();
    char_start..char_start + source[start..end].chars().count()
}

/// Errors from turning a response into logo markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No candidate in the response passed validation
    #[error("no valid SVG content found in response ({length} chars, starts with: {preview:?})")]
    NoSvgFound { length: usize, preview: String },

    /// Light and dark variants could not both be assigned
    #[error("failed to extract both theme variants ({valid} valid SVG candidate(s) found)")]
    MissingVariants { valid: usize },
}

impl ExtractError {
    /// Create a no-SVG error with a short preview of the response
    pub fn no_svg(response: &str) -> Self {
        Self::NoSvgFound {
            length: response.chars().count(),
            preview: response.chars().take(100).collect(),
        }
    }
}

/// Errors from the end-to-end logo pipeline
#[derive(Error, Debug)]
pub enum ActionError {
    /// The model response could not be located
    #[error("logo response file not found: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ActionError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
