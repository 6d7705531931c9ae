//! Candidate and theme types produced during extraction

use std::fmt;

use crate::error::Rejection;

use super::scanner::Span;

/// Theme a candidate appears to be drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Unknown,
}

impl Theme {
    /// Infer the theme from `light`/`dark` mentions anywhere in the text.
    ///
    /// Matching is case-insensitive; `light` wins when both appear.
    pub fn infer(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("light") {
            Theme::Light
        } else if lower.contains("dark") {
            Theme::Dark
        } else {
            Theme::Unknown
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::Unknown => write!(f, "unknown"),
        }
    }
}

/// Where in the response a candidate was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// Body of an untagged or `svg` code fence
    Fenced,
    /// Raw `<svg>...</svg>` span outside of fences
    Direct,
}

/// A substring of the response believed to be one SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgCandidate {
    /// Candidate text, trimmed
    pub text: String,
    /// Byte span of the trimmed text in the response
    pub span: Span,
    pub discovery: Discovery,
    pub theme: Theme,
    /// Set when the candidate failed structural validation
    pub rejection: Option<Rejection>,
}

impl SvgCandidate {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// A light and a dark logo, both required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

/// How the pair was assigned to its slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Each candidate mentioned its theme
    Labeled,
    /// No theme mentions; first valid candidate is light, second is dark
    Positional,
}
