//! Extraction of light and dark logo variants from a model response
//!
//! Discovery runs in two tiers. Code fences tagged `svg` (or untagged) are
//! tried first; only when none of them holds SVG markup is the raw text
//! scanned for `<svg>...</svg>` spans. Every candidate is validated, and the
//! valid ones are assigned to theme slots by their `light`/`dark` mentions,
//! falling back to source order when no candidate mentions a theme.

pub mod candidate;
pub mod scanner;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::ExtractError;

pub use candidate::{Assignment, Discovery, SvgCandidate, Theme, ThemePair};
pub use scanner::Span;
pub use validate::{is_valid, validate};

/// Name used for the response in diagnostic reports
const RESPONSE_NAME: &str = "response";

/// Outcome of analyzing one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Every discovered candidate in source order, valid or not
    pub candidates: Vec<SvgCandidate>,
    /// The assigned pair, present only when both slots were filled
    pub pair: Option<ThemePair>,
    /// How `pair` was assigned
    pub assignment: Option<Assignment>,
}

impl Extraction {
    /// Candidates that passed validation
    pub fn valid(&self) -> impl Iterator<Item = &SvgCandidate> {
        self.candidates.iter().filter(|c| c.is_valid())
    }

    /// Candidates that failed validation
    pub fn rejected(&self) -> impl Iterator<Item = &SvgCandidate> {
        self.candidates.iter().filter(|c| !c.is_valid())
    }

    pub fn into_result(self) -> Result<ThemePair, ExtractError> {
        let valid = self.valid().count();
        self.pair.ok_or(ExtractError::MissingVariants { valid })
    }
}

/// Find and validate every SVG candidate in the response
pub fn discover(response: &str) -> Vec<SvgCandidate> {
    let mut found: Vec<(Span, Discovery)> = scanner::fenced_blocks(response)
        .into_iter()
        .filter(|block| block.is_svg_tagged() && block.mentions_svg())
        .map(|block| (block.span, Discovery::Fenced))
        .collect();

    if found.is_empty() {
        found = scanner::direct_spans(response)
            .into_iter()
            .map(|span| (span, Discovery::Direct))
            .collect();
    }

    found
        .into_iter()
        .map(|(span, discovery)| {
            let text = response[span.clone()].trim();
            SvgCandidate {
                text: text.to_string(),
                span,
                discovery,
                theme: Theme::infer(text),
                rejection: validate(text).err(),
            }
        })
        .collect()
}

/// Discover candidates and assign the light and dark slots
pub fn analyze(response: &str) -> Extraction {
    info!(
        chars = response.chars().count(),
        "extracting theme variants from response"
    );

    let candidates = discover(response);
    info!(count = candidates.len(), "found SVG blocks in response");

    for (index, candidate) in candidates.iter().enumerate() {
        match &candidate.rejection {
            None => debug!(
                block = index + 1,
                chars = candidate.text.chars().count(),
                theme = %candidate.theme,
                "SVG block is valid"
            ),
            Some(rejection) => {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    debug!(
                        block = index + 1,
                        "SVG block failed validation\n{}",
                        rejection.format(response, RESPONSE_NAME, &candidate.span)
                    );
                }
            }
        }
    }

    let valid: Vec<&SvgCandidate> = candidates.iter().filter(|c| c.is_valid()).collect();
    info!(valid = valid.len(), "validated SVG blocks");

    let assigned = assign(&valid);
    match &assigned {
        Some((_, Assignment::Labeled)) => info!("assigned variants by theme mentions"),
        Some((_, Assignment::Positional)) => {
            info!("no theme mentions, using positional assignment: first=light, second=dark")
        }
        None if valid.len() == 1 => error!("only one SVG found when two were expected"),
        None => error!("failed to extract both theme variants"),
    }

    let (pair, assignment) = match assigned {
        Some((pair, assignment)) => (Some(pair), Some(assignment)),
        None => (None, None),
    };

    Extraction {
        candidates,
        pair,
        assignment,
    }
}

/// Assign valid candidates to the light and dark slots.
///
/// A candidate fills light if it mentions `light` and light is still empty,
/// otherwise dark if it mentions `dark` and dark is still empty. Positional
/// assignment only applies when neither slot was filled.
fn assign(valid: &[&SvgCandidate]) -> Option<(ThemePair, Assignment)> {
    let mut light = None;
    let mut dark = None;

    for (index, candidate) in valid.iter().enumerate() {
        let lower = candidate.text.to_lowercase();
        if light.is_none() && lower.contains("light") {
            debug!(block = index + 1, "identified as light theme variant");
            light = Some(index);
        } else if dark.is_none() && lower.contains("dark") {
            debug!(block = index + 1, "identified as dark theme variant");
            dark = Some(index);
        }
    }

    let (light, dark, assignment) = match (light, dark) {
        (Some(light), Some(dark)) => (light, dark, Assignment::Labeled),
        (None, None) if valid.len() >= 2 => (0, 1, Assignment::Positional),
        _ => return None,
    };

    let pair = ThemePair {
        light: valid[light].text.clone(),
        dark: valid[dark].text.clone(),
    };
    Some((pair, assignment))
}

/// Extract the light and dark variants, or nothing at all
pub fn extract_theme_variants(response: &str) -> Option<ThemePair> {
    analyze(response).pair
}

/// Extract one logo, picking the longest valid candidate.
///
/// Considers the first valid fenced block, the first valid raw
/// `<svg>...</svg>` span and the whole response. Equal lengths keep the
/// earlier candidate.
pub fn extract_single(response: &str) -> Result<String, ExtractError> {
    let mut picks: Vec<&str> = Vec::new();

    if let Some(block) = scanner::fenced_blocks(response)
        .into_iter()
        .find(|b| b.is_svg_tagged() && b.mentions_svg() && is_valid(b.body))
    {
        picks.push(block.body);
    }

    if let Some(span) = scanner::direct_spans(response)
        .into_iter()
        .find(|span| is_valid(&response[span.clone()]))
    {
        picks.push(&response[span]);
    }

    let whole = response.trim();
    if is_valid(whole) {
        picks.push(whole);
    }

    let mut best: Option<&str> = None;
    for pick in picks {
        match best {
            Some(current) if current.chars().count() >= pick.chars().count() => {}
            _ => best = Some(pick),
        }
    }

    best.map(str::to_string)
        .ok_or_else(|| ExtractError::no_svg(response))
}

/// Extractor that also keeps a copy of every response it sees
#[derive(Debug, Clone, Default)]
pub struct SvgExtractor {
    debug_path: Option<PathBuf>,
}

impl SvgExtractor {
    /// Create an extractor that writes no debug copy
    pub fn new() -> Self {
        Self::default()
    }

    /// Save each response to `path` before extracting
    pub fn with_debug_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_path = Some(path.into());
        self
    }

    pub fn debug_path(&self) -> Option<&Path> {
        self.debug_path.as_deref()
    }

    /// Save the debug copy, then analyze
    pub fn analyze(&self, response: &str) -> Extraction {
        self.save_debug_copy(response);
        analyze(response)
    }

    /// Save the debug copy, then extract both variants
    pub fn extract(&self, response: &str) -> Result<ThemePair, ExtractError> {
        self.analyze(response).into_result()
    }

    fn save_debug_copy(&self, response: &str) {
        let Some(path) = &self.debug_path else {
            return;
        };
        match fs::write(path, response) {
            Ok(()) => info!(path = %path.display(), "saved full response for debugging"),
            Err(e) => warn!(path = %path.display(), "could not save debug response: {e}"),
        }
    }
}
