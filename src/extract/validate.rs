//! Shallow structural checks for SVG candidates
//!
//! These are coarse sanity rules, not an XML parser: the candidate must be
//! wrapped in root tag markers, the markers must be balanced by count, and the
//! document must be long enough to hold something.

use crate::error::Rejection;

/// Opening root tag marker
pub const OPENING_MARKER: &str = "<svg";

/// Closing root tag marker
pub const CLOSING_MARKER: &str = "</svg>";

/// Minimum trimmed length in characters
pub const MIN_LENGTH: usize = 20;

/// Check a candidate and report the first rule it breaks
pub fn validate(candidate: &str) -> Result<(), Rejection> {
    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }
    if !trimmed.starts_with(OPENING_MARKER) {
        return Err(Rejection::MissingOpeningTag);
    }
    if !trimmed.ends_with(CLOSING_MARKER) {
        return Err(Rejection::MissingClosingTag);
    }

    let opening = trimmed.matches(OPENING_MARKER).count();
    let closing = trimmed.matches(CLOSING_MARKER).count();
    if opening != closing {
        return Err(Rejection::Unbalanced { opening, closing });
    }

    let length = trimmed.chars().count();
    if length < MIN_LENGTH {
        return Err(Rejection::TooShort {
            length,
            minimum: MIN_LENGTH,
        });
    }

    Ok(())
}

/// Whether a candidate passes every structural rule
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
