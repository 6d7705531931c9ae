//! Theme Logos - light and dark logo extraction for repository automation
//!
//! Takes the free-text response of a language model that was asked for a light
//! theme and a dark theme SVG logo, extracts and validates both documents, and
//! patches a README with a `<picture>` element that picks the right one for the
//! viewer's color scheme.
//!
//! # Example
//!
//! ```rust
//! use theme_logos::{apply_picture_block, extract_theme_variants};
//!
//! let response = r#"
//! Light: <svg width="64" height="64"><title>Logo (Light Theme)</title></svg>
//! Dark: <svg width="64" height="64"><title>Logo (Dark Theme)</title></svg>
//! "#;
//!
//! let pair = extract_theme_variants(response).unwrap();
//! assert!(pair.light.contains("Light Theme"));
//! assert!(pair.dark.contains("Dark Theme"));
//!
//! let readme = apply_picture_block("# Project\n", "assets/logo-light.svg", "assets/logo-dark.svg", ".");
//! assert!(readme.contains("<picture>"));
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod extract;
pub mod readme;

pub use action::{run, GeneratedLogos, LogoJob};
pub use config::{ActionConfig, ConfigError};
pub use error::{ActionError, ExtractError, Rejection};
pub use extract::{
    analyze, extract_single, extract_theme_variants, is_valid, validate, Extraction,
    SvgCandidate, SvgExtractor, Theme, ThemePair,
};
pub use readme::{apply_picture_block, PictureBlock};
